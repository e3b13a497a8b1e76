//! Game kernel: authoritative playfield state and fixed-step simulation.
//!
//! # Invariants
//! - The grid is cleared and rebuilt from snake and fruit on every step.
//! - Immediately after a step the grid holds exactly one head and at most one fruit.
//! - At most one step runs per [`Game::update`] call; surplus frame time is dropped.
//! - At most one turn is accepted between two steps, and never a reversal.

pub mod config;
pub mod game;
pub mod grid;
pub mod snake;
pub mod timer;

pub use config::{ConfigError, DEFAULT_STEP_INTERVAL, GameConfig};
pub use game::{Game, GameEvent, GameSummary, sample_empty};
pub use grid::{CELL_COUNT, Cell, GRID_SIZE, Grid, GridViolation};
pub use snake::Snake;
pub use timer::StepTimer;
