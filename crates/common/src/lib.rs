//! Shared types and math for the snake workspace: grid coordinates,
//! headings and the 2D orthographic projection.

mod math;
mod types;

pub use math::{DEFAULT_WORLD_EXTENT, Projection, fit_projection, ortho_2d};
pub use types::{Direction, GridCoord};
