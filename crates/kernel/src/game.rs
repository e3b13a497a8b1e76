use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use snake_common::{Direction, GridCoord};

use crate::config::GameConfig;
use crate::grid::{Cell, GRID_SIZE, Grid};
use crate::snake::Snake;
use crate::timer::StepTimer;

/// Record of something that happened during a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A step completed with the head at `head`.
    Stepped { tick: u64, head: GridCoord },
    /// The head reached the fruit. `fruit` is the relocated position.
    FruitEaten {
        tick: u64,
        at: GridCoord,
        fruit: GridCoord,
        length: usize,
    },
    /// The head ran into the tail; the round restarted.
    Collided {
        tick: u64,
        at: GridCoord,
        length: usize,
    },
}

/// Counters for the HUD and CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub tick: u64,
    pub length: usize,
    pub fruit_eaten: u64,
    pub deaths: u64,
    pub best_length: usize,
}

impl std::fmt::Display for GameSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Game: tick={} length={} fruit={} deaths={} best={}",
            self.tick, self.length, self.fruit_eaten, self.deaths, self.best_length
        )
    }
}

/// Authoritative game state.
///
/// Owns the grid, snake, fruit, step timer and RNG. All mutation happens in
/// [`Game::turn`] and [`Game::update`]; renderers only read.
#[derive(Debug, Clone)]
pub struct Game {
    grid: Grid,
    snake: Snake,
    fruit: GridCoord,
    timer: StepTimer,
    rng: StdRng,
    tick: u64,
    fruit_eaten: u64,
    deaths: u64,
    best_length: usize,
    event_log: Vec<GameEvent>,
}

impl Game {
    /// New game seeded from the config, or from OS entropy if it has none.
    pub fn new(config: &GameConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self::with_seed(config, seed)
    }

    /// New game with head and fruit placed at random distinct cells.
    pub fn with_seed(config: &GameConfig, seed: u64) -> Self {
        let mut game = Self::from_parts(
            config,
            Snake::new(GridCoord::new(GRID_SIZE / 2, GRID_SIZE / 2), Direction::Right),
            GridCoord::new(0, 0),
            seed,
        );
        game.respawn();
        game
    }

    /// New game with a known layout. The grid reflects it immediately.
    pub fn from_parts(config: &GameConfig, snake: Snake, fruit: GridCoord, seed: u64) -> Self {
        let best_length = snake.length();
        let mut game = Self {
            grid: Grid::new(),
            snake,
            fruit,
            timer: StepTimer::new(config.step_interval),
            rng: StdRng::seed_from_u64(seed),
            tick: 0,
            fruit_eaten: 0,
            deaths: 0,
            best_length,
            event_log: Vec::new(),
        };
        game.rebuild_grid();
        game
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn fruit(&self) -> GridCoord {
        self.fruit
    }

    pub fn timer(&self) -> &StepTimer {
        &self.timer
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            tick: self.tick,
            length: self.snake.length(),
            fruit_eaten: self.fruit_eaten,
            deaths: self.deaths,
            best_length: self.best_length,
        }
    }

    /// Read-only access to the event log.
    pub fn events(&self) -> &[GameEvent] {
        &self.event_log
    }

    /// Drain and return the event log.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.event_log)
    }

    /// Forward a turn request to the snake's per-step latch.
    pub fn turn(&mut self, direction: Direction) -> bool {
        let accepted = self.snake.turn(direction);
        if accepted {
            tracing::debug!(?direction, tick = self.tick, "turn accepted");
        } else {
            tracing::trace!(?direction, tick = self.tick, "turn rejected");
        }
        accepted
    }

    /// Add frame time and run at most one step. Returns whether a step ran.
    pub fn update(&mut self, dt: f64) -> bool {
        self.timer.accumulate(dt);
        if !self.timer.consume() {
            return false;
        }
        self.step();
        true
    }

    /// Run one discrete step regardless of the timer.
    pub fn step(&mut self) {
        self.tick += 1;
        self.snake.release_latch();
        self.grid.clear();
        self.snake.shift_tail();
        self.snake.advance();
        self.write_grid();

        let head = self.snake.head();
        self.event_log.push(GameEvent::Stepped {
            tick: self.tick,
            head,
        });
        tracing::debug!(tick = self.tick, x = head.x, y = head.y, "step");

        if head == self.fruit {
            self.eat();
        }

        if self.snake.bites_itself() {
            let length = self.snake.length();
            tracing::info!(tick = self.tick, length, "snake collided with its tail");
            self.event_log.push(GameEvent::Collided {
                tick: self.tick,
                at: head,
                length,
            });
            self.deaths += 1;
            self.respawn();
            // Post-death timer value: two full intervals.
            self.timer.set_intervals(2.0);
        }
    }

    fn eat(&mut self) {
        let Some(fruit) = sample_empty(&self.grid, &mut self.rng) else {
            tracing::warn!(tick = self.tick, "board full, restarting round");
            self.respawn();
            return;
        };
        self.fruit = fruit;
        self.snake.grow();
        self.fruit_eaten += 1;
        self.best_length = self.best_length.max(self.snake.length());

        let length = self.snake.length();
        tracing::debug!(x = fruit.x, y = fruit.y, length, "fruit relocated");
        self.event_log.push(GameEvent::FruitEaten {
            tick: self.tick,
            at: self.snake.head(),
            fruit,
            length,
        });
    }

    /// Clear the board and place a fresh head and fruit on distinct cells.
    fn respawn(&mut self) {
        self.grid.clear();
        let head = sample_empty(&self.grid, &mut self.rng).unwrap_or_default();
        self.snake.respawn(head);
        self.grid.set(head, Cell::Head(self.snake.heading()));

        self.fruit = sample_empty(&self.grid, &mut self.rng).unwrap_or_default();
        self.grid.set(self.fruit, Cell::Fruit);
        tracing::info!(
            head_x = head.x,
            head_y = head.y,
            fruit_x = self.fruit.x,
            fruit_y = self.fruit.y,
            "round started"
        );
    }

    fn rebuild_grid(&mut self) {
        self.grid.clear();
        self.write_grid();
    }

    /// Fruit first, then head, then tail; later writes win on shared cells.
    fn write_grid(&mut self) {
        self.grid.set(self.fruit, Cell::Fruit);
        self.grid
            .set(self.snake.head(), Cell::Head(self.snake.heading()));
        for &segment in self.snake.tail() {
            self.grid.set(segment, Cell::Tail);
        }
    }
}

/// Rejection-sample a uniformly random cell that is empty in `grid`.
/// Returns `None` only when the grid has no empty cell at all.
pub fn sample_empty(grid: &Grid, rng: &mut impl Rng) -> Option<GridCoord> {
    if !grid.has_empty() {
        return None;
    }
    loop {
        let coord = GridCoord::new(rng.gen_range(0..GRID_SIZE), rng.gen_range(0..GRID_SIZE));
        if grid.get(coord) == Cell::Empty {
            return Some(coord);
        }
    }
}
