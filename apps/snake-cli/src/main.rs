use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use snake_common::Direction;
use snake_kernel::{Game, GameConfig, GameEvent};
use snake_render::{DebugTextRenderer, InstanceBuffer, Renderer};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "snake-cli", about = "Headless snake tool")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Run a seeded game without a window and print the final board
    Simulate {
        /// Number of steps to run
        #[arg(short, long, default_value = "100")]
        ticks: u64,
        /// RNG seed for fruit placement and turns
        #[arg(short, long, default_value = "42")]
        seed: u64,
        /// Attempt a random turn every N steps (0 disables turning)
        #[arg(long, default_value = "3")]
        turn_every: u64,
    },
}

struct SimulationReport {
    board: String,
    instances: usize,
    fruit_eaten: usize,
    collisions: usize,
}

fn simulate(ticks: u64, seed: u64, turn_every: u64) -> SimulationReport {
    let config = GameConfig::default();
    let mut game = Game::with_seed(&config, seed);
    let mut turns = StdRng::seed_from_u64(seed.wrapping_add(1));
    let mut instances = InstanceBuffer::new();
    let mut fruit_eaten = 0;
    let mut collisions = 0;

    // Drive the fixed-step loop with frames just over one interval long.
    let dt = config.step_interval * 1.01;
    for tick in 0..ticks {
        if turn_every > 0 && tick % turn_every == 0 {
            let direction = Direction::ALL[turns.gen_range(0..Direction::ALL.len())];
            game.turn(direction);
        }
        game.update(dt);
        for event in game.drain_events() {
            match event {
                GameEvent::FruitEaten { .. } => fruit_eaten += 1,
                GameEvent::Collided { .. } => collisions += 1,
                GameEvent::Stepped { .. } => {}
            }
        }
    }

    SimulationReport {
        board: DebugTextRenderer::new().render(&game),
        instances: instances.rebuild(game.grid()).len(),
        fruit_eaten,
        collisions,
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("snake-cli v{}", env!("CARGO_PKG_VERSION"));
            println!(
                "kernel: grid={}x{} step_interval={}s",
                snake_kernel::GRID_SIZE,
                snake_kernel::GRID_SIZE,
                snake_kernel::DEFAULT_STEP_INTERVAL
            );
            println!("render: {}", snake_render::crate_info());
        }
        Commands::Simulate {
            ticks,
            seed,
            turn_every,
        } => {
            println!("Simulation: seed={seed}, ticks={ticks}, turn_every={turn_every}");
            let report = simulate(ticks, seed, turn_every);
            print!("{}", report.board);
            println!(
                "Events: fruit={} collisions={}  Instances: {}",
                report.fruit_eaten, report.collisions, report.instances
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulation_is_deterministic() {
        let a = simulate(200, 9, 2);
        let b = simulate(200, 9, 2);
        assert_eq!(a.board, b.board);
        assert_eq!(a.fruit_eaten, b.fruit_eaten);
        assert_eq!(a.collisions, b.collisions);
    }

    #[test]
    fn each_frame_runs_one_step() {
        let report = simulate(25, 1, 0);
        assert!(report.board.starts_with("=== Game: tick=25 "));
    }

    #[test]
    fn instance_count_covers_board() {
        // Every cell once, plus the fruit's background while a fruit is shown.
        let report = simulate(10, 4, 0);
        let cells = snake_kernel::CELL_COUNT;
        assert!((cells..=cells + 1).contains(&report.instances));
    }
}
