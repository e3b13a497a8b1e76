use snake_common::{Direction, GridCoord};
use snake_kernel::{Cell, GRID_SIZE, Game};

use crate::instances::Instance;

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads game state and produces output. It never mutates the
/// game; the kernel owns the truth.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the given game state.
    fn render(&self, game: &Game) -> Self::Output;
}

/// Destination for generated instances: one upload, then one instanced draw.
///
/// Backends consume instances in the order given and know nothing of grids.
pub trait InstanceSink {
    /// Replace the backend's instance buffer contents with `instances`.
    fn upload_instances(&mut self, instances: &[Instance]);

    /// Draw `count` instances of the sprite quad.
    fn draw_instanced(&mut self, count: u32);
}

/// Upload the full instance list and issue a single draw for all of it.
pub fn submit<S: InstanceSink + ?Sized>(sink: &mut S, instances: &[Instance]) {
    sink.upload_instances(instances);
    sink.draw_instanced(instances.len() as u32);
}

/// Text renderer for terminals, logs and tests.
///
/// Draws the board with `y` increasing upward, so the top text line is the
/// highest row.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn glyph(cell: Cell) -> char {
        match cell {
            Cell::Empty => '.',
            Cell::Fruit => '*',
            Cell::Tail => 'o',
            Cell::Head(Direction::Up) => '^',
            Cell::Head(Direction::Down) => 'v',
            Cell::Head(Direction::Left) => '<',
            Cell::Head(Direction::Right) => '>',
        }
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, game: &Game) -> String {
        let mut out = String::new();
        out.push_str(&format!("=== {} ===\n", game.summary()));
        for y in (0..GRID_SIZE).rev() {
            for x in 0..GRID_SIZE {
                out.push(Self::glyph(game.grid().get(GridCoord::new(x, y))));
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_kernel::{GameConfig, Snake};

    #[derive(Default)]
    struct RecordingSink {
        uploaded: Vec<Instance>,
        draws: Vec<u32>,
    }

    impl InstanceSink for RecordingSink {
        fn upload_instances(&mut self, instances: &[Instance]) {
            self.uploaded = instances.to_vec();
        }

        fn draw_instanced(&mut self, count: u32) {
            self.draws.push(count);
        }
    }

    fn game() -> Game {
        Game::from_parts(
            &GameConfig::default(),
            Snake::with_tail(
                GridCoord::new(5, 5),
                Direction::Right,
                vec![GridCoord::new(4, 5)],
            ),
            GridCoord::new(0, 9),
            1,
        )
    }

    #[test]
    fn submit_uploads_then_draws_everything_once() {
        let mut sink = RecordingSink::default();
        let instances = vec![
            Instance::new(glam::Vec2::ZERO, glam::Vec2::ONE, 0),
            Instance::new(glam::Vec2::ONE, glam::Vec2::ONE, 1),
        ];
        submit(&mut sink, &instances);
        assert_eq!(sink.uploaded, instances);
        assert_eq!(sink.draws, vec![2]);
    }

    #[test]
    fn submit_through_trait_object() {
        let mut sink = RecordingSink::default();
        let dyn_sink: &mut dyn InstanceSink = &mut sink;
        submit(dyn_sink, &[]);
        assert_eq!(sink.draws, vec![0]);
    }

    #[test]
    fn debug_renderer_draws_board() {
        let output = DebugTextRenderer::new().render(&game());
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].contains("tick=0"));
        assert_eq!(lines.len(), 1 + GRID_SIZE as usize);
        // y=9 is the first board line; fruit sits at (0,9).
        assert_eq!(lines[1], "*.........");
        // y=5 is the fifth board line.
        assert_eq!(lines[5], "....o>....");
    }

    #[test]
    fn glyphs_are_distinct() {
        let mut glyphs: Vec<char> = [
            Cell::Empty,
            Cell::Fruit,
            Cell::Tail,
            Cell::Head(Direction::Up),
            Cell::Head(Direction::Down),
            Cell::Head(Direction::Left),
            Cell::Head(Direction::Right),
        ]
        .into_iter()
        .map(DebugTextRenderer::glyph)
        .collect();
        glyphs.sort_unstable();
        glyphs.dedup();
        assert_eq!(glyphs.len(), 7);
    }
}
