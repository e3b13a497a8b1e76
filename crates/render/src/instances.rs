use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use snake_common::{Direction, GridCoord};
use snake_kernel::{Cell, GRID_SIZE, Grid};

/// Texture index that selects a flat white fill instead of an atlas cell.
pub const BLANK_TEXTURE: i32 = -1;

/// Atlas cell holding the fruit sprite.
pub const FRUIT_TEXTURE: i32 = 0;

/// Atlas cell holding the tail sprite.
pub const TAIL_TEXTURE: i32 = 1;

/// One quad for the instanced draw. Layout matches the GPU instance buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Instance {
    pub position: [f32; 2],
    pub scale: [f32; 2],
    pub texture_index: i32,
}

impl Instance {
    pub fn new(position: Vec2, scale: Vec2, texture_index: i32) -> Self {
        Self {
            position: position.to_array(),
            scale: scale.to_array(),
            texture_index,
        }
    }
}

/// Atlas index of a head sprite, 2..=5.
pub fn head_texture(direction: Direction) -> i32 {
    match direction {
        Direction::Right => 2,
        Direction::Up => 3,
        Direction::Left => 4,
        Direction::Down => 5,
    }
}

/// Atlas index for a cell, or [`BLANK_TEXTURE`] for an empty cell.
pub fn texture_index(cell: Cell) -> i32 {
    match cell {
        Cell::Empty => BLANK_TEXTURE,
        Cell::Fruit => FRUIT_TEXTURE,
        Cell::Tail => TAIL_TEXTURE,
        Cell::Head(direction) => head_texture(direction),
    }
}

/// Cell center in world space, with the grid centered on the origin.
pub fn grid_to_world(coord: GridCoord) -> Vec2 {
    let half = GRID_SIZE as f32 / 2.0;
    Vec2::new(coord.x as f32 - half + 0.5, coord.y as f32 - half + 0.5)
}

/// Refill `out` with one instance per cell, in [`Grid::iter`] order.
///
/// A fruit cell emits two instances: a blank background fill followed by the
/// fruit sprite drawn over it. The buffer is cleared first, keeping only its
/// capacity from the previous frame.
pub fn build_instances(grid: &Grid, out: &mut Vec<Instance>) {
    out.clear();
    for (coord, cell) in grid.iter() {
        let position = grid_to_world(coord);
        if cell == Cell::Fruit {
            out.push(Instance::new(
                position,
                Vec2::ONE,
                texture_index(Cell::Empty),
            ));
        }
        out.push(Instance::new(position, Vec2::ONE, texture_index(cell)));
    }
}

/// Reusable per-frame instance list.
#[derive(Debug, Default)]
pub struct InstanceBuffer {
    instances: Vec<Instance>,
}

impl InstanceBuffer {
    pub fn new() -> Self {
        Self {
            // Every cell plus the extra fruit background.
            instances: Vec::with_capacity(snake_kernel::CELL_COUNT + 1),
        }
    }

    /// Regenerate from `grid` and return the fresh list.
    pub fn rebuild(&mut self, grid: &Grid) -> &[Instance] {
        build_instances(grid, &mut self.instances);
        &self.instances
    }

    pub fn as_slice(&self) -> &[Instance] {
        &self.instances
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_kernel::CELL_COUNT;

    #[test]
    fn instance_layout_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Instance>(), 20);
        let inst = Instance::new(Vec2::new(1.0, 2.0), Vec2::ONE, 3);
        let bytes: &[u8] = bytemuck::bytes_of(&inst);
        assert_eq!(&bytes[16..20], &3i32.to_ne_bytes());
    }

    #[test]
    fn texture_mapping_matches_atlas() {
        assert_eq!(texture_index(Cell::Empty), BLANK_TEXTURE);
        assert_eq!(texture_index(Cell::Fruit), 0);
        assert_eq!(texture_index(Cell::Tail), 1);
        let heads: Vec<i32> = Direction::ALL
            .iter()
            .map(|d| texture_index(Cell::Head(*d)))
            .collect();
        assert_eq!(heads, vec![2, 3, 4, 5]);
    }

    #[test]
    fn grid_is_centered_on_origin() {
        assert_eq!(grid_to_world(GridCoord::new(0, 0)), Vec2::new(-4.5, -4.5));
        assert_eq!(grid_to_world(GridCoord::new(9, 9)), Vec2::new(4.5, 4.5));
        assert_eq!(grid_to_world(GridCoord::new(5, 4)), Vec2::new(0.5, -0.5));
    }

    #[test]
    fn empty_grid_emits_one_blank_instance_per_cell() {
        let mut out = Vec::new();
        build_instances(&Grid::new(), &mut out);
        assert_eq!(out.len(), CELL_COUNT);
        assert!(out.iter().all(|i| i.texture_index == BLANK_TEXTURE));
        assert!(out.iter().all(|i| i.scale == [1.0, 1.0]));
    }

    #[test]
    fn fruit_cell_emits_background_then_fruit() {
        let mut grid = Grid::new();
        let fruit = GridCoord::new(0, 2);
        grid.set(fruit, Cell::Fruit);

        let mut out = Vec::new();
        build_instances(&grid, &mut out);
        assert_eq!(out.len(), CELL_COUNT + 1);

        // x outer, y inner: (0,2) is the third cell visited.
        let world = grid_to_world(fruit).to_array();
        assert_eq!(out[2].position, world);
        assert_eq!(out[2].texture_index, BLANK_TEXTURE);
        assert_eq!(out[3].position, world);
        assert_eq!(out[3].texture_index, FRUIT_TEXTURE);
    }

    #[test]
    fn order_is_x_outer_y_inner() {
        let mut out = Vec::new();
        build_instances(&Grid::new(), &mut out);
        assert_eq!(out[0].position, [-4.5, -4.5]);
        assert_eq!(out[1].position, [-4.5, -3.5]);
        assert_eq!(out[10].position, [-3.5, -4.5]);
    }

    #[test]
    fn snake_cells_carry_sprite_indices() {
        let mut grid = Grid::new();
        grid.set(GridCoord::new(1, 0), Cell::Head(Direction::Up));
        grid.set(GridCoord::new(1, 1), Cell::Tail);

        let mut buffer = InstanceBuffer::new();
        let out = buffer.rebuild(&grid);
        assert_eq!(out[10].texture_index, 3);
        assert_eq!(out[11].texture_index, TAIL_TEXTURE);
    }

    #[test]
    fn rebuild_discards_previous_frame() {
        let mut grid = Grid::new();
        grid.set(GridCoord::new(4, 4), Cell::Fruit);
        let mut buffer = InstanceBuffer::new();
        assert_eq!(buffer.rebuild(&grid).len(), CELL_COUNT + 1);

        grid.clear();
        assert_eq!(buffer.rebuild(&grid).len(), CELL_COUNT);
        assert!(
            buffer
                .as_slice()
                .iter()
                .all(|i| i.texture_index == BLANK_TEXTURE)
        );
    }
}
