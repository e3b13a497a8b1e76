use serde::{Deserialize, Serialize};
use snake_common::{Direction, GridCoord};

/// Side length of the square playfield.
pub const GRID_SIZE: i32 = 10;

/// Total number of cells on the playfield.
pub const CELL_COUNT: usize = (GRID_SIZE * GRID_SIZE) as usize;

/// Classification of a single playfield cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Fruit,
    Tail,
    Head(Direction),
}

impl Cell {
    pub fn is_head(self) -> bool {
        matches!(self, Cell::Head(_))
    }
}

/// Broken grid invariant found by [`Grid::check_invariants`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridViolation {
    #[error("expected exactly one head cell, found {0}")]
    HeadCount(usize),
    #[error("expected at most one fruit cell, found {0}")]
    FruitCount(usize),
}

/// Fixed-size, row-major playfield.
///
/// The grid is rebuilt from the snake and fruit every step, never patched,
/// so it only has to be correct immediately after a rebuild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Cell; CELL_COUNT],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Reset every cell to [`Cell::Empty`].
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// The only place a coordinate becomes an offset. Coordinates must already
    /// be wrapped into range; anything else is a caller bug.
    fn index(coord: GridCoord) -> usize {
        assert!(
            coord.in_bounds(GRID_SIZE),
            "grid coordinate {coord:?} outside 0..{GRID_SIZE}"
        );
        (coord.y * GRID_SIZE + coord.x) as usize
    }

    pub fn get(&self, coord: GridCoord) -> Cell {
        self.cells[Self::index(coord)]
    }

    pub fn set(&mut self, coord: GridCoord, cell: Cell) {
        self.cells[Self::index(coord)] = cell;
    }

    /// Visit every cell, `x` outer and `y` inner. Instance generation relies on
    /// this order being stable.
    pub fn iter(&self) -> impl Iterator<Item = (GridCoord, Cell)> + '_ {
        (0..GRID_SIZE).flat_map(move |x| {
            (0..GRID_SIZE).map(move |y| {
                let coord = GridCoord::new(x, y);
                (coord, self.get(coord))
            })
        })
    }

    pub fn count(&self, pred: impl Fn(Cell) -> bool) -> usize {
        self.cells.iter().filter(|c| pred(**c)).count()
    }

    pub fn has_empty(&self) -> bool {
        self.cells.contains(&Cell::Empty)
    }

    /// Verify there is one head and at most one fruit.
    pub fn check_invariants(&self) -> Result<(), GridViolation> {
        let heads = self.count(Cell::is_head);
        if heads != 1 {
            return Err(GridViolation::HeadCount(heads));
        }
        let fruits = self.count(|c| c == Cell::Fruit);
        if fruits > 1 {
            return Err(GridViolation::FruitCount(fruits));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_empty() {
        let grid = Grid::new();
        assert_eq!(grid.count(|c| c == Cell::Empty), CELL_COUNT);
        assert!(grid.has_empty());
    }

    #[test]
    fn set_and_get_roundtrip_single_cell() {
        let mut grid = Grid::new();
        let at = GridCoord::new(3, 7);
        grid.set(at, Cell::Head(Direction::Left));
        assert_eq!(grid.get(at), Cell::Head(Direction::Left));
        // Transposed coordinate is a different cell.
        assert_eq!(grid.get(GridCoord::new(7, 3)), Cell::Empty);
    }

    #[test]
    fn clear_resets_all_cells() {
        let mut grid = Grid::new();
        grid.set(GridCoord::new(0, 0), Cell::Fruit);
        grid.set(GridCoord::new(9, 9), Cell::Tail);
        grid.clear();
        assert_eq!(grid, Grid::new());
    }

    #[test]
    fn later_writes_overwrite_earlier_ones() {
        let mut grid = Grid::new();
        let at = GridCoord::new(4, 4);
        grid.set(at, Cell::Head(Direction::Up));
        grid.set(at, Cell::Tail);
        assert_eq!(grid.get(at), Cell::Tail);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn out_of_range_coordinate_panics() {
        let grid = Grid::new();
        grid.get(GridCoord::new(GRID_SIZE, 0));
    }

    #[test]
    fn iter_is_column_major_over_x() {
        let grid = Grid::new();
        let coords: Vec<GridCoord> = grid.iter().map(|(c, _)| c).collect();
        assert_eq!(coords.len(), CELL_COUNT);
        assert_eq!(coords[0], GridCoord::new(0, 0));
        assert_eq!(coords[1], GridCoord::new(0, 1));
        assert_eq!(coords[GRID_SIZE as usize], GridCoord::new(1, 0));
        assert_eq!(coords[CELL_COUNT - 1], GridCoord::new(9, 9));
    }

    #[test]
    fn invariants_detect_missing_and_duplicate_heads() {
        let mut grid = Grid::new();
        assert_eq!(grid.check_invariants(), Err(GridViolation::HeadCount(0)));

        grid.set(GridCoord::new(1, 1), Cell::Head(Direction::Up));
        assert!(grid.check_invariants().is_ok());

        grid.set(GridCoord::new(2, 2), Cell::Head(Direction::Down));
        assert_eq!(grid.check_invariants(), Err(GridViolation::HeadCount(2)));
    }

    #[test]
    fn invariants_detect_duplicate_fruit() {
        let mut grid = Grid::new();
        grid.set(GridCoord::new(1, 1), Cell::Head(Direction::Up));
        grid.set(GridCoord::new(2, 2), Cell::Fruit);
        grid.set(GridCoord::new(3, 3), Cell::Fruit);
        assert_eq!(grid.check_invariants(), Err(GridViolation::FruitCount(2)));
    }

    #[test]
    fn full_grid_has_no_empty_cell() {
        let mut grid = Grid::new();
        for (coord, _) in Grid::new().iter() {
            grid.set(coord, Cell::Tail);
        }
        assert!(!grid.has_empty());
    }
}
