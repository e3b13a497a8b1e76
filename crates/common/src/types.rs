use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Integer cell coordinate on the playfield. `x` grows to the right, `y` grows upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct GridCoord {
    pub x: i32,
    pub y: i32,
}

impl GridCoord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by a velocity without wrapping.
    pub fn offset(self, velocity: IVec2) -> Self {
        Self {
            x: self.x + velocity.x,
            y: self.y + velocity.y,
        }
    }

    /// Wrap each axis into `[0, size)`. A component below zero lands on
    /// `size - 1`, a component at or past `size` lands on `0`.
    pub fn wrapped(self, size: i32) -> Self {
        Self {
            x: self.x.rem_euclid(size),
            y: self.y.rem_euclid(size),
        }
    }

    pub fn in_bounds(self, size: i32) -> bool {
        (0..size).contains(&self.x) && (0..size).contains(&self.y)
    }
}

impl From<IVec2> for GridCoord {
    fn from(v: IVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<GridCoord> for IVec2 {
    fn from(c: GridCoord) -> Self {
        IVec2::new(c.x, c.y)
    }
}

/// One of the four unit headings a snake can travel in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Up,
        Direction::Left,
        Direction::Down,
    ];

    /// Unit velocity for this heading.
    pub fn velocity(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, 1),
            Direction::Down => IVec2::new(0, -1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_past_upper_bound_goes_to_zero() {
        let c = GridCoord::new(10, 4).wrapped(10);
        assert_eq!(c, GridCoord::new(0, 4));
    }

    #[test]
    fn wrap_below_zero_goes_to_last_cell() {
        let c = GridCoord::new(3, -1).wrapped(10);
        assert_eq!(c, GridCoord::new(3, 9));
    }

    #[test]
    fn wrap_leaves_inner_coords_alone() {
        let c = GridCoord::new(7, 2);
        assert_eq!(c.wrapped(10), c);
    }

    #[test]
    fn in_bounds_checks_both_axes() {
        assert!(GridCoord::new(0, 9).in_bounds(10));
        assert!(!GridCoord::new(10, 0).in_bounds(10));
        assert!(!GridCoord::new(0, -1).in_bounds(10));
    }

    #[test]
    fn opposite_is_involution() {
        for d in Direction::ALL {
            assert_ne!(d.opposite(), d);
            assert_eq!(d.opposite().opposite(), d);
            assert_eq!(d.velocity() + d.opposite().velocity(), IVec2::ZERO);
        }
    }

    #[test]
    fn offset_by_velocity() {
        let c = GridCoord::new(5, 5).offset(Direction::Up.velocity());
        assert_eq!(c, GridCoord::new(5, 6));
    }
}
