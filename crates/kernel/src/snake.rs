use glam::IVec2;
use snake_common::{Direction, GridCoord};

use crate::grid::GRID_SIZE;

/// Player snake: head position, heading and an ordered tail.
///
/// The tail is a shift register ordered from the segment nearest the head to
/// the farthest one. A per-step latch allows one accepted turn between steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    head: GridCoord,
    direction: Direction,
    tail: Vec<GridCoord>,
    /// Set once a turn is accepted, released at the start of the next step.
    turned: bool,
    /// Head position before the most recent advance.
    vacated: GridCoord,
}

impl Snake {
    pub fn new(head: GridCoord, direction: Direction) -> Self {
        Self::with_tail(head, direction, Vec::new())
    }

    pub fn with_tail(head: GridCoord, direction: Direction, tail: Vec<GridCoord>) -> Self {
        Self {
            head,
            direction,
            tail,
            turned: false,
            vacated: head,
        }
    }

    pub fn head(&self) -> GridCoord {
        self.head
    }

    /// Current heading, also used to pick the head sprite.
    pub fn heading(&self) -> Direction {
        self.direction
    }

    pub fn velocity(&self) -> IVec2 {
        self.direction.velocity()
    }

    pub fn tail(&self) -> &[GridCoord] {
        &self.tail
    }

    /// Head plus tail segments.
    pub fn length(&self) -> usize {
        self.tail.len() + 1
    }

    pub fn has_turned(&self) -> bool {
        self.turned
    }

    /// Request a heading change. Rejected if a turn was already accepted since
    /// the last step, or if `direction` reverses the current velocity.
    pub fn turn(&mut self, direction: Direction) -> bool {
        if self.turned || direction == self.direction.opposite() {
            return false;
        }
        self.direction = direction;
        self.turned = true;
        true
    }

    pub(crate) fn release_latch(&mut self) {
        self.turned = false;
    }

    /// Move every segment into the slot ahead of it, back to front, and put
    /// the current head position into the first slot.
    pub(crate) fn shift_tail(&mut self) {
        if self.tail.is_empty() {
            return;
        }
        for i in (1..self.tail.len()).rev() {
            self.tail[i] = self.tail[i - 1];
        }
        self.tail[0] = self.head;
    }

    /// Step the head one cell along the velocity, wrapping at the grid edges.
    pub(crate) fn advance(&mut self) {
        self.vacated = self.head;
        self.head = self.head.offset(self.velocity()).wrapped(GRID_SIZE);
    }

    /// Append one segment. Its position is a placeholder that the next
    /// [`Snake::shift_tail`] overwrites; it reuses the current last segment
    /// (or the vacated head cell) so it can never coincide with the head.
    pub(crate) fn grow(&mut self) {
        let placeholder = self.tail.last().copied().unwrap_or(self.vacated);
        self.tail.push(placeholder);
    }

    pub fn bites_itself(&self) -> bool {
        self.tail.contains(&self.head)
    }

    /// Fresh start at `head` with no tail. The heading is kept.
    pub(crate) fn respawn(&mut self, head: GridCoord) {
        self.head = head;
        self.vacated = head;
        self.tail.clear();
    }
}
