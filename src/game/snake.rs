use std::collections::VecDeque;

use super::action::{Direction, Turn};
use super::geometry::Cell;

/// The snake: an ordered chain of cells from tail (front) to head (back)
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
    just_ate: bool,
}

impl Snake {
    /// A length-1 snake at `head`
    pub fn new(head: Cell, direction: Direction) -> Self {
        Self {
            body: VecDeque::from([head]),
            direction,
            just_ate: false,
        }
    }

    /// Build a snake from an explicit tail-to-head chain.
    /// Returns `None` for an empty chain.
    pub fn from_cells(
        cells: impl IntoIterator<Item = Cell>,
        direction: Direction,
    ) -> Option<Self> {
        let body: VecDeque<Cell> = cells.into_iter().collect();
        if body.is_empty() {
            return None;
        }

        Some(Self {
            body,
            direction,
            just_ate: false,
        })
    }

    /// Get the head position (most recently added cell)
    pub fn head(&self) -> Cell {
        // length >= 1 is upheld by every constructor and by advance()
        self.body[self.body.len() - 1]
    }

    /// Get the tail position (oldest cell)
    pub fn tail(&self) -> Cell {
        self.body[0]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Cells from tail to head
    pub fn cells(&self) -> impl ExactSizeIterator<Item = &Cell> + Clone + '_ {
        self.body.iter()
    }

    /// Where the head will be after the next `advance()`
    pub fn next_head(&self) -> Cell {
        self.head().moved_in_direction(self.direction)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Check if a cell collides with any segment other than the head
    pub fn collides_with_body(&self, cell: Cell) -> bool {
        self.body.iter().rev().skip(1).any(|segment| *segment == cell)
    }

    pub fn is_growing(&self) -> bool {
        self.just_ate
    }

    /// Push a new head one cell ahead. Drops the tail unless the snake has
    /// just eaten; returns the vacated tail cell if one was dropped.
    pub fn advance(&mut self) -> Option<Cell> {
        let new_head = self.next_head();
        self.body.push_back(new_head);

        if self.just_ate {
            self.just_ate = false;
            None
        } else {
            self.body.pop_front()
        }
    }

    /// Keep the tail on the next `advance()`
    pub fn grow(&mut self) {
        self.just_ate = true;
    }

    pub fn turn_right(&mut self) {
        self.direction = self.direction.rotated_right();
    }

    pub fn turn_left(&mut self) {
        self.direction = self.direction.rotated_left();
    }

    pub fn turn(&mut self, turn: Turn) {
        self.direction = turn.apply(self.direction);
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake keeps at least its head
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}
