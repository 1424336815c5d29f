/// Direction the snake can move
///
/// Variants are listed in clockwise order, which is the order
/// [`Direction::rotated_right`] walks through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    const CLOCKWISE: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Right => 1,
            Direction::Down => 2,
            Direction::Left => 3,
        }
    }

    /// The next direction clockwise (Up -> Right -> Down -> Left -> Up)
    pub fn rotated_right(self) -> Self {
        Self::CLOCKWISE[(self.index() + 1) % Self::CLOCKWISE.len()]
    }

    /// The next direction counter-clockwise
    pub fn rotated_left(self) -> Self {
        let len = Self::CLOCKWISE.len();
        Self::CLOCKWISE[(self.index() + len - 1) % len]
    }

    /// Returns the delta (dx, dy) for moving in this direction.
    /// Screen coordinates: y grows downward.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// A relative steering input delivered by the input source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Right,
    Left,
}

impl Turn {
    pub fn apply(self, direction: Direction) -> Direction {
        match self {
            Turn::Right => direction.rotated_right(),
            Turn::Left => direction.rotated_left(),
        }
    }
}
