use super::action::Direction;

/// A cell on the game grid, in grid units (not pixels)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const ORIGIN: Cell = Cell { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move cell by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move cell one step in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }

    /// Top-left corner of this cell in pixels
    pub fn to_pixels(&self, cell_size: u32) -> (i32, i32) {
        let size = cell_size as i32;
        (self.x * size, self.y * size)
    }

    /// Cell containing the given pixel coordinate. Only exact multiples of
    /// `cell_size` are meaningful for snake and food positions.
    pub fn from_pixels(x: i32, y: i32, cell_size: u32) -> Self {
        let size = cell_size as i32;
        Self {
            x: x.div_euclid(size),
            y: y.div_euclid(size),
        }
    }
}

/// The discrete coordinate space `[0, width) x [0, height)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub width: u32,
    pub height: u32,
    pub cell_size: u32,
}

impl Grid {
    pub fn new(width: u32, height: u32, cell_size: u32) -> Self {
        Self {
            width,
            height,
            cell_size,
        }
    }

    pub fn contains_x(&self, x: i32) -> bool {
        x >= 0 && x < self.width as i32
    }

    pub fn contains_y(&self, y: i32) -> bool {
        y >= 0 && y < self.height as i32
    }

    /// Check if a cell is within the grid bounds
    pub fn contains(&self, cell: Cell) -> bool {
        self.contains_x(cell.x) && self.contains_y(cell.y)
    }

    /// Drawing surface size in pixels
    pub fn pixel_extent(&self) -> (u32, u32) {
        (self.width * self.cell_size, self.height * self.cell_size)
    }
}
