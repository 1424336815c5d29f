use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Color,
};

use crate::game::{Cell, Palette};

/// Terminal columns used to draw one grid cell, so cells look square
pub const COLUMNS_PER_CELL: u16 = 2;

const FILLED_SYMBOL: &str = "█";

/// A drawing surface addressed in pixels
pub trait Surface {
    /// Wipe the whole surface
    fn clear(&mut self);

    /// Fill an axis-aligned rectangle whose top-left corner is `(x, y)`
    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color);
}

/// Draws the snake and the food onto a [`Surface`]
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    palette: Palette,
}

impl Renderer {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// Clear the surface, then fill one `cell_size` square for the food and
    /// one per snake cell.
    pub fn draw<'a, S>(
        &self,
        surface: &mut S,
        snake_cells: impl IntoIterator<Item = &'a Cell>,
        food: Cell,
        cell_size: u32,
    ) where
        S: Surface + ?Sized,
    {
        surface.clear();

        let (x, y) = food.to_pixels(cell_size);
        surface.fill_rect(x, y, cell_size, cell_size, self.palette.food);

        for cell in snake_cells {
            let (x, y) = cell.to_pixels(cell_size);
            surface.fill_rect(x, y, cell_size, cell_size, self.palette.snake);
        }
    }
}

/// A [`Surface`] backed by a region of a ratatui buffer.
///
/// Pixel rectangles are snapped to grid cells; each grid cell occupies
/// [`COLUMNS_PER_CELL`] terminal columns and one row. Anything outside the
/// region is clipped.
pub struct TerminalSurface<'a> {
    buf: &'a mut Buffer,
    area: Rect,
    cell_size: u32,
}

impl<'a> TerminalSurface<'a> {
    pub fn new(buf: &'a mut Buffer, area: Rect, cell_size: u32) -> Self {
        Self {
            buf,
            area,
            cell_size: cell_size.max(1),
        }
    }

    fn paint_cell(&mut self, column: i32, row: i32, color: Color) {
        let columns = i32::from(self.area.width / COLUMNS_PER_CELL);
        let rows = i32::from(self.area.height);
        if column < 0 || row < 0 || column >= columns || row >= rows {
            return;
        }

        let x = self.area.x + column as u16 * COLUMNS_PER_CELL;
        let y = self.area.y + row as u16;
        for dx in 0..COLUMNS_PER_CELL {
            if let Some(cell) = self.buf.cell_mut(Position::new(x + dx, y)) {
                cell.set_symbol(FILLED_SYMBOL).set_fg(color);
            }
        }
    }
}

impl Surface for TerminalSurface<'_> {
    fn clear(&mut self) {
        for y in self.area.top()..self.area.bottom() {
            for x in self.area.left()..self.area.right() {
                if let Some(cell) = self.buf.cell_mut(Position::new(x, y)) {
                    cell.reset();
                }
            }
        }
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color) {
        if width == 0 || height == 0 {
            return;
        }

        let first = Cell::from_pixels(x, y, self.cell_size);
        let last = Cell::from_pixels(
            far_edge(x, width),
            far_edge(y, height),
            self.cell_size,
        );

        for row in first.y..=last.y {
            for column in first.x..=last.x {
                self.paint_cell(column, row, color);
            }
        }
    }
}

/// Last pixel covered by a span of `length` starting at `start`
fn far_edge(start: i32, length: u32) -> i32 {
    let length = i32::try_from(length).unwrap_or(i32::MAX);
    start.saturating_add(length - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSurface {
        clears: usize,
        rects: Vec<(i32, i32, u32, u32, Color)>,
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self) {
            self.clears += 1;
            self.rects.clear();
        }

        fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color) {
            self.rects.push((x, y, width, height, color));
        }
    }

    fn palette() -> Palette {
        Palette {
            snake: Color::Green,
            food: Color::Red,
        }
    }

    #[test]
    fn test_draw_contract() {
        let renderer = Renderer::new(palette());
        let mut surface = RecordingSurface::default();
        let snake = [Cell::new(0, 0), Cell::new(1, 0)];

        renderer.draw(&mut surface, &snake, Cell::new(4, 2), 10);

        assert_eq!(surface.clears, 1);
        assert_eq!(
            surface.rects,
            vec![
                (40, 20, 10, 10, Color::Red),
                (0, 0, 10, 10, Color::Green),
                (10, 0, 10, 10, Color::Green),
            ]
        );
    }

    #[test]
    fn test_redraw_clears_previous_frame() {
        let renderer = Renderer::new(palette());
        let mut surface = RecordingSurface::default();

        renderer.draw(&mut surface, &[Cell::new(0, 0)], Cell::new(1, 1), 10);
        renderer.draw(&mut surface, &[Cell::new(1, 0)], Cell::new(1, 1), 10);

        assert_eq!(surface.clears, 2);
        assert_eq!(surface.rects.len(), 2);
    }

    #[test]
    fn test_terminal_surface_maps_cells() {
        let area = Rect::new(0, 0, 10, 4);
        let mut buf = Buffer::empty(area);
        {
            let mut surface = TerminalSurface::new(&mut buf, area, 10);
            Renderer::new(palette()).draw(&mut surface, &[Cell::new(1, 2)], Cell::new(4, 0), 10);
        }

        let snake_left = buf.cell(Position::new(2, 2)).unwrap();
        let snake_right = buf.cell(Position::new(3, 2)).unwrap();
        assert_eq!(snake_left.symbol(), FILLED_SYMBOL);
        assert_eq!(snake_right.fg, Color::Green);

        let food = buf.cell(Position::new(8, 0)).unwrap();
        assert_eq!(food.fg, Color::Red);

        assert_eq!(buf.cell(Position::new(0, 0)).unwrap().symbol(), " ");
    }

    #[test]
    fn test_terminal_surface_clips() {
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        let mut surface = TerminalSurface::new(&mut buf, area, 10);

        surface.fill_rect(-10, 0, 10, 10, Color::Red);
        surface.fill_rect(500, 0, 10, 10, Color::Red);
        surface.fill_rect(0, 0, 20, 10, Color::Blue);

        assert_eq!(buf.cell(Position::new(0, 0)).unwrap().fg, Color::Blue);
        assert_eq!(buf.cell(Position::new(3, 0)).unwrap().fg, Color::Blue);
        assert_eq!(buf.cell(Position::new(0, 1)).unwrap().symbol(), " ");
    }

    #[test]
    fn test_terminal_surface_huge_rect_saturates() {
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        let mut surface = TerminalSurface::new(&mut buf, area, 1_000_000_000);

        surface.fill_rect(i32::MAX - 5, 0, u32::MAX, 10, Color::Red);
        surface.fill_rect(0, 0, 1_000_000_000, 1_000_000_000, Color::Blue);

        assert_eq!(buf.cell(Position::new(0, 0)).unwrap().fg, Color::Blue);
        assert_eq!(buf.cell(Position::new(2, 0)).unwrap().symbol(), " ");
    }
}
