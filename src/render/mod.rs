//! Drawing: the board renderer and the terminal screen layout

pub mod renderer;
pub mod screen;

pub use renderer::{Renderer, Surface, TerminalSurface};
pub use screen::{Overlay, Screen};
