//! Keyboard input: key mapping and the session's input subscription

pub mod handler;
pub mod listener;

pub use handler::{InputHandler, KeyAction};
pub use listener::InputListener;
