//! Grid Snake - a fixed-tick snake game played in the terminal
//!
//! This library provides:
//! - Core game logic: snake model, food placement and the session state machine (game module)
//! - Board rendering onto a pixel surface, plus the terminal screen layout (render module)
//! - Key mapping and the session's input subscription (input module)
//! - Interactive terminal play (modes module)

pub mod game;
pub mod input;
pub mod logging;
pub mod modes;
pub mod render;
