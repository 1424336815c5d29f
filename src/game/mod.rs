//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The session is driven by whoever owns it: the terminal play mode or a test.

pub mod action;
pub mod config;
pub mod food;
pub mod geometry;
pub mod session;
pub mod snake;

// Re-export commonly used types
pub use action::{Direction, Turn};
pub use config::{ConfigError, GameConfig, Palette};
pub use food::FoodSpawner;
pub use geometry::{Cell, Grid};
pub use session::{EndReason, GameSession, GameState, RestartDecision, TickOutcome};
pub use snake::Snake;
