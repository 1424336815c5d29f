use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Turn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Turn(Turn),
    /// Accept the "play again?" prompt
    Confirm,
    /// Decline the "play again?" prompt
    Decline,
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Steering
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                KeyAction::Turn(Turn::Right)
            }
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => KeyAction::Turn(Turn::Left),

            // Restart prompt
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => KeyAction::Confirm,
            KeyCode::Char('n') | KeyCode::Char('N') => KeyAction::Decline,

            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
