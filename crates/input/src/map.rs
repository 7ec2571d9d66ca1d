//! Key mapping from terminal events to engine commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gridfall_types::Command;

/// Map keyboard input to engine commands.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Command::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Command::MoveRight),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::SoftDrop),

        // Rotation
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::RotateCcw),
        KeyCode::Char('e') | KeyCode::Char('E') | KeyCode::Up => Some(Command::RotateCw),

        // Clock control
        KeyCode::Enter => Some(Command::Start),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Command::Pause),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
