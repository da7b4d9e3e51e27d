//! Key mapping from terminal events to game actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::{Direction, GameAction};

/// Map keyboard input to game actions.
///
/// Arrow semantics follow the tile, not the cursor: Up slides the tile below
/// the empty slot upward, and so on. Whether such a tile exists is the
/// session's concern; the mapping is unconditional.
pub fn map_key(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Tile slides (arrows or vim keys)
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => {
            Some(GameAction::Move(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(GameAction::Move(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(GameAction::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(GameAction::Move(Direction::Right))
        }

        // Session controls
        KeyCode::Char('n') | KeyCode::Char('N') => Some(GameAction::NewGame),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(GameAction::Shuffle),

        // Audio toggles
        KeyCode::Char('m') | KeyCode::Char('M') => Some(GameAction::ToggleMusic),
        KeyCode::Char('x') | KeyCode::Char('X') => Some(GameAction::ToggleSfx),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
