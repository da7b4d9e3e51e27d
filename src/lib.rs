//! Terminal sliding-tile puzzle (15-puzzle generalized to NxN).
//!
//! The player rearranges numbered tiles around one empty slot - by mouse
//! click or arrow keys - into ascending order. The game counts moves,
//! persists the best (lowest) move count, and grows the board every third
//! solved puzzle as a difficulty ramp.
//!
//! Layering:
//!
//! - [`core`]: board, shuffle engine, and session state machine. Pure and
//!   deterministic; everything with an invariant lives here.
//! - [`input`]: crossterm key events mapped to game actions.
//! - [`term`]: framebuffer, game view (state to framebuffer, plus the
//!   click-to-cell hit test), terminal renderer, toast notifications.
//! - [`store`]: the persisted high score.
//!
//! # Example
//!
//! ```
//! use tui_fifteen::core::GameState;
//! use tui_fifteen::types::{Direction, GameAction};
//!
//! // Deterministic session: seed 12345, no prior high score.
//! let mut game = GameState::new(12345, 0);
//!
//! // Slide the tile above the empty slot down, if there is one.
//! game.apply_action(GameAction::Move(Direction::Down));
//! assert!(game.moves() <= 1);
//! ```

pub mod core;
pub mod input;
pub mod store;
pub mod term;
pub mod types;
