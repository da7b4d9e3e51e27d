//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Mouse
//! clicks are decoded in the event loop because they need the view's
//! cell-to-coordinate hit test.

pub mod map;

pub use map::{map_key, should_quit};
