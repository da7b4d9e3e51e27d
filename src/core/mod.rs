//! Core module - pure game logic with no I/O
//!
//! This module contains the board, the shuffle engine, and the session
//! state machine. It has zero dependencies on terminal, audio, or storage,
//! and is fully deterministic for a given seed.

pub mod board;
pub mod game_state;
pub mod rng;
pub mod shuffle;

// Re-export commonly used types
pub use board::Board;
pub use game_state::{GameState, Phase};
pub use rng::SimpleRng;
pub use shuffle::is_solvable;
