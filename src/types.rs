//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board size limits. The session starts at 4x4 and grows with difficulty.
pub const MIN_BOARD_SIZE: u8 = 2;
pub const MAX_BOARD_SIZE: u8 = 6;
pub const START_BOARD_SIZE: u8 = 4;

/// Maximum number of cells on any board (6x6).
pub const MAX_CELLS: usize = (MAX_BOARD_SIZE as usize) * (MAX_BOARD_SIZE as usize);

/// Difficulty ramp: the board grows after every N-th solved puzzle.
pub const GROW_EVERY_LEVELS: u32 = 3;

/// Event loop timing (in milliseconds)
pub const TICK_MS: u32 = 50;

/// Pause between solving a puzzle and dealing the next board.
pub const WIN_PAUSE_MS: u32 = 1500;

/// How long a toast notification stays on screen.
pub const TOAST_TTL_MS: u32 = 3000;

/// Retry budget for the shuffle engine. Roughly half of all random
/// permutations are solvable, so hitting this bound means something is
/// seriously wrong with the RNG or the board.
pub const SHUFFLE_MAX_ATTEMPTS: u32 = 400;

/// Cell on the board (None = empty slot, Some = numbered tile)
pub type Cell = Option<u8>;

/// A board coordinate. (0, 0) is the top-left corner; x grows rightward,
/// y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: u8,
    pub y: u8,
}

impl Pos {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }
}

/// Direction a tile slides when the player presses an arrow key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide the tile at the given board coordinate into the empty slot
    /// (pointer input).
    MoveAt(Pos),
    /// Slide a tile in the given direction (keyboard input). Pressing Up
    /// slides the tile *below* the empty slot upward, and so on.
    Move(Direction),
    NewGame,
    Shuffle,
    ToggleMusic,
    ToggleSfx,
}

/// Observable session effects, drained by the event loop and forwarded to the
/// renderer, toast notifier, sound output, and high-score store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A tile slid into the empty slot.
    Moved,
    /// The board was re-randomized (new game or explicit shuffle).
    Shuffled,
    /// A fresh board was dealt at the given size.
    NewGame { size: u8 },
    /// The puzzle was solved in this many moves.
    Win { moves: u32 },
    /// The level counter advanced.
    LevelUp { level: u32 },
    /// The difficulty ramp grew the board; applies to the next deal.
    SizeIncreased { size: u8 },
    /// A new best (lowest) move count; worth persisting.
    NewBest { moves: u32 },
    MusicToggled(bool),
    SfxToggled(bool),
    /// The shuffle engine exhausted its retry budget. Non-fatal: the session
    /// stays loaded and the player can request a new game.
    ShuffleFailed(String),
}
