//! Game state module - manages the complete play session
//!
//! Ties together the board, the shuffle engine, and the session counters:
//! moves, level, board size, and high score. Handles the win sequence and
//! the timed transition into the next, possibly larger, board.

use log::{error, info};

use crate::core::{shuffle, Board, SimpleRng};
use crate::types::{
    Direction, GameAction, GameEvent, Pos, GROW_EVERY_LEVELS, MAX_BOARD_SIZE, START_BOARD_SIZE,
    WIN_PAUSE_MS,
};

/// Session phase. During `Solved` the board is inert: tile moves and
/// shuffles are ignored until the pause elapses and the next board is dealt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Solved { remaining_ms: u32 },
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    rng: SimpleRng,
    phase: Phase,
    /// Moves on the current board; resets on every deal.
    moves: u32,
    /// Starts at 1 and increments on every win.
    level: u32,
    /// Current board dimension; grows with the difficulty ramp.
    size: u8,
    /// Best (lowest) completed-game move count; 0 means no score yet.
    high_score: u32,
    music_enabled: bool,
    sfx_enabled: bool,
    /// Pending observable effects, drained by the event loop.
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session with the given RNG seed and the previously
    /// persisted high score (0 when there is none).
    ///
    /// The first board is dealt immediately.
    pub fn new(seed: u32, high_score: u32) -> Self {
        let mut state = Self {
            board: Board::new(START_BOARD_SIZE),
            rng: SimpleRng::new(seed),
            phase: Phase::Playing,
            moves: 0,
            level: 1,
            size: START_BOARD_SIZE,
            high_score,
            music_enabled: true,
            sfx_enabled: true,
            events: Vec::new(),
        };
        state.new_game();
        info!("session initialized: {0}x{0}, high score {1}", state.size, high_score);
        state
    }

    /// Start a session from a given position instead of a random deal
    /// (custom puzzles, tests). Level and move counters start fresh.
    pub fn with_board(board: Board, high_score: u32) -> Self {
        Self {
            size: board.size(),
            board,
            rng: SimpleRng::from_entropy(),
            phase: Phase::Playing,
            moves: 0,
            level: 1,
            high_score,
            music_enabled: true,
            sfx_enabled: true,
            events: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn music_enabled(&self) -> bool {
        self.music_enabled
    }

    pub fn sfx_enabled(&self) -> bool {
        self.sfx_enabled
    }

    /// Drain the pending observable effects.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Deal a fresh board at the current size and shuffle it.
    ///
    /// A shuffle failure is non-fatal: it is logged and surfaced as an
    /// event, and the session stays loaded so the player can retry.
    pub fn new_game(&mut self) {
        self.board = Board::new(self.size);
        self.phase = Phase::Playing;
        match shuffle::shuffle(&mut self.board, &mut self.rng) {
            Ok(attempts) => {
                self.moves = 0;
                self.events.push(GameEvent::NewGame { size: self.size });
                self.events.push(GameEvent::Shuffled);
                info!("dealt {0}x{0} board in {1} shuffle attempt(s)", self.size, attempts);
            }
            Err(err) => {
                error!("shuffle failed: {err:#}");
                self.events.push(GameEvent::ShuffleFailed(format!("{err:#}")));
            }
        }
    }

    /// Re-randomize the current board in place. The empty slot stays where
    /// it is and the move counter resets.
    fn reshuffle(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }
        match shuffle::shuffle(&mut self.board, &mut self.rng) {
            Ok(_) => {
                self.moves = 0;
                self.events.push(GameEvent::Shuffled);
            }
            Err(err) => {
                error!("shuffle failed: {err:#}");
                self.events.push(GameEvent::ShuffleFailed(format!("{err:#}")));
            }
        }
    }

    /// Slide the tile at `pos` into the empty slot.
    ///
    /// Not adjacent, out of bounds, or mid win-transition: silent no-op -
    /// stray clicks are not errors. Adjacent: exactly one swap, the empty
    /// slot moves to `pos`, the move counter increments, then the win check
    /// runs.
    pub fn move_tile(&mut self, pos: Pos) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        if !self.board.is_adjacent(pos) {
            return false;
        }

        let empty = self.board.empty_pos();
        self.board.swap(pos, empty);
        self.board.set_empty_pos(pos);
        self.moves += 1;
        self.events.push(GameEvent::Moved);

        if self.board.is_solved() {
            self.handle_win();
        }
        true
    }

    /// Resolve an arrow press into a tile slide. Pressing Up slides the tile
    /// *below* the empty slot upward, and so on.
    fn move_toward(&mut self, dir: Direction) -> bool {
        let empty = self.board.empty_pos();
        let target = match dir {
            Direction::Up if empty.y + 1 < self.board.size() => Pos::new(empty.x, empty.y + 1),
            Direction::Down if empty.y > 0 => Pos::new(empty.x, empty.y - 1),
            Direction::Left if empty.x + 1 < self.board.size() => Pos::new(empty.x + 1, empty.y),
            Direction::Right if empty.x > 0 => Pos::new(empty.x - 1, empty.y),
            _ => return false,
        };
        self.move_tile(target)
    }

    /// The win sequence, in fixed order: win notification, difficulty check
    /// against the current level, level increment, high-score comparison,
    /// then the timed transition into the next deal.
    fn handle_win(&mut self) {
        self.events.push(GameEvent::Win { moves: self.moves });

        // Difficulty ramp is evaluated before the level increments, so the
        // board grows after the 3rd, 6th, ... win.
        if self.level % GROW_EVERY_LEVELS == 0 && self.size < MAX_BOARD_SIZE {
            self.size += 1;
            info!("difficulty increased, next board {0}x{0}", self.size);
            self.events.push(GameEvent::SizeIncreased { size: self.size });
        }

        self.level += 1;
        self.events.push(GameEvent::LevelUp { level: self.level });

        if self.moves < self.high_score || self.high_score == 0 {
            self.high_score = self.moves;
            self.events.push(GameEvent::NewBest { moves: self.moves });
        }

        self.phase = Phase::Solved {
            remaining_ms: WIN_PAUSE_MS,
        };
        info!(
            "puzzle solved in {} moves (level {}, high score {})",
            self.moves, self.level, self.high_score
        );
    }

    /// Advance the only timer in the game: the pause between a win and the
    /// next deal. Returns true when a new board was dealt.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if let Phase::Solved { remaining_ms } = self.phase {
            let remaining = remaining_ms.saturating_sub(elapsed_ms);
            if remaining == 0 {
                self.new_game();
                return true;
            }
            self.phase = Phase::Solved {
                remaining_ms: remaining,
            };
        }
        false
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveAt(pos) => self.move_tile(pos),
            GameAction::Move(dir) => self.move_toward(dir),
            GameAction::NewGame => {
                // Allowed mid-pause: it cancels the transition and deals now.
                self.new_game();
                true
            }
            GameAction::Shuffle => {
                self.reshuffle();
                true
            }
            GameAction::ToggleMusic => {
                self.music_enabled = !self.music_enabled;
                self.events.push(GameEvent::MusicToggled(self.music_enabled));
                true
            }
            GameAction::ToggleSfx => {
                self.sfx_enabled = !self.sfx_enabled;
                self.events.push(GameEvent::SfxToggled(self.sfx_enabled));
                true
            }
        }
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Replace the board for tests that need a hand-built position.
    #[cfg(test)]
    pub fn set_board(&mut self, board: Board) {
        self.size = board.size();
        self.board = board;
        self.phase = Phase::Playing;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1, 0)
    }
}
