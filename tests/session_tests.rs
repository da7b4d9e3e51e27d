//! Session tests - win sequence, difficulty ramp, high score

use tui_fifteen::core::{Board, GameState, Phase};
use tui_fifteen::types::{Direction, GameAction, GameEvent, Pos, WIN_PAUSE_MS};

/// A 3x3 board one slide away from solved: tile 8 sits in the corner and
/// the empty slot is just left of it.
fn near_win_board() -> Board {
    Board::from_rows(&[
        vec![Some(1), Some(2), Some(3)],
        vec![Some(4), Some(5), Some(6)],
        vec![Some(7), None, Some(8)],
    ])
    .unwrap()
}

#[test]
fn test_session_new_deals_shuffled_board() {
    let mut game = GameState::new(12345, 0);
    assert_eq!(game.size(), 4);
    assert_eq!(game.level(), 1);
    assert_eq!(game.moves(), 0);
    assert_eq!(game.phase(), Phase::Playing);

    let events = game.take_events();
    assert!(events.contains(&GameEvent::NewGame { size: 4 }));
    assert!(events.contains(&GameEvent::Shuffled));
}

#[test]
fn test_winning_move_fires_full_sequence() {
    let mut game = GameState::with_board(near_win_board(), 0);
    game.take_events();

    assert!(game.apply_action(GameAction::MoveAt(Pos::new(2, 2))));
    assert_eq!(game.moves(), 1);
    assert_eq!(game.level(), 2);
    assert_eq!(game.high_score(), 1);
    assert!(matches!(game.phase(), Phase::Solved { .. }));

    let events = game.take_events();
    assert!(events.contains(&GameEvent::Moved));
    assert!(events.contains(&GameEvent::Win { moves: 1 }));
    assert!(events.contains(&GameEvent::LevelUp { level: 2 }));
    assert!(events.contains(&GameEvent::NewBest { moves: 1 }));
    // Level 1 is not a growth level.
    assert!(!events.iter().any(|e| matches!(e, GameEvent::SizeIncreased { .. })));
}

#[test]
fn test_win_is_not_a_new_best_when_score_stands() {
    let mut game = GameState::with_board(near_win_board(), 1);
    game.take_events();
    game.apply_action(GameAction::MoveAt(Pos::new(2, 2)));

    assert_eq!(game.high_score(), 1);
    let events = game.take_events();
    assert!(!events.iter().any(|e| matches!(e, GameEvent::NewBest { .. })));
}

#[test]
fn test_win_pause_then_next_deal() {
    let mut game = GameState::with_board(near_win_board(), 0);
    game.apply_action(GameAction::MoveAt(Pos::new(2, 2)));
    game.take_events();

    // Input is inert during the pause.
    assert!(!game.apply_action(GameAction::MoveAt(Pos::new(1, 2))));
    assert!(!game.apply_action(GameAction::Move(Direction::Left)));
    assert_eq!(game.moves(), 1);

    // Pause elapses, the next board is dealt at the same size.
    game.tick(WIN_PAUSE_MS);
    assert_eq!(game.phase(), Phase::Playing);
    assert_eq!(game.moves(), 0);
    assert_eq!(game.size(), 3);
    assert!(game.take_events().contains(&GameEvent::NewGame { size: 3 }));
}

#[test]
fn test_non_adjacent_click_is_ignored() {
    let mut game = GameState::with_board(near_win_board(), 0);
    game.take_events();

    assert!(!game.apply_action(GameAction::MoveAt(Pos::new(0, 0))));
    assert_eq!(game.moves(), 0);
    assert!(game.take_events().is_empty());
}

#[test]
fn test_shuffle_resets_moves() {
    let mut game = GameState::with_board(near_win_board(), 0);
    game.apply_action(GameAction::MoveAt(Pos::new(1, 1)));
    assert_eq!(game.moves(), 1);

    game.apply_action(GameAction::Shuffle);
    assert_eq!(game.moves(), 0);
    assert!(game.take_events().contains(&GameEvent::Shuffled));
}

#[test]
fn test_new_game_cancels_win_pause() {
    let mut game = GameState::with_board(near_win_board(), 0);
    game.apply_action(GameAction::MoveAt(Pos::new(2, 2)));
    assert!(matches!(game.phase(), Phase::Solved { .. }));

    game.apply_action(GameAction::NewGame);
    assert_eq!(game.phase(), Phase::Playing);
    assert_eq!(game.moves(), 0);
}

#[test]
fn test_audio_toggles() {
    let mut game = GameState::with_board(near_win_board(), 0);
    game.take_events();
    assert!(game.music_enabled());
    assert!(game.sfx_enabled());

    game.apply_action(GameAction::ToggleMusic);
    game.apply_action(GameAction::ToggleSfx);
    assert!(!game.music_enabled());
    assert!(!game.sfx_enabled());

    let events = game.take_events();
    assert!(events.contains(&GameEvent::MusicToggled(false)));
    assert!(events.contains(&GameEvent::SfxToggled(false)));
}
