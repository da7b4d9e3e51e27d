//! Shuffle engine tests - deal acceptance and board integrity

use tui_fifteen::core::{is_solvable, Board, SimpleRng};
use tui_fifteen::core::shuffle::shuffle;
use tui_fifteen::types::Pos;

#[test]
fn test_shuffled_boards_pass_the_deal_rule() {
    for size in 2..=6u8 {
        let mut rng = SimpleRng::new(0xBEEF + size as u32);
        for _ in 0..25 {
            let mut board = Board::new(size);
            shuffle(&mut board, &mut rng).expect("shuffle within retry budget");
            assert!(is_solvable(&board), "dealt {size}x{size} board was rejected");
        }
    }
}

#[test]
fn test_shuffle_preserves_tile_set_and_empty() {
    let mut rng = SimpleRng::new(42);
    let mut board = Board::new(4);
    let empty = board.empty_pos();
    shuffle(&mut board, &mut rng).unwrap();

    // Same empty slot, same multiset of tiles.
    assert_eq!(board.empty_pos(), empty);
    let mut tiles: Vec<u8> = board.tiles().collect();
    tiles.sort_unstable();
    assert_eq!(tiles, (1..16).collect::<Vec<u8>>());
}

#[test]
fn test_shuffle_is_deterministic_per_seed() {
    let mut a = Board::new(4);
    let mut b = Board::new(4);
    shuffle(&mut a, &mut SimpleRng::new(7)).unwrap();
    shuffle(&mut b, &mut SimpleRng::new(7)).unwrap();
    assert_eq!(a.to_rows(), b.to_rows());
}

#[test]
fn test_single_swap_changes_acceptance() {
    let mut rng = SimpleRng::new(99);
    let mut board = Board::new(4);
    shuffle(&mut board, &mut rng).unwrap();
    assert!(is_solvable(&board));

    // Swapping two tiles in the same row flips exactly one inversion's parity.
    board.swap(Pos::new(0, 0), Pos::new(1, 0));
    assert!(!is_solvable(&board));
}
