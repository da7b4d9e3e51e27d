//! Board module - owns the NxN grid of tiles and the empty slot
//!
//! Cells are stored in a flat array (row-major, y * size + x) sized for the
//! largest supported board, so boards of any size share one allocation-free
//! representation. Exactly one cell is empty at all times; every other cell
//! holds a distinct value in `1..=size*size-1`.

use arrayvec::ArrayVec;

use crate::types::{Cell, Pos, MAX_BOARD_SIZE, MAX_CELLS, MIN_BOARD_SIZE};

/// The puzzle board - an NxN grid of numbered tiles around one empty slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: u8,
    /// Flat array of cells, row-major order (y * size + x)
    cells: ArrayVec<Cell, MAX_CELLS>,
    /// Position of the single empty cell
    empty: Pos,
}

impl Board {
    /// Create a solved board: tiles `1..size*size-1` in row-major order with
    /// the empty slot in the bottom-right corner.
    ///
    /// `size` is clamped to the supported range (2..=6).
    pub fn new(size: u8) -> Self {
        let size = size.clamp(MIN_BOARD_SIZE, MAX_BOARD_SIZE);
        let n = size as usize;

        let mut cells: ArrayVec<Cell, MAX_CELLS> = ArrayVec::new();
        for i in 0..n * n - 1 {
            cells.push(Some((i + 1) as u8));
        }
        cells.push(None);

        Self {
            size,
            cells,
            empty: Pos::new(size - 1, size - 1),
        }
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    /// Position of the empty slot.
    pub fn empty_pos(&self) -> Pos {
        self.empty
    }

    /// Calculate flat index from a coordinate, or None if out of bounds
    #[inline(always)]
    fn index(&self, pos: Pos) -> Option<usize> {
        if pos.x >= self.size || pos.y >= self.size {
            return None;
        }
        Some((pos.y as usize) * (self.size as usize) + (pos.x as usize))
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x < self.size && pos.y < self.size
    }

    /// Get cell at a position. Returns None if out of bounds.
    pub fn get(&self, pos: Pos) -> Option<Cell> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Set cell at a position. Returns false if out of bounds.
    ///
    /// Used by the shuffle engine when laying out a permutation; callers are
    /// responsible for keeping the empty-slot invariant intact afterward.
    pub(crate) fn set(&mut self, pos: Pos, cell: Cell) -> bool {
        match self.index(pos) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Exchange the values at two cells. The caller must update the empty
    /// position afterward if one of them was the empty slot.
    pub fn swap(&mut self, a: Pos, b: Pos) -> bool {
        match (self.index(a), self.index(b)) {
            (Some(ia), Some(ib)) => {
                self.cells.swap(ia, ib);
                true
            }
            _ => false,
        }
    }

    /// Record where the empty slot is after a swap involving it.
    pub(crate) fn set_empty_pos(&mut self, pos: Pos) {
        debug_assert_eq!(self.get(pos), Some(None));
        self.empty = pos;
    }

    /// True iff `pos` is orthogonally adjacent to the empty slot
    /// (Manhattan distance 1, same row or same column).
    pub fn is_adjacent(&self, pos: Pos) -> bool {
        if !self.in_bounds(pos) {
            return false;
        }
        let dx = (pos.x as i16 - self.empty.x as i16).abs();
        let dy = (pos.y as i16 - self.empty.y as i16).abs();
        (dx == 1 && dy == 0) || (dx == 0 && dy == 1)
    }

    /// True iff, scanning row-major and skipping the empty cell, the tile
    /// values read `1, 2, 3, ...` with no gaps.
    pub fn is_solved(&self) -> bool {
        let mut expected: u8 = 1;
        for cell in &self.cells {
            match cell {
                None => continue,
                Some(v) => {
                    if *v != expected {
                        return false;
                    }
                    expected += 1;
                }
            }
        }
        true
    }

    /// The non-empty tile values in row-major order - the flattened sequence
    /// the solvability parity rule is defined over.
    pub fn tiles(&self) -> impl Iterator<Item = u8> + '_ {
        self.cells.iter().filter_map(|c| *c)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Build a board from rows of cells.
    ///
    /// Returns None unless the rows form a square grid in the supported size
    /// range holding each of `1..=size*size-1` exactly once plus exactly one
    /// empty cell.
    pub fn from_rows(rows: &[Vec<Cell>]) -> Option<Self> {
        let size = rows.len();
        if size < MIN_BOARD_SIZE as usize || size > MAX_BOARD_SIZE as usize {
            return None;
        }
        if rows.iter().any(|row| row.len() != size) {
            return None;
        }

        let mut cells: ArrayVec<Cell, MAX_CELLS> = ArrayVec::new();
        let mut seen = [false; MAX_CELLS];
        let mut empty = None;
        for (y, row) in rows.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                match cell {
                    None => {
                        if empty.is_some() {
                            return None;
                        }
                        empty = Some(Pos::new(x as u8, y as u8));
                    }
                    Some(v) => {
                        let v = *v as usize;
                        if v == 0 || v >= size * size || seen[v] {
                            return None;
                        }
                        seen[v] = true;
                    }
                }
                cells.push(*cell);
            }
        }

        Some(Self {
            size: size as u8,
            cells,
            empty: empty?,
        })
    }

    /// Copy the grid out as rows of cells.
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        let n = self.size as usize;
        (0..n).map(|y| self.cells[y * n..(y + 1) * n].to_vec()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_solved() {
        for size in 2..=6 {
            let board = Board::new(size);
            assert!(board.is_solved(), "Board::new({}) should be solved", size);
            assert_eq!(board.size(), size);
            assert_eq!(board.empty_pos(), Pos::new(size - 1, size - 1));
        }
    }

    #[test]
    fn test_new_board_layout() {
        let board = Board::new(3);
        assert_eq!(
            board.to_rows(),
            vec![
                vec![Some(1), Some(2), Some(3)],
                vec![Some(4), Some(5), Some(6)],
                vec![Some(7), Some(8), None],
            ]
        );
    }

    #[test]
    fn test_size_clamped() {
        assert_eq!(Board::new(1).size(), 2);
        assert_eq!(Board::new(9).size(), 6);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let board = Board::new(4);
        assert_eq!(board.get(Pos::new(4, 0)), None);
        assert_eq!(board.get(Pos::new(0, 4)), None);
        assert_eq!(board.get(Pos::new(3, 3)), Some(None));
    }

    #[test]
    fn test_adjacency() {
        let board = Board::new(4); // empty at (3, 3)
        assert!(board.is_adjacent(Pos::new(2, 3)));
        assert!(board.is_adjacent(Pos::new(3, 2)));

        assert!(!board.is_adjacent(Pos::new(3, 3))); // the empty slot itself
        assert!(!board.is_adjacent(Pos::new(2, 2))); // diagonal
        assert!(!board.is_adjacent(Pos::new(0, 3))); // same row, too far
        assert!(!board.is_adjacent(Pos::new(4, 3))); // out of bounds
    }

    #[test]
    fn test_swap() {
        let mut board = Board::new(3);
        let a = Pos::new(0, 0);
        let b = Pos::new(1, 0);

        assert!(board.swap(a, b));
        assert_eq!(board.get(a), Some(Some(2)));
        assert_eq!(board.get(b), Some(Some(1)));
        assert!(!board.is_solved());

        // Swap back restores order.
        assert!(board.swap(a, b));
        assert!(board.is_solved());

        // Out of bounds is rejected.
        assert!(!board.swap(a, Pos::new(3, 0)));
    }

    #[test]
    fn test_is_solved_skips_empty_anywhere() {
        // Empty in the middle, tiles still ascending row-major.
        let board = Board::from_rows(&[
            vec![Some(1), Some(2), Some(3)],
            vec![Some(4), None, Some(5)],
            vec![Some(6), Some(7), Some(8)],
        ])
        .unwrap();
        assert!(board.is_solved());
        assert_eq!(board.empty_pos(), Pos::new(1, 1));
    }

    #[test]
    fn test_is_solved_idempotent() {
        let board = Board::new(4);
        for _ in 0..10 {
            assert!(board.is_solved());
        }
    }

    #[test]
    fn test_tiles_row_major() {
        let board = Board::new(3);
        let tiles: Vec<u8> = board.tiles().collect();
        assert_eq!(tiles, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_from_rows_rejects_bad_grids() {
        // Ragged rows.
        assert!(Board::from_rows(&[vec![Some(1), Some(2)], vec![None]]).is_none());
        // Two empty cells.
        assert!(Board::from_rows(&[
            vec![Some(1), None],
            vec![Some(2), None],
        ])
        .is_none());
        // Duplicate tile value.
        assert!(Board::from_rows(&[
            vec![Some(1), Some(1)],
            vec![Some(2), None],
        ])
        .is_none());
        // Value out of range.
        assert!(Board::from_rows(&[
            vec![Some(1), Some(9)],
            vec![Some(2), None],
        ])
        .is_none());
    }

    #[test]
    fn test_rows_roundtrip() {
        let rows = vec![
            vec![Some(3), Some(1), Some(2)],
            vec![Some(4), None, Some(5)],
            vec![Some(6), Some(7), Some(8)],
        ];
        let board = Board::from_rows(&rows).unwrap();
        assert_eq!(board.to_rows(), rows);
        assert_eq!(board.empty_pos(), Pos::new(1, 1));
    }
}
