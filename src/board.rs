use std::fmt;

use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 4;
pub const NUM_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// One of the two player marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    A,
    B,
}

impl Mark {
    /// Mark to move when `cursor` moves have been played.
    pub fn for_cursor(cursor: usize) -> Self {
        if cursor % 2 == 0 { Mark::A } else { Mark::B }
    }

    pub fn opponent(self) -> Self {
        match self {
            Mark::A => Mark::B,
            Mark::B => Mark::A,
        }
    }

    /// Cell code used by `Board::to_array`.
    pub fn code(self) -> u8 {
        match self {
            Mark::A => 1,
            Mark::B => 2,
        }
    }
}

/// A 4x4 board snapshot represented by two bitboards.
///
/// Boards are `Copy` and never mutated in place: placing a mark yields a
/// new board.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    a: u16,
    b: u16,
}

impl Board {
    /// Creates the empty starting board.
    pub fn new() -> Self {
        Self { a: 0, b: 0 }
    }

    #[cfg(test)]
    pub(crate) fn from_bitboards(a: u16, b: u16) -> Self {
        debug_assert_eq!(a & b, 0, "a cell cannot hold both marks");
        Self { a, b }
    }

    /// Builds a board from a row-major cell list, `None` meaning empty.
    pub fn from_cells(cells: &[Option<Mark>; NUM_CELLS]) -> Self {
        cells
            .iter()
            .enumerate()
            .fold(Self::new(), |board, (pos, cell)| match cell {
                Some(mark) => board.with_mark(pos, *mark),
                None => board,
            })
    }

    /// Returns the mark at `pos`, or `None` for an empty or out-of-range cell.
    pub fn get(&self, pos: usize) -> Option<Mark> {
        let square = bit(pos);
        if (self.a & square) != 0 {
            Some(Mark::A)
        } else if (self.b & square) != 0 {
            Some(Mark::B)
        } else {
            None
        }
    }

    pub fn is_empty_at(&self, pos: usize) -> bool {
        ((self.a | self.b) & bit(pos)) == 0
    }

    /// Returns a copy of this board with `mark` placed at `pos`.
    /// Any previous occupant of `pos` is replaced.
    pub fn with_mark(&self, pos: usize, mark: Mark) -> Self {
        let square = bit(pos);
        let (a, b) = match mark {
            Mark::A => (self.a | square, self.b & !square),
            Mark::B => (self.a & !square, self.b | square),
        };
        Self { a, b }
    }

    /// Bitboard of the cells holding `mark`.
    pub fn mask(&self, mark: Mark) -> u16 {
        match mark {
            Mark::A => self.a,
            Mark::B => self.b,
        }
    }

    /// Returns `(a_count, b_count)`.
    pub fn count(&self) -> (u8, u8) {
        (self.a.count_ones() as u8, self.b.count_ones() as u8)
    }

    /// Returns the number of empty cells.
    pub fn empty_count(&self) -> u8 {
        let (a_count, b_count) = self.count();
        NUM_CELLS as u8 - a_count - b_count
    }

    /// Indices of the cells where the two boards differ.
    pub fn diff(&self, other: &Board) -> Vec<usize> {
        let changed = (self.a ^ other.a) | (self.b ^ other.b);
        (0..NUM_CELLS).filter(|&pos| changed & bit(pos) != 0).collect()
    }

    /// Converts board to `[u8; 16]` where 0=empty, 1=A, 2=B.
    pub fn to_array(&self) -> [u8; NUM_CELLS] {
        let mut board = [0u8; NUM_CELLS];
        for (pos, cell) in board.iter_mut().enumerate() {
            *cell = self.get(pos).map_or(0, Mark::code);
        }
        board
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let glyph = match self.get(row * BOARD_SIZE + col) {
                    Some(Mark::A) => 'A',
                    Some(Mark::B) => 'B',
                    None => '.',
                };
                write!(f, "{glyph}")?;
            }
            if row + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

pub(crate) fn bit(pos: usize) -> u16 {
    if pos < NUM_CELLS { 1u16 << pos } else { 0 }
}
