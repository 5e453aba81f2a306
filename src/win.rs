//! Win detection over a single board snapshot.

use once_cell::sync::Lazy;
use tracing::instrument;

use crate::board::{BOARD_SIZE, Board, Mark, bit};

/// Board indices of a completed row, column or diagonal.
pub type WinningLine = [usize; BOARD_SIZE];

const NUM_LINES: usize = 2 * BOARD_SIZE + 2;

/// Every line of the board in scan order: rows, columns, main diagonal,
/// anti-diagonal. Each line lists its indices in the order they are walked.
static LINES: Lazy<[WinningLine; NUM_LINES]> = Lazy::new(|| {
    let size = BOARD_SIZE;
    let mut lines = [[0usize; BOARD_SIZE]; NUM_LINES];

    for i in 0..size {
        for j in 0..size {
            lines[i][j] = i * size + j;
            lines[size + i][j] = j * size + i;
        }
        lines[2 * size][i] = i * size + i;
        lines[2 * size + 1][i] = i * size + (size - 1 - i);
    }

    lines
});

/// Returns every line the detector scans, in scan order.
pub fn lines() -> &'static [WinningLine] {
    LINES.as_slice()
}

/// Returns the first line whose cells all hold the same mark.
///
/// Rows are scanned first, then columns, then the main and anti diagonals.
#[instrument(level = "trace")]
pub fn detect_winning_line(board: &Board) -> Option<WinningLine> {
    LINES
        .iter()
        .find(|line| line_owner(board, line).is_some())
        .copied()
}

/// Returns the mark that completed `line`, if any.
pub fn line_owner(board: &Board, line: &WinningLine) -> Option<Mark> {
    let line_mask = line.iter().fold(0u16, |mask, &pos| mask | bit(pos));
    [Mark::A, Mark::B]
        .into_iter()
        .find(|&mark| board.mask(mark) & line_mask == line_mask)
}

/// Returns the mark holding the first winning line, if any.
pub fn winner(board: &Board) -> Option<Mark> {
    detect_winning_line(board).and_then(|line| line_owner(board, &line))
}
