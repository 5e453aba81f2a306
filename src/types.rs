use serde::Serialize;

use crate::board::Mark;

/// Derived game status of the board under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    /// No winning line yet; this mark moves next.
    Next(Mark),
    /// This mark completed a line with the last move.
    Won(Mark),
}

/// Result of a `play` call on an in-range cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlayOutcome {
    Placed(Mark),
    /// Ignored: the cell already holds a mark.
    CellOccupied,
    /// Ignored: the current board already has a winning line.
    GameWon,
}

impl PlayOutcome {
    pub fn is_placed(&self) -> bool {
        matches!(self, PlayOutcome::Placed(_))
    }
}

/// One history navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveEntry {
    pub index: usize,
    pub label: String,
}

/// Public session state returned to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    /// 0=empty, 1=A, 2=B, row-major.
    pub board: Vec<u8>,
    pub cursor: usize,
    pub history_len: usize,
    pub next_mark: Mark,
    pub winner: Option<Mark>,
    /// Contract:
    /// - Won: the four winning indices in scan order.
    /// - In progress: must be an empty list.
    pub winning_line: Vec<usize>,
    pub status: String,
    pub moves: Vec<MoveEntry>,
}
