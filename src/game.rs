use tracing::{debug, trace, warn};

use crate::board::{Board, Mark, NUM_CELLS};
use crate::config::Labels;
use crate::error::SessionError;
use crate::types::{MoveEntry, PlayOutcome, SessionView, Status};
use crate::win::{self, WinningLine};

/// One game with its full board history and a cursor into it.
///
/// Whose turn it is is never stored: it is the parity of the cursor.
#[derive(Debug, Clone)]
pub struct Session {
    history: Vec<Board>,
    cursor: usize,
    labels: Labels,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Starts a session on the empty board with the default labels.
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            cursor: 0,
            labels: Labels::default(),
        }
    }

    pub fn with_labels(labels: Labels) -> Result<Self, SessionError> {
        labels.validate()?;
        Ok(Self {
            labels,
            ..Self::new()
        })
    }

    /// Places the next mark at `cell`.
    ///
    /// Playing on an occupied cell or after the game is won leaves the
    /// session untouched. Playing from a past cursor discards every board
    /// after it.
    pub fn play(&mut self, cell: usize) -> Result<PlayOutcome, SessionError> {
        if cell >= NUM_CELLS {
            warn!(cell, "rejected play outside the board");
            return Err(SessionError::CellOutOfRange { index: cell });
        }

        let board = self.current_board();
        if win::detect_winning_line(&board).is_some() {
            trace!(cell, "ignored play: game already won");
            return Ok(PlayOutcome::GameWon);
        }
        if !board.is_empty_at(cell) {
            trace!(cell, "ignored play: cell occupied");
            return Ok(PlayOutcome::CellOccupied);
        }

        let mark = self.next_mark();
        let next = board.with_mark(cell, mark);
        debug_assert_eq!(board.diff(&next), vec![cell]);

        let discarded = self.history.len() - (self.cursor + 1);
        self.history.truncate(self.cursor + 1);
        self.history.push(next);
        self.cursor = self.history.len() - 1;

        debug!(cell, ?mark, move_index = self.cursor, discarded, "placed mark");
        Ok(PlayOutcome::Placed(mark))
    }

    /// Moves the cursor to `index` without touching the history.
    pub fn jump_to(&mut self, index: usize) -> Result<(), SessionError> {
        if index >= self.history.len() {
            warn!(index, len = self.history.len(), "rejected jump outside history");
            return Err(SessionError::MoveOutOfRange {
                index,
                len: self.history.len(),
            });
        }

        debug!(from = self.cursor, to = index, "jumped");
        self.cursor = index;
        Ok(())
    }

    pub fn current_board(&self) -> Board {
        debug_assert!(self.cursor < self.history.len());
        self.history[self.cursor]
    }

    pub fn history(&self) -> &[Board] {
        &self.history
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Mark that the next `play` would place.
    pub fn next_mark(&self) -> Mark {
        Mark::for_cursor(self.cursor)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        win::detect_winning_line(&self.current_board())
    }

    pub fn is_winning_cell(&self, cell: usize) -> bool {
        self.winning_line()
            .is_some_and(|line| line.contains(&cell))
    }

    /// Winner is the mark that moved last, i.e. not the one to move next.
    pub fn status(&self) -> Status {
        match self.winning_line() {
            Some(_) => Status::Won(self.next_mark().opponent()),
            None => Status::Next(self.next_mark()),
        }
    }

    pub fn status_text(&self) -> String {
        self.labels.status_text(self.status())
    }

    /// Navigation entries, one per history board. The iterator can be
    /// cloned to walk the list again.
    pub fn move_list(&self) -> impl Iterator<Item = MoveEntry> + Clone + use<> {
        (0..self.history.len()).map(move_entry as fn(usize) -> MoveEntry)
    }

    pub fn to_view(&self) -> SessionView {
        let winning_line = self.winning_line();
        SessionView {
            board: self.current_board().to_array().to_vec(),
            cursor: self.cursor,
            history_len: self.history.len(),
            next_mark: self.next_mark(),
            winner: match self.status() {
                Status::Won(mark) => Some(mark),
                Status::Next(_) => None,
            },
            winning_line: winning_line.map(|line| line.to_vec()).unwrap_or_default(),
            status: self.status_text(),
            moves: self.move_list().collect(),
        }
    }
}

fn move_entry(index: usize) -> MoveEntry {
    let label = if index > 0 {
        format!("Go to move #{index}")
    } else {
        "Go to game start".to_string()
    };
    MoveEntry { index, label }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_all(session: &mut Session, cells: &[usize]) {
        for &cell in cells {
            assert!(session.play(cell).unwrap().is_placed(), "cell {cell}");
        }
    }

    fn labelled_ab() -> Session {
        Session::with_labels(Labels::new("A", "B").unwrap()).unwrap()
    }

    #[test]
    fn initial_state_is_correct() {
        let session = Session::new();

        assert_eq!(session.history().len(), 1);
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.current_board(), Board::new());
        assert_eq!(session.status(), Status::Next(Mark::A));
        assert_eq!(session.status_text(), "Next player: X");
        assert_eq!(session.winning_line(), None);
    }

    #[test]
    fn marks_alternate_without_jumps() {
        let mut session = Session::new();
        let cells = [0, 1, 2, 4, 3, 6, 5];

        for (k, &cell) in cells.iter().enumerate() {
            let expected = if k % 2 == 0 { Mark::A } else { Mark::B };
            assert_eq!(session.play(cell).unwrap(), PlayOutcome::Placed(expected));
            assert_eq!(session.current_board().get(cell), Some(expected));
        }
    }

    #[test]
    fn double_play_on_same_cell_mutates_once() {
        let mut session = Session::new();

        assert_eq!(session.play(7).unwrap(), PlayOutcome::Placed(Mark::A));
        let before = session.history().to_vec();
        assert_eq!(session.play(7).unwrap(), PlayOutcome::CellOccupied);

        assert_eq!(session.history(), before.as_slice());
        assert_eq!(session.cursor(), 1);
        assert_eq!(session.next_mark(), Mark::B);
    }

    #[test]
    fn each_history_step_fills_exactly_one_cell() {
        let mut session = Session::new();
        play_all(&mut session, &[5, 9, 0, 15]);

        for pair in session.history().windows(2) {
            let changed = pair[0].diff(&pair[1]);
            assert_eq!(changed.len(), 1);
            assert_eq!(pair[0].get(changed[0]), None);
            assert!(pair[1].get(changed[0]).is_some());
        }
    }

    #[test]
    fn column_win_scenario() {
        let mut session = labelled_ab();

        session.play(0).unwrap();
        assert_eq!(session.current_board().get(0), Some(Mark::A));
        assert_eq!(session.status_text(), "Next player: B");

        play_all(&mut session, &[1, 4, 5, 8]);
        assert_eq!(session.status(), Status::Next(Mark::B));

        // B plays elsewhere, then A completes column 0.
        play_all(&mut session, &[9, 12]);
        assert_eq!(session.current_board().get(12), Some(Mark::A));
        assert_eq!(session.winning_line(), Some([0, 4, 8, 12]));
        assert_eq!(session.status(), Status::Won(Mark::A));
        assert_eq!(session.status_text(), "Winner: A");
        assert!(session.is_winning_cell(8));
        assert!(!session.is_winning_cell(1));

        let len = session.history().len();
        assert_eq!(session.play(2).unwrap(), PlayOutcome::GameWon);
        assert_eq!(session.history().len(), len);
        assert_eq!(session.current_board().get(2), None);
    }

    #[test]
    fn jump_to_start_keeps_history() {
        let mut session = Session::new();
        play_all(&mut session, &[0, 1, 4, 5, 8, 9, 12]);
        assert_eq!(session.history().len(), 8);

        session.jump_to(0).unwrap();

        assert_eq!(session.current_board(), Board::new());
        assert_eq!(session.status(), Status::Next(Mark::A));
        assert_eq!(session.winning_line(), None);
        assert_eq!(session.history().len(), 8);
    }

    #[test]
    fn play_after_jump_truncates_future() {
        let mut session = Session::new();
        play_all(&mut session, &[0, 1, 2, 3, 4]);
        let kept = session.history()[..3].to_vec();

        session.jump_to(2).unwrap();
        assert_eq!(session.play(10).unwrap(), PlayOutcome::Placed(Mark::A));

        let history = session.history();
        assert_eq!(history.len(), 4);
        assert_eq!(&history[..3], kept.as_slice());
        assert_eq!(history[2].diff(&history[3]), vec![10]);
        assert_eq!(session.cursor(), 3);
        assert_eq!(session.current_board().get(3), None);
    }

    #[test]
    fn turn_follows_cursor_parity_after_jump() {
        let mut session = Session::new();
        play_all(&mut session, &[0, 1, 2, 3]);

        session.jump_to(1).unwrap();
        assert_eq!(session.next_mark(), Mark::B);
        assert_eq!(session.play(6).unwrap(), PlayOutcome::Placed(Mark::B));
        assert_eq!(session.next_mark(), Mark::A);
    }

    #[test]
    fn jump_to_past_winning_board_reopens_play() {
        let mut session = Session::new();
        play_all(&mut session, &[0, 1, 4, 5, 8, 9, 12]);
        assert!(session.winning_line().is_some());

        session.jump_to(6).unwrap();
        assert_eq!(session.status(), Status::Next(Mark::A));
        assert_eq!(session.play(12).unwrap(), PlayOutcome::Placed(Mark::A));
        assert_eq!(session.history().len(), 8);
    }

    #[test]
    fn out_of_range_calls_fail() {
        let mut session = Session::new();
        session.play(0).unwrap();

        assert_eq!(
            session.jump_to(2),
            Err(SessionError::MoveOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            session.play(16),
            Err(SessionError::CellOutOfRange { index: 16 })
        );
        assert_eq!(session.cursor(), 1);
    }

    #[test]
    fn full_board_without_winner_stays_in_progress() {
        let mut session = Session::new();
        // Fills A A B B / B B A A / A A B B / B B A A without a line.
        play_all(
            &mut session,
            &[0, 2, 1, 3, 6, 4, 7, 5, 8, 10, 9, 11, 14, 12, 15, 13],
        );

        assert_eq!(session.current_board().empty_count(), 0);
        assert_eq!(session.winning_line(), None);
        assert_eq!(session.status(), Status::Next(Mark::A));
        for cell in 0..NUM_CELLS {
            assert_eq!(session.play(cell).unwrap(), PlayOutcome::CellOccupied);
        }
    }

    #[test]
    fn move_list_labels_and_restarts() {
        let mut session = Session::new();
        play_all(&mut session, &[0, 1]);

        let moves = session.move_list();
        let labels: Vec<String> = moves.clone().map(|entry| entry.label).collect();
        assert_eq!(
            labels,
            vec!["Go to game start", "Go to move #1", "Go to move #2"]
        );
        assert_eq!(moves.map(|entry| entry.index).collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn view_reflects_won_state() {
        let mut session = Session::new();
        play_all(&mut session, &[3, 0, 6, 1, 9, 2, 12]);

        let view = session.to_view();
        assert_eq!(view.winner, Some(Mark::A));
        assert_eq!(view.winning_line, vec![3, 6, 9, 12]);
        assert_eq!(view.status, "Winner: X");
        assert_eq!(view.history_len, 8);
        assert_eq!(view.cursor, 7);
        assert_eq!(view.board[3], 1);
        assert_eq!(view.board[0], 2);
        assert_eq!(view.moves.len(), 8);
    }
}
