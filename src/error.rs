use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("move index {index} is out of range (history holds {len} boards)")]
    MoveOutOfRange { index: usize, len: usize },
    #[error("cell index {index} is out of range (board has 16 cells)")]
    CellOutOfRange { index: usize },
    #[error("invalid mark labels: {0}")]
    InvalidLabels(String),
}
