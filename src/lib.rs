use wasm_bindgen::prelude::*;

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod types;
pub mod wasm;
pub mod win;

pub use board::{Board, Mark};
pub use config::Labels;
pub use error::SessionError;
pub use game::Session;
pub use types::{MoveEntry, PlayOutcome, SessionView, Status};
pub use win::{WinningLine, detect_winning_line};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
