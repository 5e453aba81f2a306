//! JS-facing wrapper around [`Session`] for a browser host.
//!
//! The host re-reads `state()` after each mutating call; nothing is pushed.

use wasm_bindgen::prelude::*;

use crate::config::Labels;
use crate::game::Session;

#[wasm_bindgen]
pub struct GameSession {
    inner: Session,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl GameSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> GameSession {
        GameSession {
            inner: Session::new(),
        }
    }

    /// Accepts `{ a: "X", b: "O" }`; missing keys fall back to the defaults.
    #[wasm_bindgen(js_name = withLabels)]
    pub fn with_labels(labels: JsValue) -> Result<GameSession, JsError> {
        let labels: Labels = serde_wasm_bindgen::from_value(labels)?;
        Ok(GameSession {
            inner: Session::with_labels(labels)?,
        })
    }

    /// Returns `true` when a mark was placed, `false` for an ignored click.
    pub fn play(&mut self, cell: usize) -> Result<bool, JsError> {
        Ok(self.inner.play(cell)?.is_placed())
    }

    #[wasm_bindgen(js_name = jumpTo)]
    pub fn jump_to(&mut self, index: usize) -> Result<(), JsError> {
        self.inner.jump_to(index)?;
        Ok(())
    }

    /// Cells of the board under the cursor: 0=empty, 1=A, 2=B.
    #[wasm_bindgen(js_name = currentBoard)]
    pub fn current_board(&self) -> Vec<u8> {
        self.inner.current_board().to_array().to_vec()
    }

    pub fn status(&self) -> String {
        self.inner.status_text()
    }

    /// Empty when nobody has won on the current board.
    #[wasm_bindgen(js_name = winningLine)]
    pub fn winning_line(&self) -> Vec<u32> {
        self.inner
            .winning_line()
            .map(|line| line.iter().map(|&pos| pos as u32).collect())
            .unwrap_or_default()
    }

    #[wasm_bindgen(js_name = isWinningCell)]
    pub fn is_winning_cell(&self, cell: usize) -> bool {
        self.inner.is_winning_cell(cell)
    }

    #[wasm_bindgen(js_name = moveList)]
    pub fn move_list(&self) -> Result<JsValue, JsError> {
        let moves: Vec<_> = self.inner.move_list().collect();
        Ok(serde_wasm_bindgen::to_value(&moves)?)
    }

    pub fn state(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.to_view())?)
    }
}
