use serde::{Deserialize, Serialize};

use crate::board::Mark;
use crate::error::SessionError;
use crate::types::Status;

/// Display glyphs for the two marks.
///
/// Mark identity never depends on these strings; they only affect how a
/// status is rendered for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub a: String,
    pub b: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            a: "X".to_string(),
            b: "O".to_string(),
        }
    }
}

impl Labels {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Result<Self, SessionError> {
        let labels = Self {
            a: a.into(),
            b: b.into(),
        };
        labels.validate()?;
        Ok(labels)
    }

    /// Rejects empty glyphs and glyphs shared by both marks.
    pub fn validate(&self) -> Result<(), SessionError> {
        if self.a.trim().is_empty() || self.b.trim().is_empty() {
            return Err(SessionError::InvalidLabels(
                "labels must not be empty".to_string(),
            ));
        }
        if self.a == self.b {
            return Err(SessionError::InvalidLabels(format!(
                "both marks use the label {:?}",
                self.a
            )));
        }
        Ok(())
    }

    pub fn label(&self, mark: Mark) -> &str {
        match mark {
            Mark::A => &self.a,
            Mark::B => &self.b,
        }
    }

    pub fn status_text(&self, status: Status) -> String {
        match status {
            Status::Next(mark) => format!("Next player: {}", self.label(mark)),
            Status::Won(mark) => format!("Winner: {}", self.label(mark)),
        }
    }
}
