use serde::{Deserialize, Serialize};

use super::mark::Mark;

/// Outcome of a position.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
pub enum GameResult {
    /// No line is complete and at least one cell is empty.
    #[display("ongoing")]
    Ongoing,
    #[display("{_0} wins")]
    Win(Mark),
    /// Board is full without a complete line.
    #[display("draw")]
    Draw,
}

impl GameResult {
    /// Returns true for a win or a draw.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !self.is_ongoing()
    }

    #[must_use]
    pub fn winner(self) -> Option<Mark> {
        match self {
            Self::Win(mark) => Some(mark),
            Self::Ongoing | Self::Draw => None,
        }
    }
}
