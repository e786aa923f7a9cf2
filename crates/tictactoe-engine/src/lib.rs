pub use self::{core::*, engine::*, search::*};

pub mod core;
pub mod engine;
pub mod search;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("cell at {position} is already occupied")]
pub struct CellOccupiedError {
    position: Move,
}

impl CellOccupiedError {
    #[must_use]
    pub fn position(&self) -> Move {
        self.position
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum PlayError {
    #[display("cannot play there")]
    CellOccupied(CellOccupiedError),
    #[display("game is already over")]
    GameOver,
}
