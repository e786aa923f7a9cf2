//! Game orchestration on top of the rules and the search.
//!
//! - [`GameSession`] - human vs. computer game: applies the human's move, then the
//!   computer's reply, and reports the [`GameResult`](crate::GameResult) after each turn
//! - [`self_play`] - computer vs. computer game from the empty board
//!
//! A session never ends the process. Once the result is terminal, further moves are
//! rejected and the caller decides what ending the game means.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameSession, Mark, Move, Player};
//!
//! let mut session = GameSession::new(Player::new("Ada", Mark::X));
//! let turn = session.play(Move::new(0, 0).unwrap()).unwrap();
//!
//! assert_eq!(turn.computer_move(), Some(Move::CENTER));
//! assert!(turn.result().is_ongoing());
//! ```

pub use self::{game_session::*, self_play::*};

mod game_session;
mod self_play;
