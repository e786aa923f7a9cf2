//! Move selection for the computer player.
//!
//! The computer plays an exhaustive [`Minimax`] search: every line of play from
//! the current position is followed to a win, loss or draw, assuming both
//! players choose their best option at each step.
//!
//! # Scoring
//!
//! Terminal positions are scored from the computer's point of view, adjusted by
//! the number of plies (`depth`) needed to reach them:
//!
//! | position            | score        |
//! |---------------------|--------------|
//! | computer has a line | `10 - depth` |
//! | opponent has a line | `depth - 10` |
//! | full, no line       | `0`          |
//!
//! The depth adjustment makes the computer take the fastest win and postpone an
//! unavoidable loss as long as possible.
//!
//! # Cost
//!
//! There is no pruning and no transposition table. The search visits fewer than
//! one million positions from the empty 3×3 board, which is fast enough here but
//! would not scale to larger boards.

pub use self::minimax::*;

mod minimax;
