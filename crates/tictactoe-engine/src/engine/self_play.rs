use tracing::debug;

use crate::{
    core::{Board, GameResult, Mark, Move},
    search::Minimax,
};

/// Moves and outcome of a computer vs. computer game.
#[derive(Debug, Clone)]
pub struct SelfPlayRecord {
    moves: Vec<(Mark, Move)>,
    board: Board,
    result: GameResult,
}

impl SelfPlayRecord {
    #[must_use]
    pub fn moves(&self) -> &[(Mark, Move)] {
        &self.moves
    }

    /// Final position.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn result(&self) -> GameResult {
        self.result
    }
}

/// Plays both sides with [`Minimax::best_move`], starting from the empty board.
#[must_use]
pub fn self_play(first: Mark) -> SelfPlayRecord {
    let mut board = Board::EMPTY;
    let mut to_move = first;
    let mut moves = vec![];

    while board.result().is_ongoing() {
        let Some(mv) = Minimax::new(to_move).best_move(&board) else {
            break;
        };
        board.place(mv, to_move);
        moves.push((to_move, mv));
        to_move = to_move.opponent();
    }

    let result = board.result();
    debug!(%first, plies = moves.len(), %result, "self-play finished");
    SelfPlayRecord {
        moves,
        board,
        result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_play_is_a_draw() {
        for first in Mark::ALL {
            let record = self_play(first);
            assert_eq!(record.result(), GameResult::Draw, "{first} first");
            assert_eq!(record.moves().len(), 9);
            assert!(record.board().is_full());
        }
    }

    #[test]
    fn test_marks_alternate() {
        let record = self_play(Mark::O);
        for (i, (mark, _)) in record.moves().iter().enumerate() {
            let expected = if i % 2 == 0 { Mark::O } else { Mark::X };
            assert_eq!(*mark, expected);
        }
    }

    #[test]
    fn test_self_play_is_deterministic() {
        let a = self_play(Mark::X);
        let b = self_play(Mark::X);
        assert_eq!(a.moves(), b.moves());
    }
}
