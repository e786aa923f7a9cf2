use arrayvec::ArrayVec;
use serde::Serialize;
use tracing::{debug, trace};

use crate::core::{Board, CELL_COUNT, Mark, Move};

const WIN_SCORE: i32 = 10;

/// A candidate move and its minimax score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoredMove {
    #[serde(rename = "move")]
    pub mv: Move,
    pub score: i32,
}

/// Result of searching every candidate move of a position.
#[derive(Debug, Clone)]
pub struct Analysis {
    candidates: ArrayVec<ScoredMove, CELL_COUNT>,
    best: Option<ScoredMove>,
    nodes: u64,
}

impl Analysis {
    /// Candidate moves in row-major order.
    #[must_use]
    pub fn candidates(&self) -> &[ScoredMove] {
        &self.candidates
    }

    /// The first candidate with the highest score.
    #[must_use]
    pub fn best(&self) -> Option<ScoredMove> {
        self.best
    }

    #[must_use]
    pub fn best_move(&self) -> Option<Move> {
        self.best.map(|best| best.mv)
    }

    /// Number of positions visited by the search.
    #[must_use]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

/// Full-depth minimax search on behalf of one mark.
///
/// # Example
///
/// ```
/// use tictactoe_engine::{Board, Mark, Minimax, Move};
///
/// let board: Board = "X__/___/___".parse().unwrap();
/// let minimax = Minimax::new(Mark::O);
/// assert_eq!(minimax.best_move(&board), Some(Move::CENTER));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Minimax {
    computer: Mark,
}

impl Minimax {
    #[must_use]
    pub fn new(computer: Mark) -> Self {
        Self { computer }
    }

    #[must_use]
    pub fn computer(&self) -> Mark {
        self.computer
    }

    #[must_use]
    pub fn opponent(&self) -> Mark {
        self.computer.opponent()
    }

    /// Chooses the computer's move.
    ///
    /// Returns `None` if the board has no empty cell. Ties between equally
    /// scored moves keep the first one in row-major order.
    #[must_use]
    pub fn best_move(&self, board: &Board) -> Option<Move> {
        self.analyze(board).best_move()
    }

    /// Scores every empty cell as the computer's next move.
    #[must_use]
    pub fn analyze(&self, board: &Board) -> Analysis {
        let mut nodes = 0;
        let mut candidates = ArrayVec::new();
        let mut best: Option<ScoredMove> = None;

        for mv in board.empty_cells() {
            let mut next = *board;
            next.place(mv, self.computer);
            let score = self.search(&next, 1, false, &mut nodes);
            trace!(computer = %self.computer, %mv, score, "scored candidate");

            let candidate = ScoredMove { mv, score };
            if best.is_none_or(|best| score > best.score) {
                best = Some(candidate);
            }
            candidates.push(candidate);
        }

        debug!(
            computer = %self.computer,
            nodes,
            best = ?best,
            "minimax search finished"
        );
        Analysis {
            candidates,
            best,
            nodes,
        }
    }

    /// Scores a position from the computer's point of view.
    ///
    /// `maximizing` tells whose turn it is: the computer's when true, the
    /// opponent's when false. `depth` is the number of plies already played
    /// since the search root.
    #[must_use]
    pub fn minimax(&self, board: &Board, depth: i32, maximizing: bool) -> i32 {
        let mut nodes = 0;
        self.search(board, depth, maximizing, &mut nodes)
    }

    fn search(&self, board: &Board, depth: i32, maximizing: bool, nodes: &mut u64) -> i32 {
        *nodes += 1;

        if let Some(winner) = board.check_win() {
            return if winner == self.computer {
                WIN_SCORE - depth
            } else {
                depth - WIN_SCORE
            };
        }
        if board.is_full() {
            return 0;
        }

        let mark = if maximizing {
            self.computer
        } else {
            self.opponent()
        };
        let scores = board.empty_cells().into_iter().map(|mv| {
            let mut next = *board;
            next.place(mv, mark);
            self.search(&next, depth + 1, !maximizing, nodes)
        });

        // The board is not full, so there is at least one score.
        if maximizing {
            scores.max().unwrap_or(0)
        } else {
            scores.min().unwrap_or(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    fn mv(row: usize, column: usize) -> Move {
        Move::new(row, column).unwrap()
    }

    #[test]
    fn test_terminal_scores_depend_on_depth() {
        let x_wins = board("XXX/OO_/___");
        assert_eq!(Minimax::new(Mark::X).minimax(&x_wins, 3, true), 7);
        assert_eq!(Minimax::new(Mark::O).minimax(&x_wins, 3, true), -7);
        assert_eq!(Minimax::new(Mark::X).minimax(&x_wins, 1, false), 9);

        let draw = board("XOX/OXO/OXO");
        assert_eq!(Minimax::new(Mark::X).minimax(&draw, 5, false), 0);
    }

    #[test]
    fn test_takes_immediate_win() {
        let board = board("XOX/OXO/___");
        let minimax = Minimax::new(Mark::X);
        let analysis = minimax.analyze(&board);

        let best = analysis.best().unwrap();
        assert_eq!(best.mv, mv(2, 0));
        assert_eq!(best.score, WIN_SCORE - 1);

        let after = board.with_move(best.mv, Mark::X).unwrap();
        assert_eq!(after.check_win(), Some(Mark::X));
    }

    #[test]
    fn test_prefers_winning_now_over_blocking() {
        let board = board("XX_/OO_/___");
        let analysis = Minimax::new(Mark::O).analyze(&board);
        assert_eq!(analysis.best_move(), Some(mv(1, 2)));
        assert_eq!(analysis.best().unwrap().score, WIN_SCORE - 1);
    }

    #[test]
    fn test_blocks_opponent_line() {
        let board = board("XX_/_O_/___");
        assert_eq!(Minimax::new(Mark::O).best_move(&board), Some(mv(0, 2)));
    }

    #[test]
    fn test_answers_corner_opening_with_center() {
        let board = board("X__/___/___");
        assert_eq!(Minimax::new(Mark::O).best_move(&board), Some(Move::CENTER));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = board("XOX/OXO/OXO");
        let analysis = Minimax::new(Mark::O).analyze(&board);
        assert_eq!(analysis.best_move(), None);
        assert!(analysis.candidates().is_empty());
        assert_eq!(analysis.nodes(), 0);
    }

    /// Ongoing positions reachable in legal play from either first mark,
    /// paired with the mark to move.
    fn reachable_positions() -> HashSet<(Board, Mark)> {
        fn visit(board: Board, to_move: Mark, seen: &mut HashSet<(Board, Mark)>) {
            if !board.result().is_ongoing() || !seen.insert((board, to_move)) {
                return;
            }
            for mv in board.empty_cells() {
                let next = board.with_move(mv, to_move).unwrap();
                visit(next, to_move.opponent(), seen);
            }
        }

        let mut seen = HashSet::new();
        for first in Mark::ALL {
            visit(Board::EMPTY, first, &mut seen);
        }
        seen
    }

    #[test]
    fn test_best_move_is_always_empty() {
        let positions = reachable_positions();
        assert!(positions.len() > 5_000);
        for (board, to_move) in positions {
            let best = Minimax::new(to_move).best_move(&board).unwrap();
            assert!(board.cell(best).is_empty(), "{to_move} to move:\n{board}{best} is occupied");
        }
    }

    #[test]
    fn test_candidates_cover_every_empty_cell() {
        let board = board("XO_/_X_/__O");
        let analysis = Minimax::new(Mark::X).analyze(&board);
        let moves: Vec<_> = analysis.candidates().iter().map(|c| c.mv).collect();
        assert_eq!(moves.as_slice(), board.empty_cells().as_slice());

        let max = analysis.candidates().iter().map(|c| c.score).max();
        assert_eq!(analysis.best().map(|b| b.score), max);
        assert!(analysis.nodes() >= 5);
    }

    #[test]
    fn test_search_is_deterministic() {
        let board = board("X___O____");
        let minimax = Minimax::new(Mark::X);
        let first = minimax.best_move(&board);
        for _ in 0..3 {
            assert_eq!(minimax.best_move(&board), first);
        }
    }
}
