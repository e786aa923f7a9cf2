use std::{fmt, str::FromStr};

use arrayvec::ArrayVec;

use crate::CellOccupiedError;

use super::{
    game_result::GameResult,
    mark::Mark,
    moves::{BOARD_SIZE, CELL_COUNT, Move},
};

/// A single cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::IsVariant)]
pub enum Cell {
    #[default]
    Empty,
    Marked(Mark),
}

impl Cell {
    #[must_use]
    pub const fn mark(self) -> Option<Mark> {
        match self {
            Self::Empty => None,
            Self::Marked(mark) => Some(mark),
        }
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Empty => '_',
            Self::Marked(mark) => mark.as_char(),
        }
    }
}

type Line = [(usize, usize); BOARD_SIZE];

// Scan order decides which mark is reported when a constructed position has
// more than one complete line: rows, then columns, then diagonals.
const LINES: [Line; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// The 3×3 playing grid.
///
/// The board is a small `Copy` value. Search code explores positions on
/// copies (see [`Board::with_move`]) instead of mutating a shared board.
///
/// # Example
///
/// ```
/// use tictactoe_engine::{Board, GameResult, Mark, Move};
///
/// let mut board = Board::EMPTY;
/// board.apply_move(Move::CENTER, Mark::X).unwrap();
/// assert!(board.apply_move(Move::CENTER, Mark::O).is_err());
/// assert_eq!(board.result(), GameResult::Ongoing);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub const EMPTY: Self = Self {
        cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
    };

    #[must_use]
    pub fn cell(&self, mv: Move) -> Cell {
        self.cells[mv.row()][mv.column()]
    }

    /// Returns the rows of the board, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; BOARD_SIZE]> {
        self.cells.iter()
    }

    /// Returns true iff no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// Returns the mark occupying a complete row, column or diagonal.
    #[must_use]
    pub fn check_win(&self) -> Option<Mark> {
        LINES.iter().find_map(|line| {
            let [first, rest @ ..] = line.map(|(row, col)| self.cells[row][col]);
            let mark = first.mark()?;
            rest.iter().all(|cell| *cell == first).then_some(mark)
        })
    }

    #[must_use]
    pub fn result(&self) -> GameResult {
        if let Some(mark) = self.check_win() {
            GameResult::Win(mark)
        } else if self.is_full() {
            GameResult::Draw
        } else {
            GameResult::Ongoing
        }
    }

    /// Puts `mark` on an empty cell.
    ///
    /// Fails without touching the board if the cell is already occupied.
    pub fn apply_move(&mut self, mv: Move, mark: Mark) -> Result<(), CellOccupiedError> {
        if !self.cell(mv).is_empty() {
            return Err(CellOccupiedError { position: mv });
        }
        self.place(mv, mark);
        Ok(())
    }

    /// Returns a copy of the board with `mark` placed on `mv`.
    pub fn with_move(mut self, mv: Move, mark: Mark) -> Result<Self, CellOccupiedError> {
        self.apply_move(mv, mark)?;
        Ok(self)
    }

    /// Empties a cell, reverting a tentative move.
    pub fn clear_cell(&mut self, mv: Move) {
        self.cells[mv.row()][mv.column()] = Cell::Empty;
    }

    pub(crate) fn place(&mut self, mv: Move, mark: Mark) {
        debug_assert!(self.cell(mv).is_empty(), "{mv} is already occupied");
        self.cells[mv.row()][mv.column()] = Cell::Marked(mark);
    }

    /// Returns the empty cells in row-major order.
    #[must_use]
    pub fn empty_cells(&self) -> ArrayVec<Move, CELL_COUNT> {
        Move::ALL
            .into_iter()
            .filter(|mv| self.cell(*mv).is_empty())
            .collect()
    }

    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.mark() == Some(mark))
            .count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            write!(f, "[")?;
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "'{}'", cell.as_char())?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    #[display("invalid cell {ch:?} at position {index}, expected X, O, _ or .")]
    InvalidCell { ch: char, index: usize },
    #[display("expected 9 cells, got {count}")]
    WrongCellCount { count: usize },
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses nine cells in row-major order.
    ///
    /// Whitespace and `/` are ignored, so `"XOX/OXO/___"` and `"XOXOXO___"` are equivalent.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Self::EMPTY;
        let mut count = 0;
        for ch in s.chars().filter(|c| !c.is_whitespace() && *c != '/') {
            let cell = match ch {
                '_' | '.' => Cell::Empty,
                _ => Cell::Marked(Mark::from_char(ch).ok_or(ParseBoardError::InvalidCell {
                    ch,
                    index: count,
                })?),
            };
            if count < CELL_COUNT {
                board.cells[count / BOARD_SIZE][count % BOARD_SIZE] = cell;
            }
            count += 1;
        }
        if count != CELL_COUNT {
            return Err(ParseBoardError::WrongCellCount { count });
        }
        Ok(board)
    }
}
