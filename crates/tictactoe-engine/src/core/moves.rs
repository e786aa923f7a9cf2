use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of rows and columns of the board.
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A cell coordinate on the board.
///
/// Coordinates are 0-based internally. Users see 1-based line and column
/// numbers, see [`Move::from_one_based`] and the [`Display`](fmt::Display)
/// implementation.
///
/// A `Move` is always inside the board: constructors reject out-of-range
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMove")]
pub struct Move {
    row: usize,
    column: usize,
}

#[derive(Deserialize)]
struct RawMove {
    row: usize,
    column: usize,
}

impl TryFrom<RawMove> for Move {
    type Error = MoveOutOfRangeError;

    fn try_from(raw: RawMove) -> Result<Self, Self::Error> {
        Self::new(raw.row, raw.column)
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("coordinates ({row}, {column}) are outside the board")]
pub struct MoveOutOfRangeError {
    row: usize,
    column: usize,
}

impl Move {
    /// All cells in row-major order.
    pub const ALL: [Self; CELL_COUNT] = {
        let mut all = [Self { row: 0, column: 0 }; CELL_COUNT];
        let mut i = 0;
        while i < CELL_COUNT {
            all[i] = Self {
                row: i / BOARD_SIZE,
                column: i % BOARD_SIZE,
            };
            i += 1;
        }
        all
    };

    /// The center cell.
    pub const CENTER: Self = Self { row: 1, column: 1 };

    pub fn new(row: usize, column: usize) -> Result<Self, MoveOutOfRangeError> {
        if row >= BOARD_SIZE || column >= BOARD_SIZE {
            return Err(MoveOutOfRangeError { row, column });
        }
        Ok(Self { row, column })
    }

    /// Creates a move from the 1-based line/column pair typed by a user.
    pub fn from_one_based(line: usize, column: usize) -> Result<Self, MoveOutOfRangeError> {
        match (line.checked_sub(1), column.checked_sub(1)) {
            (Some(row), Some(col)) => Self::new(row, col).map_err(|_| MoveOutOfRangeError {
                row: line,
                column,
            }),
            _ => Err(MoveOutOfRangeError { row: line, column }),
        }
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    #[must_use]
    pub const fn column(self) -> usize {
        self.column
    }

    /// Returns the move shifted by the given offsets, or `None` if it would leave the board.
    #[must_use]
    pub fn offset(self, d_row: isize, d_column: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let column = self.column.checked_add_signed(d_column)?;
        Self::new(row, column).ok()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.row + 1, self.column + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_row_major() {
        let coords: Vec<_> = Move::ALL.iter().map(|m| (m.row(), m.column())).collect();
        assert_eq!(
            coords,
            [
                (0, 0),
                (0, 1),
                (0, 2),
                (1, 0),
                (1, 1),
                (1, 2),
                (2, 0),
                (2, 1),
                (2, 2),
            ]
        );
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(Move::new(3, 0).is_err());
        assert!(Move::new(0, 3).is_err());
        assert!(Move::new(2, 2).is_ok());
    }

    #[test]
    fn test_one_based_conversion() {
        let mv = Move::from_one_based(1, 3).unwrap();
        assert_eq!((mv.row(), mv.column()), (0, 2));
        assert!(Move::from_one_based(0, 1).is_err());
        assert!(Move::from_one_based(1, 0).is_err());
        assert!(Move::from_one_based(4, 1).is_err());
    }

    #[test]
    fn test_deserialize_checks_range() {
        let mv: Move = serde_json::from_str(r#"{"row":2,"column":1}"#).unwrap();
        assert_eq!(mv, Move::new(2, 1).unwrap());
        assert_eq!(serde_json::to_string(&mv).unwrap(), r#"{"row":2,"column":1}"#);

        let err = serde_json::from_str::<Move>(r#"{"row":7,"column":0}"#).unwrap_err();
        assert!(err.to_string().contains("outside the board"), "{err}");
        assert!(serde_json::from_str::<Move>(r#"{"row":0,"column":3}"#).is_err());
    }

    #[test]
    fn test_display_is_one_based() {
        assert_eq!(Move::CENTER.to_string(), "line 2, column 2");
    }

    #[test]
    fn test_offset_stays_on_board() {
        let corner = Move::new(0, 0).unwrap();
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
        assert_eq!(corner.offset(1, 1), Some(Move::CENTER));
        assert_eq!(Move::new(2, 2).unwrap().offset(1, 0), None);
    }
}
