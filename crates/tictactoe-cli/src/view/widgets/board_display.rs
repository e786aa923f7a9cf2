use std::iter;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt, Widget},
};
use tictactoe_engine::{BOARD_SIZE, Board, Move};

use crate::view::widgets::CellDisplay;

const GRID_CELLS: u16 = 3;
const _: () = assert!(GRID_CELLS as usize == BOARD_SIZE);

#[derive(Debug)]
pub struct BoardDisplay<'a> {
    board: &'a Board,
    cursor: Option<Move>,
    last_move: Option<Move>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            cursor: None,
            last_move: None,
            block: None,
        }
    }

    pub fn cursor(self, cursor: Move) -> Self {
        Self {
            cursor: Some(cursor),
            ..self
        }
    }

    pub fn last_move(self, last_move: Option<Move>) -> Self {
        Self { last_move, ..self }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        GRID_CELLS * CellDisplay::width()
            + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        GRID_CELLS * CellDisplay::height()
            + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let col_constraints = (0..BOARD_SIZE).map(|_| Constraint::Length(CellDisplay::width()));
        let row_constraints = (0..BOARD_SIZE).map(|_| Constraint::Length(CellDisplay::height()));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints);

        let grid_cells = area
            .layout::<BOARD_SIZE>(&vertical)
            .into_iter()
            .map(|row| row.layout::<BOARD_SIZE>(&horizontal));

        for (grid_row, moves) in iter::zip(grid_cells, Move::ALL.chunks_exact(BOARD_SIZE)) {
            for (grid_cell, mv) in iter::zip(grid_row, moves.iter().copied()) {
                let mut display = CellDisplay::from_cell(self.board.cell(mv));
                if self.last_move == Some(mv) {
                    display = display.last_move();
                }
                if self.cursor == Some(mv) {
                    display = display.cursor();
                }
                display.render(grid_cell, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_marks_in_grid() {
        let board: Board = "X__/_O_/___".parse().unwrap();
        let display = BoardDisplay::new(&board).cursor(Move::CENTER);
        let area = Rect::new(0, 0, display.width(), display.height());
        let mut buf = Buffer::empty(area);
        display.render(area, &mut buf);

        // Marks sit in the middle of each 7x3 cell.
        assert_eq!(buf[(3, 1)].symbol(), "X");
        assert_eq!(buf[(10, 4)].symbol(), "O");
        assert_eq!(buf[(17, 7)].symbol(), "·");
        // Cursor uses a thick border.
        assert_eq!(buf[(7, 3)].symbol(), "┏");
        assert_eq!(buf[(0, 0)].symbol(), "┌");
    }
}
