use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block as BlockWidget, BorderType, Paragraph, Widget},
};
use tictactoe_engine::{Cell, Mark};

use crate::view::widgets::style;

/// One square of the board, drawn as a bordered box with the mark centered.
#[derive(Debug)]
pub struct CellDisplay {
    symbol: &'static str,
    style: Style,
    border_type: BorderType,
    border_style: Style,
}

impl CellDisplay {
    pub fn width() -> u16 {
        7
    }

    pub fn height() -> u16 {
        3
    }

    pub fn from_cell(cell: Cell) -> Self {
        let (symbol, style) = match cell {
            Cell::Empty => ("·", style::EMPTY),
            Cell::Marked(Mark::X) => ("X", style::X_MARK),
            Cell::Marked(Mark::O) => ("O", style::O_MARK),
        };
        Self {
            symbol,
            style,
            border_type: BorderType::Plain,
            border_style: style::BORDER,
        }
    }

    /// Draws the cell as the cursor position.
    pub fn cursor(self) -> Self {
        Self {
            border_type: BorderType::Thick,
            border_style: style::CURSOR_BORDER,
            ..self
        }
    }

    /// Draws the cell as the most recent computer move.
    pub fn last_move(self) -> Self {
        Self {
            style: self.style.add_modifier(style::LAST_MOVE),
            ..self
        }
    }
}

impl Widget for CellDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &CellDisplay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let frame = BlockWidget::bordered()
            .border_type(self.border_type)
            .border_style(self.border_style);
        let inner = frame.inner(area);
        frame.render(area, buf);
        Paragraph::new(self.symbol)
            .style(self.style)
            .centered()
            .render(inner, buf);
    }
}
