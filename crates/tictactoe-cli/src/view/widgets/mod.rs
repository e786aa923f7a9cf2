use ratatui::{layout::Rect, widgets::Block as BlockWidget};

pub use self::{board_display::*, cell_display::*};

mod board_display;
mod cell_display;

pub mod style {
    use ratatui::style::{Color, Modifier, Style};

    pub const EMPTY: Style = Style::new().fg(Color::DarkGray);
    pub const X_MARK: Style = Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD);
    pub const O_MARK: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);
    pub const LAST_MOVE: Modifier = Modifier::UNDERLINED;

    pub const BORDER: Style = Style::new().fg(Color::DarkGray);
    pub const CURSOR_BORDER: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);

    pub const HELP: Style = Style::new().fg(Color::DarkGray);
    pub const TITLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    pub const MESSAGE: Style = Style::new().fg(Color::White);
    pub const FOCUSED: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
}

fn block_vertical_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.height - inner_rect.height
}

fn block_horizontal_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.width - inner_rect.width
}
