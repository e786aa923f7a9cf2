use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    text::{Line, Text},
    widgets::{Block as BlockWidget, Paragraph},
};
use tictactoe_engine::{GameResult, GameSession, Move, PlayError, Player, Turn};
use tracing::info;

use crate::{
    command::tui::screens::ScreenTransition,
    view::widgets::{BoardDisplay, style},
};

#[derive(Debug)]
pub struct PlayScreen {
    session: GameSession,
    cursor: Move,
    messages: Vec<String>,
}

impl PlayScreen {
    pub fn new(player: Player) -> Self {
        let greeting = format!(
            "Hello {}, your symbol is {}.",
            player.name(),
            player.mark()
        );
        Self {
            session: GameSession::new(player),
            cursor: Move::CENTER,
            messages: vec![greeting],
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        let is_playing = self.session.result().is_ongoing();
        let step = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return ScreenTransition::Exit,
            KeyCode::Enter if !is_playing => return ScreenTransition::Exit,
            KeyCode::Enter | KeyCode::Char(' ') if is_playing => {
                self.play_at_cursor();
                return ScreenTransition::Stay;
            }
            KeyCode::Left | KeyCode::Char('h') => (0, -1),
            KeyCode::Right | KeyCode::Char('l') => (0, 1),
            KeyCode::Up | KeyCode::Char('k') => (-1, 0),
            KeyCode::Down | KeyCode::Char('j') => (1, 0),
            _ => return ScreenTransition::Stay,
        };
        if is_playing && let Some(cursor) = self.cursor.offset(step.0, step.1) {
            self.cursor = cursor;
        }
        ScreenTransition::Stay
    }

    fn play_at_cursor(&mut self) {
        match self.session.play(self.cursor) {
            Ok(turn) => self.messages = self.describe(&turn),
            Err(PlayError::CellOccupied(_)) => {
                self.messages = vec!["You cannot play here.".to_owned()];
            }
            Err(PlayError::GameOver) => {}
        }
    }

    fn describe(&self, turn: &Turn) -> Vec<String> {
        let mut messages = vec![format!(
            ">> {} plays on {}.",
            self.session.player().name(),
            turn.player_move()
        )];
        if let Some(reply) = turn.computer_move() {
            messages.push(format!(">> Computer plays on {reply}."));
        }
        match turn.result() {
            GameResult::Ongoing => {}
            GameResult::Win(mark) => messages.push(format!("{mark} wins!")),
            GameResult::Draw => messages.push("Board is full! It's a tie!".to_owned()),
        }
        if turn.result().is_terminal() {
            info!(result = %turn.result(), "game finished");
        }
        messages
    }

    pub fn draw(&self, frame: &mut Frame<'_>) {
        let player = self.session.player();
        let title = format!(
            " {} ({}) vs Computer ({}) ",
            player.name(),
            player.mark(),
            self.session.computer_mark()
        );
        let mut board_display = BoardDisplay::new(self.session.board())
            .last_move(self.session.last_computer_move())
            .block(
                BlockWidget::bordered()
                    .title(Line::styled(title, style::TITLE).centered())
                    .border_style(style::BORDER),
            );
        if self.session.result().is_ongoing() {
            board_display = board_display.cursor(self.cursor);
        }

        let messages = Paragraph::new(
            self.messages
                .iter()
                .map(|message| Line::styled(message.as_str(), style::MESSAGE))
                .collect::<Vec<_>>(),
        )
        .centered();

        let help_text = if self.session.result().is_ongoing() {
            "Controls: ← ↑ ↓ → / h j k l (Move) | Enter/Space (Play) | Q (Quit)"
        } else {
            "Controls: Enter/Q (Quit)"
        };
        let help_text = Text::from(help_text).style(style::HELP).centered();

        let width = board_display.width().max(36);
        let [board_area, message_area, help_area] = Layout::vertical([
            Constraint::Length(board_display.height()),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas::<3>(frame.area());
        let [board_area] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas::<1>(board_area);

        frame.render_widget(board_display, board_area);
        frame.render_widget(messages, message_area);
        frame.render_widget(help_text, help_area);
    }
}
