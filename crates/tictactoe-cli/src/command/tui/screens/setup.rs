use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    text::{Line, Span, Text},
    widgets::{Block as BlockWidget, Paragraph},
};
use tictactoe_engine::{Mark, Player};

use crate::{command::tui::screens::ScreenTransition, view::widgets::style};

const MAX_NAME_LEN: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Mark,
}

/// Asks for the player's name and symbol.
#[derive(Debug)]
pub struct SetupScreen {
    name: String,
    mark: Mark,
    focus: Field,
    error: Option<&'static str>,
}

impl SetupScreen {
    pub fn new(name: Option<String>, mark: Option<Mark>) -> Self {
        Self {
            name: name.unwrap_or_default(),
            mark: mark.unwrap_or(Mark::X),
            focus: Field::Name,
            error: None,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match (self.focus, key.code) {
            (_, KeyCode::Esc) | (Field::Mark, KeyCode::Char('q')) => return ScreenTransition::Exit,
            (_, KeyCode::Enter) => return self.confirm(),
            (_, KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down) => {
                self.focus = match self.focus {
                    Field::Name => Field::Mark,
                    Field::Mark => Field::Name,
                };
            }
            (Field::Name, KeyCode::Backspace) => _ = self.name.pop(),
            (Field::Name, KeyCode::Char(c)) if self.name.chars().count() < MAX_NAME_LEN => {
                self.name.push(c);
                self.error = None;
            }
            (Field::Mark, KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')) => {
                self.mark = self.mark.opponent();
            }
            (Field::Mark, KeyCode::Char(c)) => {
                if let Some(mark) = Mark::from_char(c) {
                    self.mark = mark;
                }
            }
            _ => {}
        }
        ScreenTransition::Stay
    }

    fn confirm(&mut self) -> ScreenTransition {
        let name = self.name.trim();
        if name.is_empty() {
            self.error = Some("Please enter your name.");
            self.focus = Field::Name;
            return ScreenTransition::Stay;
        }
        ScreenTransition::Start(Player::new(name, self.mark))
    }

    pub fn draw(&self, frame: &mut Frame<'_>) {
        let label = |field: Field| {
            if self.focus == field {
                style::FOCUSED
            } else {
                style::MESSAGE
            }
        };
        let mark_span = |mark: Mark| {
            let text = if mark == self.mark {
                format!("[{mark}]")
            } else {
                format!(" {mark} ")
            };
            let style = match mark {
                Mark::X => style::X_MARK,
                Mark::O => style::O_MARK,
            };
            Span::styled(text, style)
        };

        let mut lines = vec![
            Line::from(vec![
                Span::styled("Name:   ", label(Field::Name)),
                Span::raw(self.name.as_str()),
                Span::styled(
                    if self.focus == Field::Name { "_" } else { "" },
                    style::FOCUSED,
                ),
            ]),
            Line::default(),
            Line::from(vec![
                Span::styled("Symbol: ", label(Field::Mark)),
                mark_span(Mark::X),
                Span::raw(" "),
                mark_span(Mark::O),
            ]),
            Line::default(),
        ];
        if let Some(error) = self.error {
            lines.push(Line::styled(error, style::O_MARK));
        }

        let form = Paragraph::new(lines).block(
            BlockWidget::bordered()
                .title(Line::styled(" Tic-tac-toe ", style::TITLE).centered())
                .border_style(style::BORDER),
        );
        let help_text = Text::from(
            "Controls: Tab (Switch field) | ← → (Change symbol) | Enter (Start) | Esc (Quit)",
        )
        .style(style::HELP)
        .centered();

        let area = frame
            .area()
            .centered(Constraint::Length(44), Constraint::Length(9));
        let [form_area, help_area] =
            Layout::vertical([Constraint::Length(8), Constraint::Length(1)]).areas::<2>(area);
        frame.render_widget(form, form_area);
        frame.render_widget(help_text, help_area);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;

    fn press(screen: &mut SetupScreen, code: KeyCode) -> ScreenTransition {
        screen.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(screen: &mut SetupScreen, text: &str) {
        for c in text.chars() {
            assert_eq!(press(screen, KeyCode::Char(c)), ScreenTransition::Stay);
        }
    }

    #[test]
    fn test_name_and_mark_selection() {
        let mut screen = SetupScreen::new(None, None);
        type_text(&mut screen, "Adx");
        press(&mut screen, KeyCode::Backspace);
        type_text(&mut screen, "a");
        press(&mut screen, KeyCode::Tab);
        press(&mut screen, KeyCode::Right);

        assert_eq!(
            press(&mut screen, KeyCode::Enter),
            ScreenTransition::Start(Player::new("Ada", Mark::O))
        );
    }

    #[test]
    fn test_letters_pick_mark_when_focused() {
        let mut screen = SetupScreen::new(Some("Bob".to_owned()), None);
        press(&mut screen, KeyCode::Down);
        press(&mut screen, KeyCode::Char('o'));
        press(&mut screen, KeyCode::Char('z'));
        assert_eq!(
            press(&mut screen, KeyCode::Enter),
            ScreenTransition::Start(Player::new("Bob", Mark::O))
        );
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let mut screen = SetupScreen::new(Some("   ".to_owned()), Some(Mark::O));
        assert_eq!(press(&mut screen, KeyCode::Enter), ScreenTransition::Stay);
        assert!(screen.error.is_some());

        type_text(&mut screen, "Eve");
        assert!(screen.error.is_none());
        assert_eq!(
            press(&mut screen, KeyCode::Enter),
            ScreenTransition::Start(Player::new("Eve", Mark::O))
        );
    }

    #[test]
    fn test_q_is_text_in_name_field() {
        let mut screen = SetupScreen::new(None, None);
        assert_eq!(press(&mut screen, KeyCode::Char('q')), ScreenTransition::Stay);
        press(&mut screen, KeyCode::Tab);
        assert_eq!(press(&mut screen, KeyCode::Char('q')), ScreenTransition::Exit);
        assert_eq!(press(&mut screen, KeyCode::Esc), ScreenTransition::Exit);
    }
}
