use crossterm::event::Event;
use ratatui::Frame;
use tictactoe_engine::{GameSession, Mark, Player};

use crate::{
    command::tui::screens::{PlayScreen, Screen, ScreenTransition, SetupScreen},
    tui::App,
};

#[derive(Debug)]
pub struct PlayApp {
    screen: Screen,
    is_exiting: bool,
}

impl PlayApp {
    /// Starts on the setup screen unless both answers are already known.
    pub fn new(name: Option<String>, mark: Option<Mark>) -> Self {
        let screen = match (name, mark) {
            (Some(name), Some(mark)) if !name.trim().is_empty() => {
                Screen::Play(PlayScreen::new(Player::new(name.trim(), mark)))
            }
            (name, mark) => Screen::Setup(SetupScreen::new(name, mark)),
        };
        Self {
            screen,
            is_exiting: false,
        }
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.screen.session()
    }
}

impl App for PlayApp {
    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, event: &Event) {
        match self.screen.handle_event(event) {
            ScreenTransition::Stay => {}
            ScreenTransition::Start(player) => {
                self.screen = Screen::Play(PlayScreen::new(player));
            }
            ScreenTransition::Exit => self.is_exiting = true,
        }
    }

    fn draw(&self, frame: &mut Frame) {
        self.screen.draw(frame);
    }
}
