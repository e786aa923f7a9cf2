use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Frame;
use tictactoe_engine::{GameSession, Player};

pub use self::{play::PlayScreen, setup::SetupScreen};

mod play;
mod setup;

/// Screen transition result from event handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenTransition {
    Stay,
    /// Setup is done, start a game for this player.
    Start(Player),
    Exit,
}

#[derive(Debug)]
pub enum Screen {
    Setup(SetupScreen),
    Play(PlayScreen),
}

impl Screen {
    pub fn draw(&self, frame: &mut Frame<'_>) {
        match self {
            Screen::Setup(screen) => screen.draw(frame),
            Screen::Play(screen) => screen.draw(frame),
        }
    }

    pub fn handle_event(&mut self, event: &Event) -> ScreenTransition {
        let Some(key) = key_press(event) else {
            return ScreenTransition::Stay;
        };
        if is_interrupt(key) {
            return ScreenTransition::Exit;
        }
        match self {
            Screen::Setup(screen) => screen.handle_key(key),
            Screen::Play(screen) => screen.handle_key(key),
        }
    }

    pub fn session(&self) -> Option<&GameSession> {
        match self {
            Screen::Setup(_) => None,
            Screen::Play(screen) => Some(screen.session()),
        }
    }
}

fn key_press(event: &Event) -> Option<KeyEvent> {
    event
        .as_key_event()
        .filter(|key| key.kind == KeyEventKind::Press)
}

fn is_interrupt(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}
