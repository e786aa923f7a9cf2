//! Minimal terminal UI runtime.
//!
//! Nothing in a tic-tac-toe game changes without user input, so there are no
//! tick events: the runtime redraws, then blocks until the next terminal event.

use crossterm::event::{self, Event};
use ratatui::{DefaultTerminal, Frame};

/// Trait for TUI applications.
///
/// Applications executed by [`run`] must implement this trait.
pub trait App {
    /// Returns whether the application should exit.
    fn should_exit(&self) -> bool;

    /// Handles terminal events (key input, resize, etc.).
    fn handle_event(&mut self, event: &Event);

    /// Draws the screen (called before waiting for each event).
    fn draw(&self, frame: &mut Frame);
}

/// Runs `app` until [`App::should_exit`] returns true.
///
/// The terminal is set up before the first draw and restored afterwards, also on error.
pub fn run<A>(app: &mut A) -> anyhow::Result<()>
where
    A: App,
{
    ratatui::run(|terminal| event_loop(terminal, app))
}

fn event_loop<A>(terminal: &mut DefaultTerminal, app: &mut A) -> anyhow::Result<()>
where
    A: App,
{
    while !app.should_exit() {
        terminal.draw(|f| app.draw(f))?;
        let event = event::read()?;
        app.handle_event(&event);
    }
    Ok(())
}
