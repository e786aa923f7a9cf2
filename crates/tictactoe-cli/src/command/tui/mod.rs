use std::io::{self, Write as _};

use tictactoe_engine::GameResult;

use crate::command::{PlayerArg, tui::app::PlayApp};

mod app;
mod screens;

pub(crate) fn run(arg: &PlayerArg) -> anyhow::Result<()> {
    let PlayerArg { name, mark } = arg;

    let mut app = PlayApp::new(name.clone(), *mark);
    crate::tui::run(&mut app)?;

    // The alternate screen is gone now; leave the final position in the scrollback.
    let mut stdout = io::stdout().lock();
    match app.session() {
        Some(session) if session.result().is_terminal() => {
            match session.result() {
                GameResult::Win(mark) => writeln!(stdout, "{mark} wins!")?,
                GameResult::Draw => writeln!(stdout, "Board is full! It's a tie!")?,
                GameResult::Ongoing => {}
            }
            writeln!(stdout, "{}", session.board())?;
        }
        _ => writeln!(stdout, "Exiting game ...")?,
    }
    Ok(())
}
