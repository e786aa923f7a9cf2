use std::io::{self, BufRead, Write};

use tictactoe_engine::{GameResult, GameSession, Mark, Move, PlayError, Player};
use tracing::{debug, info};

use crate::command::PlayerArg;

const NAME_QUESTION: &str = "Hello, what's your name ?";
const MARK_QUESTION: &str = "Choose a symbol between \"X\" and \"O\".";
const MOVE_QUESTION: &str = "Enter a line and a column to play, comma separated !";

/// How a text game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Finished(GameResult),
    /// Input was closed before the game ended.
    Cancelled,
}

pub(crate) fn run(arg: &PlayerArg) -> anyhow::Result<()> {
    let mut shell = TextShell::new(io::stdin().lock(), io::stdout().lock());
    let outcome = shell.play(arg)?;
    info!(?outcome, "text game ended");
    Ok(())
}

#[derive(Debug)]
struct TextShell<R, W> {
    input: R,
    output: W,
}

impl<R, W> TextShell<R, W>
where
    R: BufRead,
    W: Write,
{
    fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn play(&mut self, arg: &PlayerArg) -> io::Result<Outcome> {
        let outcome = match self.setup(arg)? {
            Some(player) => self.run_game(&mut GameSession::new(player))?,
            None => Outcome::Cancelled,
        };
        if outcome == Outcome::Cancelled {
            writeln!(self.output, "\nExiting game ...")?;
        }
        self.output.flush()?;
        Ok(outcome)
    }

    /// Prints `question` and reads one line; `None` on end of input.
    fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        writeln!(self.output, "{question}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn setup(&mut self, arg: &PlayerArg) -> io::Result<Option<Player>> {
        let name = match &arg.name {
            Some(name) => name.clone(),
            None => match self.ask(NAME_QUESTION)? {
                Some(answer) => answer.trim().to_owned(),
                None => return Ok(None),
            },
        };

        let mark = match arg.mark {
            Some(mark) => mark,
            None => loop {
                let Some(answer) = self.ask(MARK_QUESTION)? else {
                    return Ok(None);
                };
                match answer.parse::<Mark>() {
                    Ok(mark) => break mark,
                    Err(e) => {
                        debug!(%e, "rejected symbol");
                        writeln!(self.output, "Your symbol need to be either O or X.")?;
                    }
                }
            },
        };

        writeln!(self.output, "Hello {name}, your symbol is {mark}.\n")?;
        writeln!(self.output, "How to play ?")?;
        writeln!(
            self.output,
            "You need to enter the line and the column on which you want to play. We start indexes from 1."
        )?;
        writeln!(
            self.output,
            "Example: \"1, 3\" to play on line 1, column 3.\n"
        )?;
        Ok(Some(Player::new(name, mark)))
    }

    fn run_game(&mut self, session: &mut GameSession) -> io::Result<Outcome> {
        writeln!(self.output, "{}", session.board())?;

        loop {
            let Some(answer) = self.ask(MOVE_QUESTION)? else {
                return Ok(Outcome::Cancelled);
            };
            let Some((line, column)) = parse_coordinates(&answer) else {
                continue;
            };
            let Ok(mv) = Move::from_one_based(line, column) else {
                writeln!(self.output, "Invalid values !")?;
                continue;
            };

            let turn = match session.play(mv) {
                Ok(turn) => turn,
                Err(PlayError::CellOccupied(_)) => {
                    writeln!(self.output, "You cannot play here.")?;
                    continue;
                }
                Err(PlayError::GameOver) => return Ok(Outcome::Finished(session.result())),
            };

            writeln!(self.output, ">> {} plays on {mv}.", session.player().name())?;
            if let Some(reply) = turn.computer_move() {
                writeln!(self.output, ">> Computer plays on {reply}.")?;
            }
            match turn.result() {
                GameResult::Ongoing => {}
                GameResult::Win(mark) => writeln!(self.output, "{mark} wins!")?,
                GameResult::Draw => writeln!(self.output, "Board is full! It's a tie!")?,
            }
            writeln!(self.output, "{}", session.board())?;

            if turn.result().is_terminal() {
                return Ok(Outcome::Finished(turn.result()));
            }
        }
    }
}

/// Parses `"line, column"`; any other shape is ignored by the caller.
fn parse_coordinates(input: &str) -> Option<(usize, usize)> {
    let (line, column) = input.trim().split_once(',')?;
    Some((line.trim().parse().ok()?, column.trim().parse().ok()?))
}
