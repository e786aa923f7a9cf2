use std::io::{self, Write};

use tictactoe_engine::{GameResult, Mark, SelfPlayRecord, self_play};
use tracing::info;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SelfPlayArg {
    /// Mark that moves first
    #[clap(long, default_value_t = Mark::X)]
    first: Mark,
}

pub(crate) fn run(arg: &SelfPlayArg) -> anyhow::Result<()> {
    let SelfPlayArg { first } = arg;

    let record = self_play(*first);
    info!(
        %first,
        plies = record.moves().len(),
        winner = ?record.result().winner(),
        "self-play game finished"
    );
    let mut stdout = io::stdout().lock();
    write_record(&mut stdout, &record)?;
    Ok(())
}

fn write_record<W>(out: &mut W, record: &SelfPlayRecord) -> io::Result<()>
where
    W: Write,
{
    for (i, (mark, mv)) in record.moves().iter().enumerate() {
        writeln!(out, "{:>2}. {mark} plays on {mv}.", i + 1)?;
    }
    writeln!(out)?;
    write!(out, "{}", record.board())?;
    match record.result() {
        GameResult::Win(mark) => writeln!(out, "{mark} wins!"),
        GameResult::Draw => writeln!(out, "Board is full! It's a tie!"),
        GameResult::Ongoing => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_output() {
        let record = self_play(Mark::O);
        let mut out = Vec::new();
        write_record(&mut out, &record).unwrap();
        let output = String::from_utf8(out).unwrap();

        assert!(output.starts_with(" 1. O plays on "));
        assert!(output.contains(" 8. X plays on "));
        assert!(output.contains(" 9. O plays on "));
        assert!(output.ends_with("Board is full! It's a tie!\n"));
    }
}
