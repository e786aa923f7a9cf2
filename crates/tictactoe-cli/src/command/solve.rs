use std::io::{self, Write};

use serde::Serialize;
use tictactoe_engine::{Board, GameResult, Mark, Minimax, Move, ScoredMove};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SolveArg {
    /// Position as nine cells of X, O or _ in row-major order, e.g. "XOX/OXO/___"
    board: Board,
    /// Mark of the side to move [default: the mark with fewer cells, X on a tie]
    #[clap(long)]
    to_move: Option<Mark>,
    /// Print the analysis as JSON
    #[clap(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct SolveReport<'a> {
    to_move: Mark,
    result: GameResult,
    winner: Option<Mark>,
    best_move: Option<Move>,
    candidates: &'a [ScoredMove],
    nodes: u64,
}

pub(crate) fn run(arg: &SolveArg) -> anyhow::Result<()> {
    let SolveArg {
        board,
        to_move,
        json,
    } = arg;

    let to_move = to_move.unwrap_or_else(|| side_to_move(board));
    let mut stdout = io::stdout().lock();
    write_report(&mut stdout, board, to_move, *json)
}

fn side_to_move(board: &Board) -> Mark {
    if board.count(Mark::X) > board.count(Mark::O) {
        Mark::O
    } else {
        Mark::X
    }
}

fn write_report<W>(out: &mut W, board: &Board, to_move: Mark, json: bool) -> anyhow::Result<()>
where
    W: Write,
{
    let result = board.result();
    let analysis = if result.is_ongoing() {
        Some(Minimax::new(to_move).analyze(board))
    } else {
        None
    };

    if json {
        let report = SolveReport {
            to_move,
            result,
            winner: result.winner(),
            best_move: analysis.as_ref().and_then(|a| a.best_move()),
            candidates: analysis.as_ref().map_or(&[] as &[_], |a| a.candidates()),
            nodes: analysis.as_ref().map_or(0, |a| a.nodes()),
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        return Ok(());
    }

    write!(out, "{board}")?;
    let Some(analysis) = analysis else {
        writeln!(out, "Game is already over: {result}.")?;
        return Ok(());
    };
    for candidate in analysis.candidates() {
        writeln!(out, "  {}: {:+}", candidate.mv, candidate.score)?;
    }
    if let Some(best) = analysis.best() {
        writeln!(
            out,
            "Best move for {to_move}: {} (score {:+}, {} positions searched)",
            best.mv,
            best.score,
            analysis.nodes()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(board: &str, to_move: Mark, json: bool) -> String {
        let board: Board = board.parse().unwrap();
        let mut out = Vec::new();
        write_report(&mut out, &board, to_move, json).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_report_lists_candidates() {
        let output = report("XOX/OXO/___", Mark::X, false);
        assert!(output.starts_with("['X', 'O', 'X']\n"));
        assert!(output.contains("  line 3, column 1: +9\n"));
        assert!(output.contains("Best move for X: line 3, column 1 (score +9,"));
    }

    #[test]
    fn test_finished_game_is_reported() {
        let output = report("XOX/OXO/OXO", Mark::X, false);
        assert!(output.ends_with("Game is already over: draw.\n"));

        let output = report("XXX/OO_/___", Mark::O, false);
        assert!(output.ends_with("Game is already over: X wins.\n"));
    }

    #[test]
    fn test_json_report() {
        let output = report("X__/___/___", Mark::O, true);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["to_move"], "O");
        assert_eq!(value["result"], "Ongoing");
        assert!(value["winner"].is_null());
        assert_eq!(value["best_move"]["row"], 1);
        assert_eq!(value["best_move"]["column"], 1);
        assert_eq!(value["candidates"].as_array().unwrap().len(), 8);
        assert!(value["candidates"][0]["move"].is_object());
    }

    #[test]
    fn test_side_to_move_follows_mark_counts() {
        let side = |s: &str| side_to_move(&s.parse().unwrap());
        assert_eq!(side("___/___/___"), Mark::X);
        assert_eq!(side("X__/___/___"), Mark::O);
        assert_eq!(side("XO_/___/___"), Mark::X);
        assert_eq!(side("O__/___/___"), Mark::X);
        assert_eq!(side("OX_/_O_/___"), Mark::X);
    }

    #[test]
    fn test_json_report_for_finished_game() {
        let output = report("XXX/OO_/___", Mark::O, true);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["result"]["Win"], "X");
        assert_eq!(value["winner"], "X");
        assert!(value["best_move"].is_null());
        assert_eq!(value["nodes"], 0);
    }
}
