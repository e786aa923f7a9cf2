use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tictactoe_engine::Mark;

use self::{self_play::SelfPlayArg, solve::SolveArg};

mod self_play;
mod solve;
mod text;
mod tui;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Write logs to this file instead of stderr (filter with RUST_LOG)
    #[clap(long, global = true)]
    log_file: Option<PathBuf>,
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play against the computer with line-based prompts
    Text(#[clap(flatten)] PlayerArg),
    /// Play against the computer in a full-screen terminal UI
    Tui(#[clap(flatten)] PlayerArg),
    /// Print the computer's best move for a position
    Solve(#[clap(flatten)] SolveArg),
    /// Let the computer play against itself
    SelfPlay(#[clap(flatten)] SelfPlayArg),
}

/// Answers for the setup questions; missing ones are asked interactively.
#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PlayerArg {
    /// Your name
    #[clap(long)]
    name: Option<String>,
    /// Your symbol (X or O)
    #[clap(long)]
    mark: Option<Mark>,
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    crate::logging::init(args.log_file.as_deref())?;

    match args.mode.unwrap_or(Mode::Text(PlayerArg::default())) {
        Mode::Text(arg) => text::run(&arg)?,
        Mode::Tui(arg) => tui::run(&arg)?,
        Mode::Solve(arg) => solve::run(&arg)?,
        Mode::SelfPlay(arg) => self_play::run(&arg)?,
    }
    Ok(())
}
