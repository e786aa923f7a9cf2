use tracing::debug;

use crate::{
    PlayError,
    core::{Board, GameResult, Mark, Move},
    search::Minimax,
};

/// The human side of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    mark: Mark,
}

impl Player {
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        Self {
            name: name.into(),
            mark,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn mark(&self) -> Mark {
        self.mark
    }
}

/// What happened during one call to [`GameSession::play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    player_move: Move,
    computer_move: Option<Move>,
    result: GameResult,
}

impl Turn {
    #[must_use]
    pub fn player_move(&self) -> Move {
        self.player_move
    }

    /// The computer's reply, absent when the human's move ended the game.
    #[must_use]
    pub fn computer_move(&self) -> Option<Move> {
        self.computer_move
    }

    #[must_use]
    pub fn result(&self) -> GameResult {
        self.result
    }
}

/// A human vs. computer game.
///
/// The human always moves first; every accepted human move is answered by the
/// computer unless it ended the game.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    player: Player,
    minimax: Minimax,
    result: GameResult,
    last_computer_move: Option<Move>,
}

impl GameSession {
    #[must_use]
    pub fn new(player: Player) -> Self {
        let minimax = Minimax::new(player.mark().opponent());
        Self {
            board: Board::EMPTY,
            player,
            minimax,
            result: GameResult::Ongoing,
            last_computer_move: None,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    #[must_use]
    pub fn computer_mark(&self) -> Mark {
        self.minimax.computer()
    }

    #[must_use]
    pub fn result(&self) -> GameResult {
        self.result
    }

    #[must_use]
    pub fn last_computer_move(&self) -> Option<Move> {
        self.last_computer_move
    }

    /// Plays the human's move and the computer's reply.
    ///
    /// Fails without changing anything if the game is already over or the
    /// cell is occupied.
    pub fn play(&mut self, mv: Move) -> Result<Turn, PlayError> {
        if self.result.is_terminal() {
            return Err(PlayError::GameOver);
        }
        self.board
            .apply_move(mv, self.player.mark())
            .map_err(PlayError::CellOccupied)?;
        self.result = self.board.result();
        debug!(player = self.player.name(), %mv, result = %self.result, "player moved");

        let mut computer_move = None;
        if self.result.is_ongoing()
            && let Some(reply) = self.minimax.best_move(&self.board)
        {
            let computer = self.computer_mark();
            self.board.place(reply, computer);
            self.result = self.board.result();
            self.last_computer_move = Some(reply);
            computer_move = Some(reply);
            debug!(mv = %reply, result = %self.result, "computer moved");
        }

        Ok(Turn {
            player_move: mv,
            computer_move,
            result: self.result,
        })
    }
}
