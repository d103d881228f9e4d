//! Game management: turn order, captures and the terminal result.
//!
//! The [`Game`] struct owns the single board for a game and adds what a
//! board alone doesn't know:
//! - whose turn it is, with White and Black strictly alternating
//! - the pieces each side has captured
//! - the log of committed moves
//! - whether the game has ended in checkmate

use crate::{Board, GameConfig, GameError, TurnOutcome, TurnReport};
use chess_types::{Colour, MoveRequest, Piece};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    Checkmate { winner: Colour },
}

impl GameResult {
    pub fn winner(&self) -> Colour {
        match self {
            GameResult::Checkmate { winner } => *winner,
        }
    }
}

/// A chess game in progress.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    side_to_move: Colour,
    /// Pieces taken by White, then by Black.
    captured: [Vec<Piece>; 2],
    moves: Vec<TurnReport>,
    result: Option<GameResult>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a game from the standard starting position, White to move.
    pub fn new() -> Self {
        Self::from_board(Board::startpos(), Colour::White)
    }

    /// Creates a game from a placement string, White to move.
    pub fn from_placement(placement: &str) -> Result<Self, GameError> {
        Ok(Self::from_board(Board::from_placement(placement)?, Colour::White))
    }

    /// Creates a game from a loaded configuration.
    pub fn from_config(config: &GameConfig) -> Result<Self, GameError> {
        if !config.first_to_move.is_side() {
            return Err(GameError::InvalidSideToMove(config.first_to_move));
        }
        let board = Board::from_placement_with(&config.start_position, config.orientation)?;
        Ok(Self::from_board(board, config.first_to_move))
    }

    fn from_board(board: Board, side_to_move: Colour) -> Self {
        let mut game = Game {
            board,
            side_to_move,
            captured: [Vec::new(), Vec::new()],
            moves: Vec::new(),
            result: None,
        };
        // A position may be handed over already lost.
        if game.board.king_is_in_check(side_to_move)
            && game.board.check_for_checkmate(side_to_move)
        {
            game.result = Some(GameResult::Checkmate {
                winner: side_to_move.opposite(),
            });
        }
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Colour {
        self.side_to_move
    }

    /// Returns the game result if the game is over.
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    pub fn is_game_over(&self) -> bool {
        self.result.is_some()
    }

    /// Returns true if the side to move is in check.
    pub fn is_check(&self) -> bool {
        self.board.king_is_in_check(self.side_to_move)
    }

    /// Returns the committed moves in order.
    pub fn move_history(&self) -> &[TurnReport] {
        &self.moves
    }

    /// Returns the number of half-moves played.
    pub fn ply_count(&self) -> usize {
        self.moves.len()
    }

    /// Returns the pieces `colour` has taken, in the order they were taken.
    pub fn captured_by(&self, colour: Colour) -> &[Piece] {
        match colour {
            Colour::White => &self.captured[0],
            Colour::Black => &self.captured[1],
            Colour::Blank => &[],
        }
    }

    /// Plays `request` for the side to move.
    ///
    /// On failure nothing changes and the same side moves again. After
    /// checkmate every request fails with [`GameError::GameAlreadyOver`].
    pub fn make_move(&mut self, request: &MoveRequest) -> Result<TurnReport, GameError> {
        if self.result.is_some() {
            return Err(GameError::GameAlreadyOver);
        }

        let report = self.board.play(self.side_to_move, request)?;

        if let Some(piece) = report.captured {
            match self.side_to_move {
                Colour::White => self.captured[0].push(piece),
                Colour::Black => self.captured[1].push(piece),
                Colour::Blank => {}
            }
        }
        if let TurnOutcome::Checkmate { winner } = report.outcome {
            self.result = Some(GameResult::Checkmate { winner });
            tracing::info!(%winner, plies = self.moves.len() + 1, "checkmate");
        }

        self.moves.push(report);
        self.side_to_move = self.side_to_move.opposite();
        Ok(report)
    }
}
