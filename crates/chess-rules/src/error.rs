//! Error types for board queries, move resolution and game play.

use chess_types::{Colour, PlacementError};
use thiserror::Error;

/// A recoverable failure raised while resolving or applying a move.
///
/// None of these leave the board mutated: any speculative change is rolled
/// back before the error is returned.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RulesError {
    /// A computed coordinate lies off the board. Used to end ray walks.
    #[error("the square ({file}, {rank}) does not exist on the chess board")]
    OutOfBounds { file: i8, rank: i8 },

    /// The move breaks a rule of the current position.
    #[error("{0}")]
    IllegalMove(String),

    /// The request contradicts the board, e.g. a capture onto an empty square.
    #[error("{0}")]
    Notation(String),

    /// More than one piece can make the move even after disambiguation.
    #[error("{0}")]
    AmbiguousMove(String),

    #[error(transparent)]
    Placement(#[from] PlacementError),
}

impl RulesError {
    pub(crate) fn illegal(message: impl Into<String>) -> Self {
        RulesError::IllegalMove(message.into())
    }

    pub(crate) fn notation(message: impl Into<String>) -> Self {
        RulesError::Notation(message.into())
    }
}

pub(crate) const OWN_PIECE_ON_DESTINATION: &str =
    "That square is already occupied by one of your pieces!";
pub(crate) const REGULAR_ONTO_OCCUPIED: &str =
    "There is an opponents piece on that square! Do you want to capture it?";
pub(crate) const CAPTURE_ONTO_EMPTY: &str =
    "You have specified a capture but there isn't a piece on the target square";
pub(crate) const KING_LEFT_IN_CHECK: &str = "Your king is in check!";
pub(crate) const CASTLE_OUT_OF_CHECK: &str = "You cannot castle out of check!";

/// Error type for game-level operations.
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Rules(#[from] RulesError),

    /// The game has already ended in checkmate.
    #[error("game has already ended")]
    GameAlreadyOver,

    /// Only White or Black can be given the first move.
    #[error("{0} cannot be the side to move")]
    InvalidSideToMove(Colour),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("could not read configuration: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_passed_through() {
        let err = RulesError::illegal("You've moved your kingside rook!");
        assert_eq!(err.to_string(), "You've moved your kingside rook!");

        let err = RulesError::OutOfBounds { file: 8, rank: -1 };
        assert!(err.to_string().contains("(8, -1)"));
    }

    #[test]
    fn placement_errors_convert() {
        let err: RulesError = PlacementError::InvalidRankCount(2).into();
        assert!(matches!(err, RulesError::Placement(_)));
        assert!(err.to_string().contains('2'));
    }

    #[test]
    fn game_error_wraps_rules_error() {
        let err: GameError = RulesError::notation("bad").into();
        assert_eq!(err.to_string(), "bad");
        assert_eq!(GameError::GameAlreadyOver.to_string(), "game has already ended");
        assert_eq!(
            GameError::InvalidSideToMove(Colour::Blank).to_string(),
            "Blank cannot be the side to move"
        );
    }
}
