//! Chess rules engine.
//!
//! This crate holds the authoritative board state and the rules that act on it:
//! - [`Board`] and [`Square`], a fully populated 8x8 grid
//! - legal-origin resolution: given a piece type, destination and move
//!   category, which squares could the move have come from
//! - transactional move application with exact rollback
//! - check and checkmate detection by full rescan
//! - [`Turn`] for a single move attempt and [`Game`] for a whole game
//!
//! Parsing algebraic notation and rendering the board are left to callers;
//! they build [`MoveRequest`]s and read squares.
//!
//! # Example
//!
//! ```
//! use chess_rules::{Game, TurnOutcome};
//! use chess_types::{Coord, MoveRequest, PieceType};
//!
//! let mut game = Game::new();
//! let e4 = Coord::from_algebraic("e4").unwrap();
//! let report = game.make_move(&MoveRequest::regular(PieceType::Pawn, e4)).unwrap();
//! assert_eq!(report.outcome, TurnOutcome::Continue);
//! assert_eq!(report.source, Coord::from_algebraic("e2").unwrap());
//! ```

mod apply;
mod board;
mod config;
mod error;
mod game;
pub mod neighbours;
mod resolve;
mod square;
mod turn;
mod validate;

pub use apply::AppliedMove;
pub use board::Board;
pub use config::GameConfig;
pub use error::{GameError, RulesError};
pub use game::{Game, GameResult};
pub use neighbours::BoardView;
pub use resolve::{find_origin_squares, king_is_in_check, validate_origin_squares};
pub use square::Square;
pub use turn::{Turn, TurnOutcome, TurnReport};
pub use validate::validate_request;

pub use chess_types::{Colour, Coord, MoveCategory, MoveRequest, Orientation, Piece, PieceType};
