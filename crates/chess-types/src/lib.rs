//! Data model for the chess rules engine.
//!
//! This crate provides the value types shared by the rules engine and any
//! input or display layer built on top of it:
//! - [`Colour`], [`PieceType`] and the stateful [`Piece`]
//! - [`Coord`], [`File`] and [`Rank`] for board coordinates
//! - [`MoveCategory`] and [`MoveRequest`] describing an intended move
//! - [`Placement`] and [`Orientation`] for the starting-position notation

mod colour;
mod coord;
mod piece;
mod placement;
mod request;

pub use colour::Colour;
pub use coord::{Coord, File, FileSet, Rank, RankSet};
pub use piece::{Piece, PieceType, BOARD_SPAN};
pub use placement::{Orientation, Placement, PlacementError};
pub use request::{MoveCategory, MoveRequest};
