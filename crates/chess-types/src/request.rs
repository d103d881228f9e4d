//! Move requests: what a player intends to do, before the board resolves it.

use crate::{Colour, Coord, File, FileSet, PieceType, Rank, RankSet};
use std::fmt;

/// The declared intent of a move.
///
/// The category is supplied by the caller, never derived from the board. It
/// selects which movement rule and which legality checks apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveCategory {
    /// Non-capturing move onto an empty square.
    Regular,
    /// Capture, including en passant.
    Capture,
    /// Kingside castling (O-O).
    ShortCastle,
    /// Queenside castling (O-O-O).
    LongCastle,
}

impl MoveCategory {
    /// Returns true if this is a castling move.
    #[inline]
    pub const fn is_castling(self) -> bool {
        matches!(self, MoveCategory::ShortCastle | MoveCategory::LongCastle)
    }
}

impl fmt::Display for MoveCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MoveCategory::Regular => "regular",
            MoveCategory::Capture => "capture",
            MoveCategory::ShortCastle => "short castle",
            MoveCategory::LongCastle => "long castle",
        };
        write!(f, "{}", name)
    }
}

/// A request to move a piece of the given type to `destination`.
///
/// Built once per turn attempt by whatever input surface the caller uses,
/// then consumed by the board's resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveRequest {
    pub piece_type: PieceType,
    pub destination: Coord,
    pub category: MoveCategory,
    /// Files the origin may lie on.
    pub src_file: FileSet,
    /// Ranks the origin may lie on.
    pub src_rank: RankSet,
    pub promote_to: Option<PieceType>,
}

impl MoveRequest {
    /// Creates a request with no disambiguation and no promotion.
    pub const fn new(piece_type: PieceType, destination: Coord, category: MoveCategory) -> Self {
        MoveRequest {
            piece_type,
            destination,
            category,
            src_file: FileSet::ANY,
            src_rank: RankSet::ANY,
            promote_to: None,
        }
    }

    /// A non-capturing move.
    pub const fn regular(piece_type: PieceType, destination: Coord) -> Self {
        Self::new(piece_type, destination, MoveCategory::Regular)
    }

    /// A capturing move.
    pub const fn capture(piece_type: PieceType, destination: Coord) -> Self {
        Self::new(piece_type, destination, MoveCategory::Capture)
    }

    /// The king half of a castling move for `colour`.
    ///
    /// Returns `None` if `category` is not a castling category or `colour` is blank.
    pub const fn castle(colour: Colour, category: MoveCategory) -> Option<Self> {
        if !colour.is_side() {
            return None;
        }
        let file = match category {
            MoveCategory::ShortCastle => File::G,
            MoveCategory::LongCastle => File::C,
            _ => return None,
        };
        let rank = match Rank::from_index(colour.back_rank()) {
            Some(rank) => rank,
            None => return None,
        };
        Some(Self::new(PieceType::King, Coord::new(file, rank), category))
    }

    /// Restricts the origin to the given file.
    pub const fn from_file(mut self, file: File) -> Self {
        self.src_file = FileSet::only(file);
        self
    }

    /// Restricts the origin to the given rank.
    pub const fn from_rank(mut self, rank: Rank) -> Self {
        self.src_rank = RankSet::only(rank);
        self
    }

    /// Names the piece a pawn becomes on the far rank.
    pub const fn promoting_to(mut self, piece_type: PieceType) -> Self {
        self.promote_to = Some(piece_type);
        self
    }
}

impl fmt::Display for MoveRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} to {}", self.piece_type, self.category, self.destination)?;
        if let Some(promotion) = self.promote_to {
            write!(f, " promoting to {}", promotion)?;
        }
        Ok(())
    }
}
