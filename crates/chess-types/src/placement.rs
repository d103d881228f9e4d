//! Starting-position notation: the piece-placement field of FEN.
//!
//! Eight rank segments separated by `/`. Within a segment, files run from
//! a to h and the digits 1-8 stand for that many empty squares. Which rank
//! comes first and which case is White depend on the [`Orientation`].

use crate::{Colour, Coord, PieceType};
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// How a placement string maps onto the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Standard FEN: the first segment is rank 8, uppercase is White.
    #[default]
    Fen,
    /// The first segment is rank 1, lowercase is White.
    Reversed,
}

impl Orientation {
    /// Rank index of the `segment`th segment, counting from 0.
    const fn rank_of_segment(self, segment: usize) -> i8 {
        match self {
            Orientation::Fen => 7 - segment as i8,
            Orientation::Reversed => segment as i8,
        }
    }

    const fn letter_colour(self, colour: Colour) -> Colour {
        match self {
            Orientation::Fen => colour,
            Orientation::Reversed => colour.opposite(),
        }
    }
}

/// Errors that can occur when parsing a placement string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlacementError {
    #[error("invalid placement: expected 8 ranks, got {0}")]
    InvalidRankCount(usize),

    #[error("invalid character '{character}' in rank {rank}")]
    InvalidCharacter { character: char, rank: u8 },

    #[error("rank {rank} has {width} squares, expected 8")]
    InvalidRankWidth { rank: u8, width: u32 },
}

/// A parsed piece layout: every occupied square with its piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pieces: Vec<(Coord, PieceType, Colour)>,
}

impl Placement {
    /// The standard starting layout.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    /// Parses a placement string in standard FEN orientation.
    pub fn parse(placement: &str) -> Result<Self, PlacementError> {
        Self::parse_with(placement, Orientation::Fen)
    }

    /// Parses a placement string laid out in `orientation`.
    pub fn parse_with(placement: &str, orientation: Orientation) -> Result<Self, PlacementError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(PlacementError::InvalidRankCount(ranks.len()));
        }

        let mut pieces = Vec::new();
        for (i, rank_str) in ranks.iter().enumerate() {
            let rank = orientation.rank_of_segment(i);
            let rank_label = rank as u8 + 1;
            let mut width: u32 = 0;
            for c in rank_str.chars() {
                if let Some(run) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    width += run;
                    continue;
                }
                let (piece_type, colour) =
                    PieceType::from_fen_char(c).ok_or(PlacementError::InvalidCharacter {
                        character: c,
                        rank: rank_label,
                    })?;
                if let Some(coord) = Coord::from_indices(width as i8, rank) {
                    pieces.push((coord, piece_type, orientation.letter_colour(colour)));
                }
                width += 1;
            }
            if width != 8 {
                return Err(PlacementError::InvalidRankWidth {
                    rank: rank_label,
                    width,
                });
            }
        }

        Ok(Placement { pieces })
    }

    /// Builds a placement from occupied squares.
    pub fn from_pieces(pieces: impl IntoIterator<Item = (Coord, PieceType, Colour)>) -> Self {
        Placement {
            pieces: pieces
                .into_iter()
                .filter(|(_, piece_type, colour)| {
                    *piece_type != PieceType::Empty && colour.is_side()
                })
                .collect(),
        }
    }

    /// Occupied squares in the order they were listed.
    pub fn pieces(&self) -> &[(Coord, PieceType, Colour)] {
        &self.pieces
    }

    /// Returns the occupant of `coord`, if any.
    pub fn piece_at(&self, coord: Coord) -> Option<(PieceType, Colour)> {
        self.pieces
            .iter()
            .rev()
            .find(|(c, _, _)| *c == coord)
            .map(|&(_, piece_type, colour)| (piece_type, colour))
    }

    /// Serializes the layout in `orientation`.
    pub fn to_string_with(&self, orientation: Orientation) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_layout(&mut out, orientation);
        out
    }

    fn write_layout(&self, f: &mut impl fmt::Write, orientation: Orientation) -> fmt::Result {
        for segment in 0..8 {
            let rank = orientation.rank_of_segment(segment);
            let mut run = 0;
            for file in 0..8 {
                let letter = Coord::from_indices(file, rank)
                    .and_then(|coord| self.piece_at(coord))
                    .and_then(|(piece_type, colour)| {
                        piece_type.to_fen_char(orientation.letter_colour(colour))
                    });
                match letter {
                    Some(c) => {
                        if run > 0 {
                            write!(f, "{}", run)?;
                            run = 0;
                        }
                        write!(f, "{}", c)?;
                    }
                    None => run += 1,
                }
            }
            if run > 0 {
                write!(f, "{}", run)?;
            }
            if segment < 7 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_layout(f, Orientation::Fen)
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::parse(Self::STARTPOS).expect("STARTPOS is valid")
    }
}

impl std::str::FromStr for Placement {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
