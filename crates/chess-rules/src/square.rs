//! A single board cell and its occupant.

use chess_types::{Colour, Coord, Piece, PieceType};
use std::fmt;

/// A cell of the board. Always holds a piece; vacant cells hold [`Piece::empty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    coord: Coord,
    piece: Piece,
}

impl Square {
    /// An empty square at `coord`.
    pub const fn new(coord: Coord) -> Self {
        Square {
            coord,
            piece: Piece::empty(),
        }
    }

    #[inline]
    pub const fn coord(&self) -> Coord {
        self.coord
    }

    #[inline]
    pub const fn file(&self) -> i8 {
        self.coord.file_index()
    }

    #[inline]
    pub const fn rank(&self) -> i8 {
        self.coord.rank_index()
    }

    #[inline]
    pub const fn piece(&self) -> &Piece {
        &self.piece
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.piece.is_empty()
    }

    /// Returns true if the occupant has the given type and colour.
    #[inline]
    pub fn holds(&self, piece_type: PieceType, colour: Colour) -> bool {
        self.piece.is(piece_type, colour)
    }

    pub(crate) fn piece_mut(&mut self) -> &mut Piece {
        &mut self.piece
    }

    /// Puts `piece` here and returns the previous occupant.
    pub(crate) fn replace(&mut self, piece: Piece) -> Piece {
        std::mem::replace(&mut self.piece, piece)
    }

    /// Empties the square and returns the previous occupant.
    pub(crate) fn take(&mut self) -> Piece {
        self.replace(Piece::empty())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "{} is empty", self.coord)
        } else {
            write!(
                f,
                "There is a {} {} on {}",
                self.piece.colour(),
                self.piece.piece_type(),
                self.coord
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_types::{File, Rank};

    #[test]
    fn new_square_is_empty() {
        let square = Square::new(Coord::new(File::C, Rank::R5));
        assert!(square.is_empty());
        assert_eq!((square.file(), square.rank()), (2, 4));
        assert_eq!(square.to_string(), "c5 is empty");
    }

    #[test]
    fn replace_and_take() {
        let mut square = Square::new(Coord::new(File::A, Rank::R1));
        let rook = Piece::new(PieceType::Rook, Colour::White);
        assert!(square.replace(rook).is_empty());
        assert!(square.holds(PieceType::Rook, Colour::White));
        assert_eq!(square.to_string(), "There is a White rook on a1");

        assert_eq!(square.take(), rook);
        assert!(square.is_empty());
    }
}
