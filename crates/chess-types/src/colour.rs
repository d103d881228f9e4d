//! Side colour, including the sentinel carried by empty squares.

use serde::Deserialize;

/// The colour of a piece.
///
/// `Blank` is only ever carried by the empty piece that fills a vacant square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Colour {
    White,
    Black,
    Blank,
}

impl Colour {
    /// The two playing sides, White first.
    pub const SIDES: [Colour; 2] = [Colour::White, Colour::Black];

    /// Returns the opposing side. `Blank` has no opponent and maps to itself.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Colour::White => Colour::Black,
            Colour::Black => Colour::White,
            Colour::Blank => Colour::Blank,
        }
    }

    /// Returns the rank index this side's pieces start on (0 for White, 7 for Black).
    #[inline]
    pub const fn back_rank(self) -> i8 {
        match self {
            Colour::White | Colour::Blank => 0,
            Colour::Black => 7,
        }
    }

    /// Returns the rank index a pawn of this colour promotes on.
    #[inline]
    pub const fn promotion_rank(self) -> i8 {
        self.opposite().back_rank()
    }

    /// Returns the rank index a pawn of this colour must stand on to capture en passant.
    #[inline]
    pub const fn en_passant_rank(self) -> i8 {
        match self {
            Colour::White | Colour::Blank => 4,
            Colour::Black => 3,
        }
    }

    /// Returns true for White and Black.
    #[inline]
    pub const fn is_side(self) -> bool {
        !matches!(self, Colour::Blank)
    }
}

impl std::fmt::Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Colour::White => write!(f, "White"),
            Colour::Black => write!(f, "Black"),
            Colour::Blank => write!(f, "Blank"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_colour() {
        assert_eq!(Colour::White.opposite(), Colour::Black);
        assert_eq!(Colour::Black.opposite(), Colour::White);
        assert_eq!(Colour::Blank.opposite(), Colour::Blank);
    }

    #[test]
    fn ranks() {
        assert_eq!(Colour::White.back_rank(), 0);
        assert_eq!(Colour::Black.back_rank(), 7);
        assert_eq!(Colour::White.promotion_rank(), 7);
        assert_eq!(Colour::Black.promotion_rank(), 0);
        assert_eq!(Colour::White.en_passant_rank(), 4);
        assert_eq!(Colour::Black.en_passant_rank(), 3);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Colour::White), "White");
        assert_eq!(format!("{}", Colour::Black), "Black");
    }
}
