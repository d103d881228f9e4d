//! Directional stepping rules, written against a minimal board capability.
//!
//! Everything here only needs [`BoardView::get_square`], so the resolver can
//! be exercised against any grid that hands out squares, not just [`Board`].
//!
//! [`Board`]: crate::Board

use crate::{RulesError, Square};
use chess_types::{Colour, Coord, MoveCategory, PieceType};

/// Read access to a grid of squares.
pub trait BoardView {
    /// Returns the square at (`file`, `rank`), or `OutOfBounds` off the grid.
    fn get_square(&self, file: i8, rank: i8) -> Result<&Square, RulesError>;

    /// Returns the square at `coord`.
    fn square_at(&self, coord: Coord) -> Result<&Square, RulesError> {
        self.get_square(coord.file_index(), coord.rank_index())
    }

    /// Returns the square holding the king of `colour`.
    ///
    /// Exactly one king per side is expected; with none this returns `None`,
    /// with several the first in a1..h8 order wins.
    fn find_king(&self, colour: Colour) -> Option<&Square> {
        Coord::all()
            .filter_map(|coord| self.square_at(coord).ok())
            .find(|square| square.holds(PieceType::King, colour))
    }
}

/// One step in one of the eight compass directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    pub const DIAGONAL: [Direction; 4] = [
        Direction::DownLeft,
        Direction::DownRight,
        Direction::UpRight,
        Direction::UpLeft,
    ];

    pub const ALL: [Direction; 8] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
        Direction::DownLeft,
        Direction::DownRight,
        Direction::UpRight,
        Direction::UpLeft,
    ];

    /// `(file, rank)` delta of one step. Up is towards rank 8.
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::UpLeft => (-1, 1),
            Direction::UpRight => (1, 1),
            Direction::DownLeft => (-1, -1),
            Direction::DownRight => (1, -1),
        }
    }

    /// Returns the adjacent square in this direction.
    pub fn neighbour<'a, B>(self, board: &'a B, square: &Square) -> Result<&'a Square, RulesError>
    where
        B: BoardView + ?Sized,
    {
        let (file_delta, rank_delta) = self.delta();
        board.get_square(square.file() + file_delta, square.rank() + rank_delta)
    }
}

/// Directions to walk from a destination back towards a possible origin.
///
/// Pawns are the only pieces whose rays depend on colour and category: a
/// White pawn arrives from below, a Black pawn from above, and captures
/// arrive along the two diagonals behind the destination. Knights don't
/// slide and castling has its own rules, so both yield no rays.
pub fn search_directions(
    piece_type: PieceType,
    colour: Colour,
    category: MoveCategory,
) -> &'static [Direction] {
    const WHITE_PAWN_PUSH: [Direction; 1] = [Direction::Down];
    const BLACK_PAWN_PUSH: [Direction; 1] = [Direction::Up];
    const WHITE_PAWN_CAPTURE: [Direction; 2] = [Direction::DownRight, Direction::DownLeft];
    const BLACK_PAWN_CAPTURE: [Direction; 2] = [Direction::UpRight, Direction::UpLeft];

    if category.is_castling() {
        return &[];
    }
    match (piece_type, colour, category) {
        (PieceType::Pawn, Colour::White, MoveCategory::Regular) => &WHITE_PAWN_PUSH,
        (PieceType::Pawn, Colour::Black, MoveCategory::Regular) => &BLACK_PAWN_PUSH,
        (PieceType::Pawn, Colour::White, MoveCategory::Capture) => &WHITE_PAWN_CAPTURE,
        (PieceType::Pawn, Colour::Black, MoveCategory::Capture) => &BLACK_PAWN_CAPTURE,
        (PieceType::Rook, _, _) => &Direction::ORTHOGONAL,
        (PieceType::Bishop, _, _) => &Direction::DIAGONAL,
        (PieceType::Queen, _, _) | (PieceType::King, _, _) => &Direction::ALL,
        _ => &[],
    }
}

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
];

/// Squares a knight's jump away from `square`, skipping those off the board.
pub fn knight_squares<'a, B>(board: &'a B, square: &Square) -> Vec<&'a Square>
where
    B: BoardView + ?Sized,
{
    KNIGHT_OFFSETS
        .iter()
        .filter_map(|&(file_delta, rank_delta)| {
            board
                .get_square(square.file() + file_delta, square.rank() + rank_delta)
                .ok()
        })
        .collect()
}

/// Checks that the king on `king` may castle kingside.
///
/// Only movement history and a clear path are checked here. Whether the king
/// is attacked is the turn coordinator's concern.
pub fn is_short_castle_valid<B>(board: &B, king: &Square) -> Result<(), RulesError>
where
    B: BoardView + ?Sized,
{
    if king.piece().has_moved() {
        return Err(RulesError::illegal(
            "Your king has already moved - you cannot castle anymore!",
        ));
    }
    let colour = king.piece().colour();
    if !unmoved_rook_at(board, king, 3, colour) {
        return Err(RulesError::illegal("You've moved your kingside rook!"));
    }
    if !path_is_clear(board, king, &[1, 2]) {
        return Err(RulesError::illegal(
            "You need to move your knight and bishop out of the way before you can castle!",
        ));
    }
    Ok(())
}

/// Checks that the king on `king` may castle queenside.
pub fn is_long_castle_valid<B>(board: &B, king: &Square) -> Result<(), RulesError>
where
    B: BoardView + ?Sized,
{
    if king.piece().has_moved() {
        return Err(RulesError::illegal(
            "Your king has already moved - you cannot castle anymore!",
        ));
    }
    let colour = king.piece().colour();
    if !unmoved_rook_at(board, king, -4, colour) {
        return Err(RulesError::illegal("You've moved your queenside rook!"));
    }
    if !path_is_clear(board, king, &[-1, -2, -3]) {
        return Err(RulesError::illegal(
            "You need to move your queen, knight and bishop out of the way before you can castle!",
        ));
    }
    Ok(())
}

fn unmoved_rook_at<B>(board: &B, king: &Square, file_delta: i8, colour: Colour) -> bool
where
    B: BoardView + ?Sized,
{
    board
        .get_square(king.file() + file_delta, king.rank())
        .map(|square| square.holds(PieceType::Rook, colour) && !square.piece().has_moved())
        .unwrap_or(false)
}

fn path_is_clear<B>(board: &B, king: &Square, file_deltas: &[i8]) -> bool
where
    B: BoardView + ?Sized,
{
    file_deltas.iter().all(|&delta| {
        board
            .get_square(king.file() + delta, king.rank())
            .map(Square::is_empty)
            .unwrap_or(false)
    })
}
