//! Legal-origin resolution and check detection.
//!
//! The resolver searches backwards: starting at the requested destination it
//! walks outward along every ray the requested piece could have travelled,
//! and reports each square where such a piece actually stands within reach.

use crate::neighbours::{
    is_long_castle_valid, is_short_castle_valid, knight_squares, search_directions, BoardView,
};
use crate::{Board, RulesError, Square};
use chess_types::{Colour, Coord, FileSet, MoveCategory, PieceType, RankSet};

/// Returns every square from which a `colour` piece of `piece_type` could
/// reach `destination` under `category`.
///
/// Castling requests fail with `IllegalMove` when the king or rook has moved
/// or the path between them is occupied. Other requests never fail; an empty
/// result means no piece can make the move.
pub fn find_origin_squares<'a, B>(
    board: &'a B,
    piece_type: PieceType,
    destination: Coord,
    category: MoveCategory,
    colour: Colour,
) -> Result<Vec<&'a Square>, RulesError>
where
    B: BoardView + ?Sized,
{
    let destination = board.square_at(destination)?;

    if category.is_castling() {
        return castle_origins(board, piece_type, destination, category, colour);
    }

    if piece_type == PieceType::Knight {
        return Ok(knight_squares(board, destination)
            .into_iter()
            .filter(|square| square.holds(piece_type, colour))
            .collect());
    }

    let mut candidates = Vec::new();
    for &direction in search_directions(piece_type, colour, category) {
        let mut current = destination;
        let mut distance: u8 = 0;
        loop {
            let neighbour = match direction.neighbour(board, current) {
                Ok(square) => square,
                Err(RulesError::OutOfBounds { .. }) => break,
                Err(e) => return Err(e),
            };
            distance += 1;
            if neighbour.is_empty() {
                current = neighbour;
                continue;
            }
            let piece = neighbour.piece();
            if piece.is(piece_type, colour) && distance <= piece.limit(category) {
                candidates.push(neighbour);
            }
            break;
        }
    }
    Ok(candidates)
}

fn castle_origins<'a, B>(
    board: &'a B,
    piece_type: PieceType,
    destination: &Square,
    category: MoveCategory,
    colour: Colour,
) -> Result<Vec<&'a Square>, RulesError>
where
    B: BoardView + ?Sized,
{
    let short = category == MoveCategory::ShortCastle;
    match piece_type {
        PieceType::King => {
            let Some(king) = board.find_king(colour) else {
                return Ok(Vec::new());
            };
            if short {
                is_short_castle_valid(board, king)?;
            } else {
                is_long_castle_valid(board, king)?;
            }
            let landing = king.coord().offset(if short { 2 } else { -2 }, 0);
            if landing == Some(destination.coord()) {
                Ok(vec![king])
            } else {
                Ok(Vec::new())
            }
        }
        PieceType::Rook => {
            let file_delta = if short { 2 } else { -3 };
            Ok(board
                .get_square(destination.file() + file_delta, destination.rank())
                .ok()
                .filter(|square| square.holds(PieceType::Rook, colour))
                .into_iter()
                .collect())
        }
        _ => Ok(Vec::new()),
    }
}

/// Picks the single origin out of `candidates`.
///
/// Hints are only consulted when more than one candidate exists.
pub fn validate_origin_squares<'a>(
    candidates: Vec<&'a Square>,
    src_file: FileSet,
    src_rank: RankSet,
) -> Result<&'a Square, RulesError> {
    if candidates.len() <= 1 {
        return candidates
            .into_iter()
            .next()
            .ok_or_else(|| RulesError::illegal("That is not a legal move"));
    }

    let matching: Vec<&Square> = candidates
        .into_iter()
        .filter(|square| {
            src_file.contains(square.coord().file()) && src_rank.contains(square.coord().rank())
        })
        .collect();
    match matching.as_slice() {
        [] => Err(RulesError::illegal(
            "None of the pieces that can make that move stand on the given file or rank",
        )),
        [only] => Ok(*only),
        _ => Err(RulesError::AmbiguousMove(
            "There is more than one possible move! Please clarify.".to_string(),
        )),
    }
}

/// Returns true if any piece of the other colour could capture the king of `colour`.
///
/// Several attackers of the same type still count as check. A board without
/// a king of `colour` is never in check.
pub fn king_is_in_check<B>(board: &B, colour: Colour) -> bool
where
    B: BoardView + ?Sized,
{
    let Some(king) = board.find_king(colour) else {
        return false;
    };
    let king = king.coord();
    let attacker = colour.opposite();
    PieceType::ALL.iter().any(|&piece_type| {
        find_origin_squares(board, piece_type, king, MoveCategory::Capture, attacker)
            .map(|origins| !origins.is_empty())
            .unwrap_or(false)
    })
}

impl Board {
    /// See [`find_origin_squares`].
    pub fn find_origin_squares(
        &self,
        piece_type: PieceType,
        destination: Coord,
        category: MoveCategory,
        colour: Colour,
    ) -> Result<Vec<&Square>, RulesError> {
        find_origin_squares(self, piece_type, destination, category, colour)
    }

    /// See [`king_is_in_check`].
    pub fn king_is_in_check(&self, colour: Colour) -> bool {
        king_is_in_check(self, colour)
    }
}
