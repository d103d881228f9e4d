//! Checks a move request against the destination before any origin is resolved.

use crate::error::{CAPTURE_ONTO_EMPTY, OWN_PIECE_ON_DESTINATION, REGULAR_ONTO_OCCUPIED};
use crate::{Board, RulesError};
use chess_types::{Colour, MoveCategory, MoveRequest, PieceType};

/// Rejects requests that contradict the destination square or the promotion rules.
///
/// En passant can't be judged without an origin, so a pawn capture onto an
/// empty square is let through here and settled when the move is applied.
pub fn validate_request(
    board: &Board,
    request: &MoveRequest,
    colour: Colour,
) -> Result<(), RulesError> {
    if request.piece_type == PieceType::Empty {
        return Err(RulesError::notation("No piece was named for that move"));
    }

    if request.category.is_castling() {
        if request.piece_type != PieceType::King {
            return Err(RulesError::notation("Castling is requested with the king"));
        }
        if request.promote_to.is_some() {
            return Err(RulesError::notation("Only a pawn can be promoted"));
        }
        return Ok(());
    }

    let occupant = board.piece(request.destination);
    if occupant.colour() == colour {
        return Err(RulesError::illegal(OWN_PIECE_ON_DESTINATION));
    }
    match request.category {
        MoveCategory::Regular if !occupant.is_empty() => {
            return Err(RulesError::notation(REGULAR_ONTO_OCCUPIED));
        }
        MoveCategory::Capture if occupant.is_empty() && request.piece_type != PieceType::Pawn => {
            return Err(RulesError::notation(CAPTURE_ONTO_EMPTY));
        }
        _ => {}
    }

    let reaches_far_rank = request.piece_type == PieceType::Pawn
        && request.destination.rank_index() == colour.promotion_rank();
    match (reaches_far_rank, request.promote_to) {
        (true, None) => Err(RulesError::notation(
            "Your pawn has reached the far rank - choose a piece to promote to!",
        )),
        (true, Some(target)) if !target.is_promotion_target() => Err(RulesError::notation(
            "A pawn can only be promoted to a queen, rook, bishop or knight",
        )),
        (false, Some(_)) => Err(RulesError::notation(
            "Only a pawn reaching the far rank can be promoted",
        )),
        _ => Ok(()),
    }
}
