//! One player's turn: resolve, apply, verify, and report.

use crate::apply::AppliedMove;
use crate::error::{CAPTURE_ONTO_EMPTY, CASTLE_OUT_OF_CHECK, KING_LEFT_IN_CHECK};
use crate::resolve::validate_origin_squares;
use crate::validate::validate_request;
use crate::{Board, RulesError};
use chess_types::{Colour, Coord, FileSet, MoveCategory, MoveRequest, Piece, PieceType, RankSet};
use tracing::{debug, info, warn};

/// What a committed move did to the opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnOutcome {
    /// The opponent is not in check.
    Continue,
    /// The opponent is in check but has an escape.
    Check,
    /// The opponent has no move that escapes check. Play ends.
    Checkmate { winner: Colour },
}

/// A committed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    /// The side that moved.
    pub colour: Colour,
    pub request: MoveRequest,
    pub source: Coord,
    pub destination: Coord,
    /// The piece taken off the board, if any. It belongs to the opponent.
    pub captured: Option<Piece>,
    pub en_passant: bool,
    /// Rook relocation for castling moves.
    pub rook: Option<(Coord, Coord)>,
    pub outcome: TurnOutcome,
}

impl TurnReport {
    fn new(
        colour: Colour,
        request: MoveRequest,
        applied: &AppliedMove,
        outcome: TurnOutcome,
    ) -> Self {
        TurnReport {
            colour,
            request,
            source: applied.source(),
            destination: applied.destination(),
            captured: applied.captured(),
            en_passant: applied.is_en_passant(),
            rook: applied.rook(),
            outcome,
        }
    }

    /// Returns true if the opponent's king is attacked after this move.
    pub fn gives_check(&self) -> bool {
        !matches!(self.outcome, TurnOutcome::Continue)
    }

    pub fn is_checkmate(&self) -> bool {
        matches!(self.outcome, TurnOutcome::Checkmate { .. })
    }
}

/// Drives a single move attempt by `colour` on a borrowed board.
///
/// A move either commits fully or leaves the board exactly as it was. Every
/// failure is recoverable; the caller reports the message and asks again.
pub struct Turn<'a> {
    board: &'a mut Board,
    colour: Colour,
}

impl<'a> Turn<'a> {
    pub fn new(board: &'a mut Board, colour: Colour) -> Self {
        Turn { board, colour }
    }

    /// Plays `request`, returning the committed move or the reason it was refused.
    pub fn play(mut self, request: &MoveRequest) -> Result<TurnReport, RulesError> {
        validate_request(self.board, request, self.colour)?;

        let applied = if request.category.is_castling() {
            self.castle(request)?
        } else {
            self.relocate(request)?
        };

        if self.board.king_is_in_check(self.colour) {
            self.board.rollback(applied);
            warn!(colour = %self.colour, %request, "move leaves own king in check; rolled back");
            return Err(RulesError::illegal(KING_LEFT_IN_CHECK));
        }

        let opponent = self.colour.opposite();
        let outcome = if !self.board.king_is_in_check(opponent) {
            TurnOutcome::Continue
        } else if self.board.check_for_checkmate(opponent) {
            TurnOutcome::Checkmate { winner: self.colour }
        } else {
            TurnOutcome::Check
        };

        info!(
            colour = %self.colour,
            source = %applied.source(),
            destination = %applied.destination(),
            captured = applied.captured().is_some(),
            ?outcome,
            "move committed"
        );
        Ok(TurnReport::new(self.colour, *request, &applied, outcome))
    }

    /// Resolves the single origin of a regular move or capture and applies it.
    fn relocate(&mut self, request: &MoveRequest) -> Result<AppliedMove, RulesError> {
        let mut candidates = self.board.find_origin_squares(
            request.piece_type,
            request.destination,
            request.category,
            self.colour,
        )?;
        debug!(%request, candidates = candidates.len(), "resolved origins");

        // A capture onto an empty square can only be en passant.
        if request.category == MoveCategory::Capture && self.board.is_empty(request.destination) {
            candidates.retain(|square| {
                self.board.is_en_passant_legal(square.coord(), request.destination)
            });
            if candidates.is_empty() {
                return Err(RulesError::notation(CAPTURE_ONTO_EMPTY));
            }
        }

        let source =
            validate_origin_squares(candidates, request.src_file, request.src_rank)?.coord();
        self.board
            .apply_move(source, request.destination, request.category, request.promote_to)
    }

    /// Resolves king and rook for a castling move and relocates both.
    fn castle(&mut self, request: &MoveRequest) -> Result<AppliedMove, RulesError> {
        if self.board.king_is_in_check(self.colour) {
            return Err(RulesError::illegal(CASTLE_OUT_OF_CHECK));
        }

        let king_destination = request.destination;
        let king_source = self.single_origin(PieceType::King, king_destination, request.category)?;

        let rook_step = if request.category == MoveCategory::ShortCastle {
            -1
        } else {
            1
        };
        let rook_destination = king_destination
            .offset(rook_step, 0)
            .ok_or(RulesError::OutOfBounds {
                file: king_destination.file_index() + rook_step,
                rank: king_destination.rank_index(),
            })?;
        let rook_source = self.single_origin(PieceType::Rook, rook_destination, request.category)?;

        debug!(colour = %self.colour, %king_source, %rook_source, "castling");
        Ok(self.board.apply_castle(
            king_source,
            king_destination,
            rook_source,
            rook_destination,
        ))
    }

    fn single_origin(
        &self,
        piece_type: PieceType,
        destination: Coord,
        category: MoveCategory,
    ) -> Result<Coord, RulesError> {
        let candidates = self
            .board
            .find_origin_squares(piece_type, destination, category, self.colour)?;
        Ok(validate_origin_squares(candidates, FileSet::ANY, RankSet::ANY)?.coord())
    }
}

impl Board {
    /// Plays one move for `colour`. See [`Turn::play`].
    pub fn play(
        &mut self,
        colour: Colour,
        request: &MoveRequest,
    ) -> Result<TurnReport, RulesError> {
        Turn::new(self, colour).play(request)
    }
}
