//! Transactional move application.
//!
//! Every mutation a move makes is captured in an [`AppliedMove`], and
//! [`Board::rollback`] reverses it piece for piece. The turn coordinator
//! applies speculatively and rolls back when the mover's king ends up in
//! check; the checkmate scan uses the same pair to try every reply.

use crate::error::{CAPTURE_ONTO_EMPTY, REGULAR_ONTO_OCCUPIED};
use crate::{Board, RulesError};
use chess_types::{Colour, Coord, MoveCategory, Piece, PieceType};

/// Record of a move applied to the board, sufficient to reverse it exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    source: Coord,
    destination: Coord,
    /// The rook's relocation when castling.
    rook: Option<(Coord, Coord)>,
    /// The captured piece and the square it was taken from.
    captured: Option<(Coord, Piece)>,
    promoted_to: Option<PieceType>,
    previous_last_moved: Option<Coord>,
}

impl AppliedMove {
    pub fn source(&self) -> Coord {
        self.source
    }

    pub fn destination(&self) -> Coord {
        self.destination
    }

    /// The piece removed from the board, as it stood before removal.
    pub fn captured(&self) -> Option<Piece> {
        self.captured.map(|(_, piece)| piece)
    }

    /// The square the captured piece was taken from.
    pub fn captured_at(&self) -> Option<Coord> {
        self.captured.map(|(coord, _)| coord)
    }

    /// True if the capture took a pawn from beside the destination.
    pub fn is_en_passant(&self) -> bool {
        self.captured_at()
            .is_some_and(|coord| coord != self.destination)
    }

    pub fn promoted_to(&self) -> Option<PieceType> {
        self.promoted_to
    }

    pub fn rook(&self) -> Option<(Coord, Coord)> {
        self.rook
    }
}

impl Board {
    /// Relocates the piece on `source` to `destination` and marks it as last moved.
    ///
    /// Whatever stood on `destination` is overwritten; callers remove captures first.
    pub(crate) fn move_piece(&mut self, source: Coord, destination: Coord) {
        let mut piece = self.square_mut(source).take();
        piece.advance();
        self.square_mut(destination).replace(piece);
        self.set_last_moved(destination);
    }

    /// Reverses [`move_piece`](Board::move_piece), leaving last-moved markers untouched.
    fn unmove_piece(&mut self, source: Coord, destination: Coord) {
        let mut piece = self.square_mut(destination).take();
        piece.retreat();
        self.square_mut(source).replace(piece);
    }

    /// Applies a regular move or capture from `source` to `destination`.
    ///
    /// A capture onto an empty square is treated as en passant and fails with
    /// `Notation` unless [`is_en_passant_legal`](Board::is_en_passant_legal)
    /// holds. Nothing is mutated when this returns an error.
    pub fn apply_move(
        &mut self,
        source: Coord,
        destination: Coord,
        category: MoveCategory,
        promote_to: Option<PieceType>,
    ) -> Result<AppliedMove, RulesError> {
        let previous_last_moved = self.last_moved();

        let captured = match category {
            MoveCategory::Regular => {
                if !self.is_empty(destination) {
                    return Err(RulesError::notation(REGULAR_ONTO_OCCUPIED));
                }
                None
            }
            MoveCategory::Capture => {
                let taken_from = if self.is_empty(destination) {
                    if !self.is_en_passant_legal(source, destination) {
                        return Err(RulesError::notation(CAPTURE_ONTO_EMPTY));
                    }
                    Coord::from_indices(destination.file_index(), source.rank_index())
                        .ok_or(RulesError::OutOfBounds {
                            file: destination.file_index(),
                            rank: source.rank_index(),
                        })?
                } else {
                    destination
                };
                Some((taken_from, self.square_mut(taken_from).take()))
            }
            MoveCategory::ShortCastle | MoveCategory::LongCastle => {
                return Err(RulesError::illegal(
                    "Castling moves the king and rook together",
                ));
            }
        };

        self.move_piece(source, destination);
        if let Some(piece_type) = promote_to {
            self.square_mut(destination).piece_mut().promote_to(piece_type);
        }

        tracing::trace!(%source, %destination, %category, "applied move");
        Ok(AppliedMove {
            source,
            destination,
            rook: None,
            captured,
            promoted_to: promote_to,
            previous_last_moved,
        })
    }

    /// Relocates king and rook for a castling move. The king ends up as the
    /// last-moved piece.
    pub fn apply_castle(
        &mut self,
        king_source: Coord,
        king_destination: Coord,
        rook_source: Coord,
        rook_destination: Coord,
    ) -> AppliedMove {
        let previous_last_moved = self.last_moved();
        self.move_piece(king_source, king_destination);
        self.move_piece(rook_source, rook_destination);
        self.set_last_moved(king_destination);

        tracing::trace!(%king_source, %king_destination, "applied castle");
        AppliedMove {
            source: king_source,
            destination: king_destination,
            rook: Some((rook_source, rook_destination)),
            captured: None,
            promoted_to: None,
            previous_last_moved,
        }
    }

    /// Reverses `applied`, restoring the board exactly as it was before.
    pub fn rollback(&mut self, applied: AppliedMove) {
        if let Some((rook_source, rook_destination)) = applied.rook {
            self.unmove_piece(rook_source, rook_destination);
        }
        if applied.promoted_to.is_some() {
            self.square_mut(applied.destination).piece_mut().demote();
        }
        self.unmove_piece(applied.source, applied.destination);
        if let Some((taken_from, piece)) = applied.captured {
            self.place(taken_from, piece);
        }

        self.clear_last_moved();
        if let Some(coord) = applied.previous_last_moved {
            self.square_mut(coord).piece_mut().set_last_moved(true);
        }
        tracing::trace!(
            source = %applied.source,
            destination = %applied.destination,
            "rolled back move"
        );
    }

    /// Returns true if no regular move or capture by `colour` leaves its king
    /// out of check.
    ///
    /// Every destination, piece type and category is tried by applying the
    /// move and rolling it back, so the board is unchanged on return. Castling
    /// is never an escape. A side that is not in check but has no move at all
    /// is reported the same way.
    pub fn check_for_checkmate(&mut self, colour: Colour) -> bool {
        for destination in Coord::all() {
            for piece_type in PieceType::ALL {
                for category in [MoveCategory::Regular, MoveCategory::Capture] {
                    let occupant = self.piece(destination);
                    let skip = match category {
                        MoveCategory::Regular => !occupant.is_empty(),
                        _ => occupant.colour() == colour,
                    };
                    if skip {
                        continue;
                    }

                    let origins: Vec<Coord> = match self.find_origin_squares(
                        piece_type,
                        destination,
                        category,
                        colour,
                    ) {
                        Ok(squares) => squares.iter().map(|square| square.coord()).collect(),
                        Err(_) => continue,
                    };

                    for origin in origins {
                        let Ok(applied) = self.apply_move(origin, destination, category, None)
                        else {
                            continue;
                        };
                        let escapes = !self.king_is_in_check(colour);
                        self.rollback(applied);
                        if escapes {
                            tracing::debug!(
                                %colour,
                                %origin,
                                %destination,
                                "found escape from check"
                            );
                            return false;
                        }
                    }
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn coord(algebraic: &str) -> Coord {
        Coord::from_algebraic(algebraic).unwrap()
    }

    #[test]
    fn double_step_and_rollback() {
        let mut board = Board::startpos();
        let before = board.clone();

        let applied = board
            .apply_move(coord("e2"), coord("e4"), MoveCategory::Regular, None)
            .unwrap();
        let pawn = *board.piece(coord("e4"));
        assert!(pawn.is(PieceType::Pawn, Colour::White));
        assert_eq!(pawn.move_limit(), 1);
        assert!(pawn.last_moved());
        assert!(board.is_empty(coord("e2")));
        assert_eq!(applied.captured(), None);

        board.rollback(applied);
        assert_eq!(board, before);
    }

    #[test]
    fn capture_and_rollback() {
        let mut board = Board::from_placement("4k3/8/8/3p4/4P3/8/8/4K3").unwrap();
        let before = board.clone();

        let applied = board
            .apply_move(coord("e4"), coord("d5"), MoveCategory::Capture, None)
            .unwrap();
        assert_eq!(
            applied.captured().map(|p| p.piece_type()),
            Some(PieceType::Pawn)
        );
        assert_eq!(applied.captured_at(), Some(coord("d5")));
        assert!(!applied.is_en_passant());
        assert!(board.square(coord("d5")).holds(PieceType::Pawn, Colour::White));

        board.rollback(applied);
        assert_eq!(board, before);
    }

    #[test]
    fn en_passant_removes_the_passed_pawn() {
        let mut board = Board::from_placement("4k3/3p4/8/4P3/8/8/8/4K3").unwrap();
        board
            .apply_move(coord("d7"), coord("d5"), MoveCategory::Regular, None)
            .unwrap();
        let after_double_step = board.clone();

        let applied = board
            .apply_move(coord("e5"), coord("d6"), MoveCategory::Capture, None)
            .unwrap();
        assert!(applied.is_en_passant());
        assert_eq!(applied.captured_at(), Some(coord("d5")));
        assert!(board.is_empty(coord("d5")));
        assert!(board.is_empty(coord("e5")));
        assert!(board.square(coord("d6")).holds(PieceType::Pawn, Colour::White));

        board.rollback(applied);
        assert_eq!(board, after_double_step);
        assert_eq!(board.last_moved(), Some(coord("d5")));
    }

    #[test]
    fn capture_onto_empty_square_is_notation_error() {
        let mut board = Board::from_placement("4k3/8/8/8/4P3/8/8/4K3").unwrap();
        let before = board.clone();
        let result = board.apply_move(coord("e4"), coord("d5"), MoveCategory::Capture, None);
        assert!(matches!(result, Err(RulesError::Notation(_))));
        assert_eq!(board, before);
    }

    #[test]
    fn regular_onto_occupied_square_is_notation_error() {
        let mut board = Board::from_placement("4k3/8/8/4p3/4P3/8/8/4K3").unwrap();
        let before = board.clone();
        let result = board.apply_move(coord("e4"), coord("e5"), MoveCategory::Regular, None);
        assert!(matches!(result, Err(RulesError::Notation(_))));
        assert_eq!(board, before);
    }

    #[test]
    fn promotion_and_rollback() {
        let mut board = Board::from_placement("4k3/P7/8/8/8/8/8/4K3").unwrap();
        let before = board.clone();
        let applied = board
            .apply_move(
                coord("a7"),
                coord("a8"),
                MoveCategory::Regular,
                Some(PieceType::Queen),
            )
            .unwrap();
        assert!(board.square(coord("a8")).holds(PieceType::Queen, Colour::White));
        assert_eq!(applied.promoted_to(), Some(PieceType::Queen));

        board.rollback(applied);
        assert_eq!(board, before);
    }

    #[test]
    fn castle_and_rollback() {
        let mut board = Board::from_placement("4k3/8/8/8/8/8/8/4K2R").unwrap();
        let before = board.clone();
        let applied = board.apply_castle(coord("e1"), coord("g1"), coord("h1"), coord("f1"));
        assert!(board.square(coord("g1")).holds(PieceType::King, Colour::White));
        assert!(board.square(coord("f1")).holds(PieceType::Rook, Colour::White));
        assert_eq!(board.last_moved(), Some(coord("g1")));

        board.rollback(applied);
        assert_eq!(board, before);
    }

    #[test]
    fn back_rank_mate() {
        let mut board = Board::from_placement("3Q2k1/5ppp/8/8/8/8/8/6K1").unwrap();
        let before = board.clone();
        assert!(board.king_is_in_check(Colour::Black));
        assert!(board.check_for_checkmate(Colour::Black));
        assert_eq!(board, before);
    }

    #[test]
    fn fools_mate() {
        let mut board =
            Board::from_placement("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR").unwrap();
        assert!(board.check_for_checkmate(Colour::White));
    }

    #[test]
    fn check_with_escape_is_not_mate() {
        let mut board = Board::from_placement("R3k3/8/8/8/8/8/8/4K3").unwrap();
        assert!(board.king_is_in_check(Colour::Black));
        assert!(!board.check_for_checkmate(Colour::Black));
    }

    #[test]
    fn capturing_the_checker_is_an_escape() {
        let mut board = Board::from_placement("3Q2k1/5ppp/8/8/8/8/8/3r2K1").unwrap();
        assert!(board.king_is_in_check(Colour::Black));
        assert!(!board.check_for_checkmate(Colour::Black));
    }

    #[test]
    fn interposing_is_an_escape() {
        let mut board = Board::from_placement("3Q2k1/5ppp/8/8/8/8/8/4r1K1").unwrap();
        assert!(!board.check_for_checkmate(Colour::Black));
    }

    /// Every (origin, destination, category) the resolver offers White.
    fn white_moves(board: &Board) -> Vec<(Coord, Coord, MoveCategory)> {
        let mut moves = Vec::new();
        for destination in Coord::all() {
            for piece_type in PieceType::ALL {
                for category in [MoveCategory::Regular, MoveCategory::Capture] {
                    if let Ok(origins) =
                        board.find_origin_squares(piece_type, destination, category, Colour::White)
                    {
                        moves.extend(origins.iter().map(|s| (s.coord(), destination, category)));
                    }
                }
            }
        }
        moves
    }

    proptest! {
        #[test]
        fn rollback_restores_board_exactly(pick in any::<prop::sample::Index>()) {
            let mut board = Board::from_placement(
                "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R",
            )
            .unwrap();
            board
                .apply_move(coord("c7"), coord("c5"), MoveCategory::Regular, None)
                .unwrap();
            let before = board.clone();
            let moves = white_moves(&board);
            prop_assume!(!moves.is_empty());
            let (origin, destination, category) = moves[pick.index(moves.len())];
            if let Ok(applied) = board.apply_move(origin, destination, category, None) {
                board.rollback(applied);
            }
            prop_assert_eq!(board, before);
        }
    }
}
