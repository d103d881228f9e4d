//! The authoritative 8x8 grid.

use crate::neighbours::BoardView;
use crate::{RulesError, Square};
use chess_types::{
    Colour, Coord, File, FileSet, Orientation, Piece, PieceType, Placement, Rank, RankSet,
};

/// The board: 64 squares, every one always present.
///
/// Vacant squares hold the empty piece, never a missing entry. The board owns
/// every mutation; callers only see shared references to its squares.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Square; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates a board with no pieces.
    pub fn new() -> Self {
        let mut squares = [Square::new(Coord::new(File::A, Rank::R1)); 64];
        for coord in Coord::all() {
            squares[coord.index()] = Square::new(coord);
        }
        Board { squares }
    }

    /// Creates the standard starting position.
    pub fn startpos() -> Self {
        Self::from_layout(&Placement::default())
    }

    /// Creates a board from a placement string such as
    /// `"rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"`.
    pub fn from_placement(placement: &str) -> Result<Self, RulesError> {
        Self::from_placement_with(placement, Orientation::Fen)
    }

    /// Creates a board from a placement string laid out in `orientation`.
    pub fn from_placement_with(
        placement: &str,
        orientation: Orientation,
    ) -> Result<Self, RulesError> {
        let layout = Placement::parse_with(placement, orientation)?;
        Ok(Self::from_layout(&layout))
    }

    /// Creates a board holding the pieces of a parsed layout, all unmoved.
    pub fn from_layout(layout: &Placement) -> Self {
        let mut board = Self::new();
        for &(coord, piece_type, colour) in layout.pieces() {
            board.place(coord, Piece::new(piece_type, colour));
        }
        board
    }

    /// Returns the placement string for the current layout.
    pub fn to_placement(&self) -> String {
        self.layout().to_string()
    }

    pub fn to_placement_with(&self, orientation: Orientation) -> String {
        self.layout().to_string_with(orientation)
    }

    /// Returns the occupied squares as a layout.
    pub fn layout(&self) -> Placement {
        Placement::from_pieces(
            self.squares
                .iter()
                .filter(|s| !s.is_empty())
                .map(|s| (s.coord(), s.piece().piece_type(), s.piece().colour())),
        )
    }

    /// Returns the square at `coord`.
    #[inline]
    pub fn square(&self, coord: Coord) -> &Square {
        &self.squares[coord.index()]
    }

    #[inline]
    pub(crate) fn square_mut(&mut self, coord: Coord) -> &mut Square {
        &mut self.squares[coord.index()]
    }

    /// Returns the piece at `coord`.
    #[inline]
    pub fn piece(&self, coord: Coord) -> &Piece {
        self.square(coord).piece()
    }

    #[inline]
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.square(coord).is_empty()
    }

    /// Iterates every square, a1 first.
    pub fn squares(&self) -> impl Iterator<Item = &Square> {
        self.squares.iter()
    }

    /// Puts `piece` on `coord` with no legality checks.
    pub fn place(&mut self, coord: Coord, piece: Piece) {
        self.square_mut(coord).replace(piece);
    }

    /// Clears `coord` with no legality checks.
    pub fn empty(&mut self, coord: Coord) {
        self.square_mut(coord).take();
    }

    /// Returns the square holding the king of `colour`.
    pub fn find_king(&self, colour: Colour) -> Option<&Square> {
        BoardView::find_king(self, colour)
    }

    /// Returns every square holding a piece of the given type and colour
    /// whose file and rank fall within the hints.
    pub fn find_squares(
        &self,
        piece_type: PieceType,
        colour: Colour,
        files: FileSet,
        ranks: RankSet,
    ) -> Vec<&Square> {
        self.squares
            .iter()
            .filter(|square| {
                square.holds(piece_type, colour)
                    && files.contains(square.coord().file())
                    && ranks.contains(square.coord().rank())
            })
            .collect()
    }

    /// Returns the square of the piece that moved last, if any.
    pub fn last_moved(&self) -> Option<Coord> {
        self.squares
            .iter()
            .find(|square| square.piece().last_moved())
            .map(Square::coord)
    }

    /// Marks the piece on `coord` as the last to move and clears every other marker.
    pub fn set_last_moved(&mut self, coord: Coord) {
        for square in self.squares.iter_mut() {
            let is_target = square.coord() == coord && !square.is_empty();
            square.piece_mut().set_last_moved(is_target);
        }
    }

    /// Clears the last-moved marker on every piece.
    pub fn clear_last_moved(&mut self) {
        for square in self.squares.iter_mut() {
            square.piece_mut().set_last_moved(false);
        }
    }

    /// Returns true if the pawn on `source` may capture en passant onto `destination`.
    ///
    /// The victim sits beside the attacker, on `destination`'s file and
    /// `source`'s rank. It must be an enemy pawn that has moved exactly once,
    /// on the immediately preceding turn, and the attacker must stand on its
    /// colour's en passant rank.
    pub fn is_en_passant_legal(&self, source: Coord, destination: Coord) -> bool {
        let attacker = self.piece(source);
        if attacker.piece_type() != PieceType::Pawn {
            return false;
        }
        if source.rank_index() != attacker.colour().en_passant_rank() {
            return false;
        }
        let Some(victim_coord) = Coord::from_indices(destination.file_index(), source.rank_index())
        else {
            return false;
        };
        let victim = self.piece(victim_coord);
        victim.is(PieceType::Pawn, attacker.colour().opposite())
            && victim.moves_made() == 1
            && victim.last_moved()
    }
}

impl BoardView for Board {
    fn get_square(&self, file: i8, rank: i8) -> Result<&Square, RulesError> {
        Coord::from_indices(file, rank)
            .map(|coord| self.square(coord))
            .ok_or(RulesError::OutOfBounds { file, rank })
    }
}
