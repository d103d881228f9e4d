//! Piece types and the stateful piece value that occupies a square.

use crate::{Colour, MoveCategory};

/// Longest distance any piece can travel in one move.
pub const BOARD_SPAN: u8 = 7;

/// The kinds of occupant a square can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceType {
    Empty = 0,
    Pawn = 1,
    Rook = 2,
    Bishop = 3,
    Queen = 4,
    Knight = 5,
    King = 6,
}

impl PieceType {
    /// All non-empty piece types.
    pub const ALL: [PieceType; 6] = [
        PieceType::Pawn,
        PieceType::Rook,
        PieceType::Bishop,
        PieceType::Queen,
        PieceType::Knight,
        PieceType::King,
    ];

    /// Piece types a pawn may promote to.
    pub const PROMOTIONS: [PieceType; 4] = [
        PieceType::Queen,
        PieceType::Rook,
        PieceType::Bishop,
        PieceType::Knight,
    ];

    /// Returns the notation letter for this type with the given colour.
    ///
    /// White is uppercase, Black lowercase. `Empty` has no letter.
    pub const fn to_fen_char(self, colour: Colour) -> Option<char> {
        let c = match self {
            PieceType::Empty => return None,
            PieceType::Pawn => 'p',
            PieceType::Rook => 'r',
            PieceType::Bishop => 'b',
            PieceType::Queen => 'q',
            PieceType::Knight => 'n',
            PieceType::King => 'k',
        };
        match colour {
            Colour::White => Some(c.to_ascii_uppercase()),
            Colour::Black | Colour::Blank => Some(c),
        }
    }

    /// Parses a notation letter into a piece type and colour.
    pub const fn from_fen_char(c: char) -> Option<(PieceType, Colour)> {
        let colour = if c.is_ascii_uppercase() {
            Colour::White
        } else {
            Colour::Black
        };
        let piece_type = match c.to_ascii_lowercase() {
            'p' => PieceType::Pawn,
            'r' => PieceType::Rook,
            'b' => PieceType::Bishop,
            'q' => PieceType::Queen,
            'n' => PieceType::Knight,
            'k' => PieceType::King,
            _ => return None,
        };
        Some((piece_type, colour))
    }

    /// Returns true if a pawn may become this type.
    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceType::Queen | PieceType::Rook | PieceType::Bishop | PieceType::Knight
        )
    }

    /// Initial `(move_limit, capture_limit)` for a fresh piece of this type.
    const fn initial_limits(self) -> (u8, u8) {
        match self {
            PieceType::Pawn => (2, 1),
            PieceType::King => (1, 1),
            _ => (BOARD_SPAN, BOARD_SPAN),
        }
    }
}

impl std::fmt::Display for PieceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceType::Empty => "empty",
            PieceType::Pawn => "pawn",
            PieceType::Rook => "rook",
            PieceType::Bishop => "bishop",
            PieceType::Queen => "queen",
            PieceType::Knight => "knight",
            PieceType::King => "king",
        };
        write!(f, "{}", name)
    }
}

/// A piece together with the movement state it accumulates during a game.
///
/// Counters change only through [`advance`](Piece::advance),
/// [`retreat`](Piece::retreat), [`promote_to`](Piece::promote_to) and
/// [`demote`](Piece::demote).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    piece_type: PieceType,
    colour: Colour,
    move_limit: u8,
    capture_limit: u8,
    moves_made: u32,
    last_moved: bool,
}

impl Piece {
    /// Creates an unmoved piece. An `Empty` type always yields the blank piece.
    pub const fn new(piece_type: PieceType, colour: Colour) -> Self {
        if matches!(piece_type, PieceType::Empty) || !colour.is_side() {
            return Self::empty();
        }
        let (move_limit, capture_limit) = piece_type.initial_limits();
        Piece {
            piece_type,
            colour,
            move_limit,
            capture_limit,
            moves_made: 0,
            last_moved: false,
        }
    }

    /// The occupant of a vacant square.
    pub const fn empty() -> Self {
        Piece {
            piece_type: PieceType::Empty,
            colour: Colour::Blank,
            move_limit: BOARD_SPAN,
            capture_limit: BOARD_SPAN,
            moves_made: 0,
            last_moved: false,
        }
    }

    #[inline]
    pub const fn piece_type(&self) -> PieceType {
        self.piece_type
    }

    #[inline]
    pub const fn colour(&self) -> Colour {
        self.colour
    }

    /// Distance this piece may travel on a `Regular` move.
    #[inline]
    pub const fn move_limit(&self) -> u8 {
        self.move_limit
    }

    /// Distance this piece may travel on a `Capture` move.
    #[inline]
    pub const fn capture_limit(&self) -> u8 {
        self.capture_limit
    }

    /// Distance allowed for the given move category.
    ///
    /// Castling distances are fixed by the castling rules, so they report
    /// the regular limit.
    #[inline]
    pub const fn limit(&self, category: MoveCategory) -> u8 {
        match category {
            MoveCategory::Capture => self.capture_limit,
            _ => self.move_limit,
        }
    }

    #[inline]
    pub const fn moves_made(&self) -> u32 {
        self.moves_made
    }

    #[inline]
    pub const fn has_moved(&self) -> bool {
        self.moves_made > 0
    }

    /// True only for the piece that moved on the immediately preceding turn.
    #[inline]
    pub const fn last_moved(&self) -> bool {
        self.last_moved
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self.piece_type, PieceType::Empty)
    }

    /// Returns true if this piece has the given type and colour.
    #[inline]
    pub fn is(&self, piece_type: PieceType, colour: Colour) -> bool {
        self.piece_type == piece_type && self.colour == colour
    }

    /// Records a completed move. A pawn loses its double step permanently.
    pub fn advance(&mut self) {
        self.moves_made += 1;
        self.last_moved = true;
        if self.piece_type == PieceType::Pawn {
            self.move_limit = 1;
        }
    }

    /// Reverses [`advance`](Piece::advance).
    pub fn retreat(&mut self) {
        self.moves_made = self.moves_made.saturating_sub(1);
        self.last_moved = false;
        if self.piece_type == PieceType::Pawn && self.moves_made == 0 {
            self.move_limit = 2;
        }
    }

    /// Sets or clears the last-moved marker without touching the move count.
    #[inline]
    pub fn set_last_moved(&mut self, last_moved: bool) {
        self.last_moved = last_moved;
    }

    /// Turns this piece into `piece_type`, keeping its colour and history.
    pub fn promote_to(&mut self, piece_type: PieceType) {
        let (move_limit, capture_limit) = piece_type.initial_limits();
        self.piece_type = piece_type;
        self.move_limit = move_limit;
        self.capture_limit = capture_limit;
    }

    /// Reverses [`promote_to`](Piece::promote_to), restoring a moved pawn.
    pub fn demote(&mut self) {
        self.piece_type = PieceType::Pawn;
        self.capture_limit = 1;
        self.move_limit = if self.moves_made == 0 { 2 } else { 1 };
    }
}

impl Default for Piece {
    fn default() -> Self {
        Self::empty()
    }
}
