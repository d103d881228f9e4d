//! Board coordinates and disambiguation hints.

use std::fmt;

/// A file (column) on the chess board, from A to H.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum File {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl File {
    /// All files in order.
    pub const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];

    /// Creates a file from index (0-7).
    #[inline]
    pub const fn from_index(index: i8) -> Option<Self> {
        if index >= 0 && index < 8 {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// Creates a file from a character ('a'-'h' or 'A'-'H').
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        let c = c.to_ascii_lowercase();
        if c >= 'a' && c <= 'h' {
            Self::from_index((c as u8 - b'a') as i8)
        } else {
            None
        }
    }

    /// Returns the index (0-7).
    #[inline]
    pub const fn index(self) -> i8 {
        self as i8
    }

    /// Returns the character representation.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'a' + self as u8) as char
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A rank (row) on the chess board, from 1 to 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Rank {
    R1 = 0,
    R2 = 1,
    R3 = 2,
    R4 = 3,
    R5 = 4,
    R6 = 5,
    R7 = 6,
    R8 = 7,
}

impl Rank {
    /// All ranks in order.
    pub const ALL: [Rank; 8] = [
        Rank::R1,
        Rank::R2,
        Rank::R3,
        Rank::R4,
        Rank::R5,
        Rank::R6,
        Rank::R7,
        Rank::R8,
    ];

    /// Creates a rank from index (0-7).
    #[inline]
    pub const fn from_index(index: i8) -> Option<Self> {
        if index >= 0 && index < 8 {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// Creates a rank from a character ('1'-'8').
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        if c >= '1' && c <= '8' {
            Self::from_index((c as u8 - b'1') as i8)
        } else {
            None
        }
    }

    /// Returns the index (0-7).
    #[inline]
    pub const fn index(self) -> i8 {
        self as i8
    }

    /// Returns the character representation.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'1' + self as u8) as char
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A location on the board.
///
/// Indexed rank-major from a1 = 0 to h8 = 63.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord(u8);

impl Coord {
    /// Creates a coordinate from file and rank.
    #[inline]
    pub const fn new(file: File, rank: Rank) -> Self {
        Coord((rank.index() * 8 + file.index()) as u8)
    }

    /// Creates a coordinate from signed file and rank indices, or `None` off the board.
    #[inline]
    pub const fn from_indices(file: i8, rank: i8) -> Option<Self> {
        if file >= 0 && file < 8 && rank >= 0 && rank < 8 {
            Some(Coord((rank * 8 + file) as u8))
        } else {
            None
        }
    }

    /// Creates a coordinate from index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Coord(index))
        } else {
            None
        }
    }

    /// Parses a coordinate from algebraic notation (e.g., "e4").
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = match File::from_char(bytes[0] as char) {
            Some(f) => f,
            None => return None,
        };
        let rank = match Rank::from_char(bytes[1] as char) {
            Some(r) => r,
            None => return None,
        };
        Some(Coord::new(file, rank))
    }

    /// Iterates all 64 coordinates, a1 first.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..64).map(Coord)
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn file_index(self) -> i8 {
        (self.0 % 8) as i8
    }

    #[inline]
    pub const fn rank_index(self) -> i8 {
        (self.0 / 8) as i8
    }

    /// Returns the file of this coordinate.
    #[inline]
    pub const fn file(self) -> File {
        File::ALL[(self.0 % 8) as usize]
    }

    /// Returns the rank of this coordinate.
    #[inline]
    pub const fn rank(self) -> Rank {
        Rank::ALL[(self.0 / 8) as usize]
    }

    /// Shifts by the given file and rank deltas, or `None` off the board.
    #[inline]
    pub const fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Self> {
        Self::from_indices(self.file_index() + file_delta, self.rank_index() + rank_delta)
    }

    /// Returns the algebraic notation for this coordinate.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.file(), self.rank())
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coord({})", self.to_algebraic())
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

/// A subset of files used to narrow down candidate origins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileSet(u8);

impl FileSet {
    pub const ANY: FileSet = FileSet(0xFF);

    /// A set holding exactly one file.
    #[inline]
    pub const fn only(file: File) -> Self {
        FileSet(1 << file.index())
    }

    /// Adds a file to the set.
    #[inline]
    pub const fn with(self, file: File) -> Self {
        FileSet(self.0 | (1 << file.index()))
    }

    #[inline]
    pub const fn contains(self, file: File) -> bool {
        self.0 & (1 << file.index()) != 0
    }

    #[inline]
    pub const fn is_any(self) -> bool {
        self.0 == 0xFF
    }
}

impl Default for FileSet {
    fn default() -> Self {
        Self::ANY
    }
}

impl From<File> for FileSet {
    fn from(file: File) -> Self {
        Self::only(file)
    }
}

/// A subset of ranks used to narrow down candidate origins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RankSet(u8);

impl RankSet {
    pub const ANY: RankSet = RankSet(0xFF);

    /// A set holding exactly one rank.
    #[inline]
    pub const fn only(rank: Rank) -> Self {
        RankSet(1 << rank.index())
    }

    /// Adds a rank to the set.
    #[inline]
    pub const fn with(self, rank: Rank) -> Self {
        RankSet(self.0 | (1 << rank.index()))
    }

    #[inline]
    pub const fn contains(self, rank: Rank) -> bool {
        self.0 & (1 << rank.index()) != 0
    }

    #[inline]
    pub const fn is_any(self) -> bool {
        self.0 == 0xFF
    }
}

impl Default for RankSet {
    fn default() -> Self {
        Self::ANY
    }
}

impl From<Rank> for RankSet {
    fn from(rank: Rank) -> Self {
        Self::only(rank)
    }
}
