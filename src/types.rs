//! Core types: files, ranks, squares, colors and piece kinds

use std::fmt::{self, Display};
use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum SquareParseError {
    #[error("unexpected file char {0:?}")]
    UnexpectedFileChar(char),
    #[error("unexpected rank char {0:?}")]
    UnexpectedRankChar(char),
    #[error("invalid string length")]
    BadLength,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CellParseError {
    #[error("unexpected cell char {0:?}")]
    UnexpectedChar(char),
    #[error("invalid string length")]
    BadLength,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("unexpected color char {0:?}")]
    UnexpectedChar(char),
    #[error("invalid string length")]
    BadLength,
}

/// Vertical line of the board, `a` through `h`
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
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
    pub const fn index(&self) -> usize {
        *self as u8 as usize
    }

    pub const fn from_index(val: usize) -> Self {
        match val {
            0 => File::A,
            1 => File::B,
            2 => File::C,
            3 => File::D,
            4 => File::E,
            5 => File::F,
            6 => File::G,
            7 => File::H,
            _ => panic!("file index must be between 0 and 7"),
        }
    }

    pub fn iter() -> impl DoubleEndedIterator<Item = Self> {
        (0..8).map(Self::from_index)
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'a'..='h' => Some(Self::from_index((u32::from(c) - u32::from('a')) as usize)),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        (b'a' + *self as u8) as char
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.as_char())
    }
}

/// Horizontal line of the board, `1` through `8`
///
/// Rank 1 is White's back rank and has index 0, so rank indices grow in
/// White's forward direction.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
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
    pub const fn index(&self) -> usize {
        *self as u8 as usize
    }

    pub const fn from_index(val: usize) -> Self {
        match val {
            0 => Rank::R1,
            1 => Rank::R2,
            2 => Rank::R3,
            3 => Rank::R4,
            4 => Rank::R5,
            5 => Rank::R6,
            6 => Rank::R7,
            7 => Rank::R8,
            _ => panic!("rank index must be between 0 and 7"),
        }
    }

    pub fn iter() -> impl DoubleEndedIterator<Item = Self> {
        (0..8).map(Self::from_index)
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '1'..='8' => Some(Self::from_index((u32::from(c) - u32::from('1')) as usize)),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        (b'1' + *self as u8) as char
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.as_char())
    }
}

/// Board square, a packed (file, rank) pair
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Square(u8);

impl Square {
    pub const fn from_index(val: usize) -> Square {
        assert!(val < 64, "square index must be between 0 and 63");
        Square(val as u8)
    }

    pub const fn from_parts(file: File, rank: Rank) -> Square {
        Square(((rank as u8) << 3) | file as u8)
    }

    pub const fn file(&self) -> File {
        File::from_index((self.0 & 7) as usize)
    }

    pub const fn rank(&self) -> Rank {
        Rank::from_index((self.0 >> 3) as usize)
    }

    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    /// Shifts the square by the given file and rank deltas, returning `None`
    /// if the result falls off the board.
    ///
    /// This is the sole gate through which generated coordinates pass, so an
    /// off-board candidate is simply absent rather than an error.
    pub fn try_shift(self, delta_file: isize, delta_rank: isize) -> Option<Square> {
        let new_file = self.file().index().wrapping_add(delta_file as usize);
        let new_rank = self.rank().index().wrapping_add(delta_rank as usize);
        if new_file >= 8 || new_rank >= 8 {
            return None;
        }
        Some(Square::from_parts(
            File::from_index(new_file),
            Rank::from_index(new_rank),
        ))
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        (0_u8..64_u8).map(Square)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "Square({})", self)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}{}", self.file().as_char(), self.rank().as_char())
    }
}

impl FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 2 {
            return Err(SquareParseError::BadLength);
        }
        let bytes = s.as_bytes();
        let (file_ch, rank_ch) = (bytes[0] as char, bytes[1] as char);
        Ok(Square::from_parts(
            File::from_char(file_ch).ok_or(SquareParseError::UnexpectedFileChar(file_ch))?,
            Rank::from_char(rank_ch).ok_or(SquareParseError::UnexpectedRankChar(rank_ch))?,
        ))
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    pub const fn inv(&self) -> Color {
        match *self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub fn as_char(&self) -> char {
        match *self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    pub fn from_char(c: char) -> Option<Color> {
        match c {
            'w' => Some(Color::White),
            'b' => Some(Color::Black),
            _ => None,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 1 {
            return Err(ColorParseError::BadLength);
        }
        let ch = s.as_bytes()[0] as char;
        Color::from_char(ch).ok_or(ColorParseError::UnexpectedChar(ch))
    }
}

/// Piece kind, without color
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Piece {
    Pawn = 0,
    Rook = 1,
    Knight = 2,
    Bishop = 3,
    Queen = 4,
    King = 5,
}

impl Piece {
    pub fn iter() -> impl Iterator<Item = Self> {
        [
            Piece::Pawn,
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
        ]
        .into_iter()
    }
}

/// Contents of a single board square: either empty or a colored piece
///
/// Packed into one byte: zero means empty, otherwise bit 3 holds the color
/// and the low three bits hold the piece kind plus one.
#[derive(Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Cell(u8);

impl Cell {
    pub const EMPTY: Cell = Cell(0);

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_occupied(&self) -> bool {
        self.0 != 0
    }

    pub const fn from_parts(c: Color, p: Piece) -> Cell {
        Cell(((c as u8) << 3) | (p as u8 + 1))
    }

    pub const fn color(&self) -> Option<Color> {
        if self.0 == 0 {
            None
        } else if self.0 & 8 == 0 {
            Some(Color::White)
        } else {
            Some(Color::Black)
        }
    }

    pub const fn piece(&self) -> Option<Piece> {
        match self.0 & 7 {
            1 => Some(Piece::Pawn),
            2 => Some(Piece::Rook),
            3 => Some(Piece::Knight),
            4 => Some(Piece::Bishop),
            5 => Some(Piece::Queen),
            6 => Some(Piece::King),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        let ch = match self.piece() {
            None => return '.',
            Some(Piece::Pawn) => 'p',
            Some(Piece::Rook) => 'r',
            Some(Piece::Knight) => 'n',
            Some(Piece::Bishop) => 'b',
            Some(Piece::Queen) => 'q',
            Some(Piece::King) => 'k',
        };
        match self.color() {
            Some(Color::White) => ch.to_ascii_uppercase(),
            _ => ch,
        }
    }

    pub fn as_utf8_char(&self) -> char {
        match (self.color(), self.piece()) {
            (Some(Color::White), Some(Piece::Pawn)) => '♙',
            (Some(Color::White), Some(Piece::Rook)) => '♖',
            (Some(Color::White), Some(Piece::Knight)) => '♘',
            (Some(Color::White), Some(Piece::Bishop)) => '♗',
            (Some(Color::White), Some(Piece::Queen)) => '♕',
            (Some(Color::White), Some(Piece::King)) => '♔',
            (Some(Color::Black), Some(Piece::Pawn)) => '♟',
            (Some(Color::Black), Some(Piece::Rook)) => '♜',
            (Some(Color::Black), Some(Piece::Knight)) => '♞',
            (Some(Color::Black), Some(Piece::Bishop)) => '♝',
            (Some(Color::Black), Some(Piece::Queen)) => '♛',
            (Some(Color::Black), Some(Piece::King)) => '♚',
            _ => '.',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        if c == '.' {
            return Some(Cell::EMPTY);
        }
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let piece = match c.to_ascii_lowercase() {
            'p' => Piece::Pawn,
            'r' => Piece::Rook,
            'n' => Piece::Knight,
            'b' => Piece::Bishop,
            'q' => Piece::Queen,
            'k' => Piece::King,
            _ => return None,
        };
        Some(Cell::from_parts(color, piece))
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "Cell({})", self.as_char())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Cell {
    type Err = CellParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 1 {
            return Err(CellParseError::BadLength);
        }
        let ch = s.as_bytes()[0] as char;
        Cell::from_char(ch).ok_or(CellParseError::UnexpectedChar(ch))
    }
}

/// Side of the board a castle happens on
///
/// Queenside is toward the `a` file, kingside toward the `h` file.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CastlingSide {
    Queen = 0,
    King = 1,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file() {
        for (idx, file) in File::iter().enumerate() {
            assert_eq!(file.index(), idx);
            assert_eq!(File::from_index(idx), file);
        }
        // Printing walks files left to right and ranks top-down
        assert_eq!(File::iter().next(), Some(File::A));
        assert_eq!(File::iter().rev().next(), Some(File::H));
    }

    #[test]
    fn test_rank() {
        for (idx, rank) in Rank::iter().enumerate() {
            assert_eq!(rank.index(), idx);
            assert_eq!(Rank::from_index(idx), rank);
        }
        assert_eq!(Rank::iter().next(), Some(Rank::R1));
        assert_eq!(Rank::iter().rev().next(), Some(Rank::R8));
    }

    #[test]
    fn test_square() {
        let mut squares = Vec::new();
        for rank in Rank::iter() {
            for file in File::iter() {
                let sq = Square::from_parts(file, rank);
                assert_eq!(sq.file(), file);
                assert_eq!(sq.rank(), rank);
                squares.push(sq);
            }
        }
        assert_eq!(squares, Square::iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_square_shift() {
        let a1 = Square::from_parts(File::A, Rank::R1);
        assert_eq!(
            a1.try_shift(1, 2),
            Some(Square::from_parts(File::B, Rank::R3))
        );
        assert_eq!(a1.try_shift(-1, 0), None);
        assert_eq!(a1.try_shift(0, -1), None);
        let h8 = Square::from_parts(File::H, Rank::R8);
        assert_eq!(h8.try_shift(1, 0), None);
        assert_eq!(h8.try_shift(0, 1), None);
        assert_eq!(
            h8.try_shift(-1, -1),
            Some(Square::from_parts(File::G, Rank::R7))
        );
    }

    #[test]
    fn test_cell() {
        assert_eq!(Cell::EMPTY.color(), None);
        assert_eq!(Cell::EMPTY.piece(), None);
        for color in [Color::White, Color::Black] {
            for piece in Piece::iter() {
                let cell = Cell::from_parts(color, piece);
                assert!(cell.is_occupied());
                assert_eq!(cell.color(), Some(color));
                assert_eq!(cell.piece(), Some(piece));
                let s = cell.to_string();
                assert_eq!(Cell::from_str(&s), Ok(cell));
            }
        }
    }

    #[test]
    fn test_square_str() {
        assert_eq!(
            Square::from_parts(File::B, Rank::R4).to_string(),
            "b4".to_string()
        );
        assert_eq!(
            Square::from_str("a1"),
            Ok(Square::from_parts(File::A, Rank::R1))
        );
        assert_eq!(
            Square::from_str("h8"),
            Ok(Square::from_parts(File::H, Rank::R8))
        );
        assert!(Square::from_str("h9").is_err());
        assert!(Square::from_str("i4").is_err());
        assert!(Square::from_str("a12").is_err());
    }
}
