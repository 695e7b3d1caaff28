//! Board and occupancy queries

use crate::geometry;
use crate::types::{Cell, Color, File, Piece, Rank, Square};

use std::fmt::{self, Display};
use std::str::FromStr;

use thiserror::Error;

/// Error parsing the FEN piece-placement field
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum CellsParseError {
    /// Rank is too large
    #[error("too many items in rank {0}")]
    RankOverflow(Rank),
    /// Rank is too small
    #[error("not enough items in rank {0}")]
    RankUnderflow(Rank),
    /// Too many ranks
    #[error("too many ranks")]
    Overflow,
    /// Not enough ranks
    #[error("not enough ranks")]
    Underflow,
    /// Unexpected character
    #[error("unexpected char {0:?}")]
    UnexpectedChar(char),
}

/// 8x8 grid of optional occupants
///
/// The board is the sole source of truth for which square holds which piece.
/// It knows nothing about turns, castling rights or move history; those live
/// in [`Game`](crate::game::Game) and [`MoveLog`](crate::log::MoveLog).
///
/// # Example
///
/// ```
/// # use woodpusher::{Board, Cell, Color, File, Piece, Rank, Square};
/// #
/// let b = Board::initial();
/// assert_eq!(
///     b.get2(File::E, Rank::R1),
///     Cell::from_parts(Color::White, Piece::King)
/// );
/// assert!(b.is_free(Square::from_parts(File::E, Rank::R4)));
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    cells: [Cell; 64],
}

impl Board {
    /// Returns a board with no pieces on it
    #[inline]
    pub const fn empty() -> Board {
        Board {
            cells: [Cell::EMPTY; 64],
        }
    }

    /// Returns a board with the standard initial position, 32 pieces total
    pub fn initial() -> Board {
        let mut res = Board::empty();
        for file in File::iter() {
            res.put2(file, Rank::R2, Cell::from_parts(Color::White, Piece::Pawn));
            res.put2(file, Rank::R7, Cell::from_parts(Color::Black, Piece::Pawn));
        }
        for color in [Color::White, Color::Black] {
            let rank = geometry::back_rank(color);
            res.put2(File::A, rank, Cell::from_parts(color, Piece::Rook));
            res.put2(File::B, rank, Cell::from_parts(color, Piece::Knight));
            res.put2(File::C, rank, Cell::from_parts(color, Piece::Bishop));
            res.put2(File::D, rank, Cell::from_parts(color, Piece::Queen));
            res.put2(File::E, rank, Cell::from_parts(color, Piece::King));
            res.put2(File::F, rank, Cell::from_parts(color, Piece::Bishop));
            res.put2(File::G, rank, Cell::from_parts(color, Piece::Knight));
            res.put2(File::H, rank, Cell::from_parts(color, Piece::Rook));
        }
        res
    }

    /// Parses a board from the FEN piece-placement field
    ///
    /// Does the same as [`Board::from_str`]. It is recommended to use this
    /// function instead of `from_str()` for better readability.
    #[inline]
    pub fn from_fen(fen: &str) -> Result<Board, CellsParseError> {
        Board::from_str(fen)
    }

    /// Returns the contents of the square `sq`
    #[inline]
    pub fn get(&self, sq: Square) -> Cell {
        self.cells[sq.index()]
    }

    /// Returns the contents of the square with file `file` and rank `rank`
    #[inline]
    pub fn get2(&self, file: File, rank: Rank) -> Cell {
        self.get(Square::from_parts(file, rank))
    }

    /// Puts `cell` onto the square `sq`
    #[inline]
    pub fn put(&mut self, sq: Square, cell: Cell) {
        self.cells[sq.index()] = cell;
    }

    /// Puts `cell` onto the square with file `file` and rank `rank`
    #[inline]
    pub fn put2(&mut self, file: File, rank: Rank, cell: Cell) {
        self.put(Square::from_parts(file, rank), cell);
    }

    /// Returns `true` if the square `sq` holds no piece
    #[inline]
    pub fn is_free(&self, sq: Square) -> bool {
        self.get(sq).is_empty()
    }

    /// Returns `true` if the square `sq` holds a piece of the color opposing `c`
    #[inline]
    pub fn is_enemy(&self, sq: Square, c: Color) -> bool {
        self.get(sq).color() == Some(c.inv())
    }

    /// Enumerates all pieces of color `c` in board scan order
    ///
    /// The order is stable (a1 through h8) but carries no meaning beyond
    /// determinism.
    pub fn pieces_of(&self, c: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(move |sq| {
            let cell = self.get(sq);
            match (cell.color(), cell.piece()) {
                (Some(color), Some(piece)) if color == c => Some((sq, piece)),
                _ => None,
            }
        })
    }

    /// Returns the position of the king of color `c`, or `None` if it is not
    /// on the board
    ///
    /// The king can only be absent on hand-built positions; under normal play
    /// both kings are always present.
    pub fn king_pos(&self, c: Color) -> Option<Square> {
        let king = Cell::from_parts(c, Piece::King);
        Square::iter().find(|sq| self.get(*sq) == king)
    }

    /// Wraps the board to allow pretty-printing with the given style
    ///
    /// The resulting wrapper implements [`fmt::Display`], so it can be used
    /// with `write!()`, `println!()`, or `ToString::to_string`.
    ///
    /// # Example
    ///
    /// ```
    /// # use woodpusher::board::PrettyStyle;
    /// # use woodpusher::Board;
    /// #
    /// let b = Board::initial();
    ///
    /// let res = r#"
    /// 8|rnbqkbnr
    /// 7|pppppppp
    /// 6|........
    /// 5|........
    /// 4|........
    /// 3|........
    /// 2|PPPPPPPP
    /// 1|RNBQKBNR
    /// -+--------
    ///  |abcdefgh
    /// "#;
    /// assert_eq!(b.pretty(PrettyStyle::Ascii).to_string().trim(), res.trim());
    /// ```
    #[inline]
    pub fn pretty(&self, style: PrettyStyle) -> Pretty<'_> {
        Pretty { board: self, style }
    }

    /// Converts the board into its FEN piece-placement field
    ///
    /// Does the same as `Board::to_string()`. It is recommended to use this
    /// function instead of `to_string()` for better readability.
    #[inline]
    pub fn as_fen(&self) -> String {
        self.to_string()
    }
}

impl Default for Board {
    #[inline]
    fn default() -> Board {
        Board::empty()
    }
}

/// Style for [`Board::pretty()`]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PrettyStyle {
    /// Print pieces and frames as ASCII characters
    Ascii,
    /// Print pieces and frames as fancy Unicode characters
    Utf8,
}

/// Wrapper to pretty-print the board
///
/// See docs for [`Board::pretty()`] for more details.
pub struct Pretty<'a> {
    board: &'a Board,
    style: PrettyStyle,
}

fn parse_cells(s: &str) -> Result<[Cell; 64], CellsParseError> {
    type Error = CellsParseError;

    // FEN lists ranks from 8 down to 1.
    let mut file = 0_usize;
    let mut row = 0_usize;
    let mut cells = [Cell::EMPTY; 64];
    for b in s.bytes() {
        match b {
            b'1'..=b'8' => {
                let add = (b - b'0') as usize;
                if file + add > 8 {
                    return Err(Error::RankOverflow(Rank::from_index(7 - row)));
                }
                file += add;
            }
            b'/' => {
                if file < 8 {
                    return Err(Error::RankUnderflow(Rank::from_index(7 - row)));
                }
                row += 1;
                file = 0;
                if row >= 8 {
                    return Err(Error::Overflow);
                }
            }
            _ => {
                if file >= 8 {
                    return Err(Error::RankOverflow(Rank::from_index(7 - row)));
                }
                let sq = Square::from_parts(File::from_index(file), Rank::from_index(7 - row));
                cells[sq.index()] =
                    Cell::from_char(b as char).ok_or(Error::UnexpectedChar(b as char))?;
                file += 1;
            }
        };
    }

    if file < 8 {
        return Err(Error::RankUnderflow(Rank::from_index(7 - row)));
    }
    if row < 7 {
        return Err(Error::Underflow);
    }

    Ok(cells)
}

impl FromStr for Board {
    type Err = CellsParseError;

    fn from_str(s: &str) -> Result<Board, Self::Err> {
        Ok(Board {
            cells: parse_cells(s)?,
        })
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        for (row, rank) in Rank::iter().rev().enumerate() {
            if row != 0 {
                write!(f, "/")?;
            }
            let mut empty = 0;
            for file in File::iter() {
                let cell = self.get2(file, rank);
                if cell.is_empty() {
                    empty += 1;
                    continue;
                }
                if empty != 0 {
                    write!(f, "{}", (b'0' + empty) as char)?;
                    empty = 0;
                }
                write!(f, "{}", cell)?;
            }
            if empty != 0 {
                write!(f, "{}", (b'0' + empty) as char)?;
            }
        }
        Ok(())
    }
}

trait StyleTable {
    const HORZ_FRAME: char;
    const VERT_FRAME: char;
    const ANGLE_FRAME: char;

    fn cell(c: Cell) -> char;

    fn fmt(b: &Board, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        for rank in Rank::iter().rev() {
            write!(f, "{}{}", rank, Self::VERT_FRAME)?;
            for file in File::iter() {
                write!(f, "{}", Self::cell(b.get2(file, rank)))?;
            }
            writeln!(f)?;
        }
        write!(f, "{}{}", Self::HORZ_FRAME, Self::ANGLE_FRAME)?;
        for _ in File::iter() {
            write!(f, "{}", Self::HORZ_FRAME)?;
        }
        writeln!(f)?;
        write!(f, " {}", Self::VERT_FRAME)?;
        for file in File::iter() {
            write!(f, "{}", file)?;
        }
        writeln!(f)?;
        Ok(())
    }
}

struct AsciiStyleTable;
struct Utf8StyleTable;

impl StyleTable for AsciiStyleTable {
    const HORZ_FRAME: char = '-';
    const VERT_FRAME: char = '|';
    const ANGLE_FRAME: char = '+';

    fn cell(c: Cell) -> char {
        c.as_char()
    }
}

impl StyleTable for Utf8StyleTable {
    const HORZ_FRAME: char = '─';
    const VERT_FRAME: char = '│';
    const ANGLE_FRAME: char = '┼';

    fn cell(c: Cell) -> char {
        c.as_utf8_char()
    }
}

impl<'a> Display for Pretty<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self.style {
            PrettyStyle::Ascii => AsciiStyleTable::fmt(self.board, f),
            PrettyStyle::Utf8 => Utf8StyleTable::fmt(self.board, f),
        }
    }
}
