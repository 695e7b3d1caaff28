//! Move records and the append-only move log
//!
//! The log is the source of castling-rights facts: "this king has moved" and
//! "that side's rook has moved" are answered by scanning history, never by
//! stored flags.

use crate::types::{CastlingSide, Color, File, Piece, Square};

use std::fmt;

/// Record of one executed move
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MoveRecord {
    /// Turn number at the time of the move
    pub id: u16,
    pub color: Color,
    pub piece: Piece,
    pub src: Square,
    pub dst: Square,
    /// Side tag of a moving rook, derived from its source file
    ///
    /// A rook leaving the `a` file is tagged queenside, one leaving the `h`
    /// file kingside. Any other rook, a promoted one included, carries no tag
    /// and therefore never figures in castling-rights derivation.
    pub rook_side: Option<CastlingSide>,
}

impl MoveRecord {
    pub fn new(id: u16, color: Color, piece: Piece, src: Square, dst: Square) -> MoveRecord {
        let rook_side = match (piece, src.file()) {
            (Piece::Rook, File::A) => Some(CastlingSide::Queen),
            (Piece::Rook, File::H) => Some(CastlingSide::King),
            _ => None,
        };
        MoveRecord {
            id,
            color,
            piece,
            src,
            dst,
            rook_side,
        }
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}. {} {:?} {}{}", self.id, self.color, self.piece, self.src, self.dst)
    }
}

/// Ordered history of executed moves, append-only during play
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveLog {
    records: Vec<MoveRecord>,
}

impl MoveLog {
    pub fn new() -> MoveLog {
        MoveLog::default()
    }

    pub fn push(&mut self, record: MoveRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&MoveRecord> {
        self.records.get(idx)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord> {
        self.records.iter()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Returns `true` if the log holds any move of `color`'s king
    pub fn king_has_moved(&self, color: Color) -> bool {
        self.records
            .iter()
            .any(|r| r.color == color && r.piece == Piece::King)
    }

    /// Returns `true` if the log holds any move of a `color` rook tagged with
    /// `side`
    pub fn rook_has_moved(&self, color: Color, side: CastlingSide) -> bool {
        self.records
            .iter()
            .any(|r| r.color == color && r.piece == Piece::Rook && r.rook_side == Some(side))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn sq(s: &str) -> Square {
        Square::from_str(s).unwrap()
    }

    #[test]
    fn test_rook_side_tags() {
        let r = MoveRecord::new(1, Color::White, Piece::Rook, sq("a1"), sq("a4"));
        assert_eq!(r.rook_side, Some(CastlingSide::Queen));

        let r = MoveRecord::new(1, Color::Black, Piece::Rook, sq("h8"), sq("f8"));
        assert_eq!(r.rook_side, Some(CastlingSide::King));

        // A rook off the corner files carries no tag
        let r = MoveRecord::new(3, Color::White, Piece::Rook, sq("d4"), sq("d8"));
        assert_eq!(r.rook_side, None);

        // Non-rooks never carry one, whatever the file
        let r = MoveRecord::new(1, Color::White, Piece::Queen, sq("a1"), sq("a4"));
        assert_eq!(r.rook_side, None);
    }

    #[test]
    fn test_derived_rights() {
        let mut log = MoveLog::new();
        assert!(!log.king_has_moved(Color::White));
        assert!(!log.rook_has_moved(Color::White, CastlingSide::Queen));

        log.push(MoveRecord::new(1, Color::White, Piece::Rook, sq("a1"), sq("a3")));
        assert!(log.rook_has_moved(Color::White, CastlingSide::Queen));
        assert!(!log.rook_has_moved(Color::White, CastlingSide::King));
        assert!(!log.rook_has_moved(Color::Black, CastlingSide::Queen));
        assert!(!log.king_has_moved(Color::White));

        log.push(MoveRecord::new(1, Color::Black, Piece::King, sq("e8"), sq("e7")));
        assert!(log.king_has_moved(Color::Black));
        assert!(!log.king_has_moved(Color::White));

        log.clear();
        assert!(log.is_empty());
        assert!(!log.rook_has_moved(Color::White, CastlingSide::Queen));
    }

    #[test]
    fn test_untagged_rook_never_counts() {
        // A promoted rook moving off e8 must not revoke anything
        let mut log = MoveLog::new();
        log.push(MoveRecord::new(9, Color::White, Piece::Rook, sq("e8"), sq("e4")));
        assert!(!log.rook_has_moved(Color::White, CastlingSide::Queen));
        assert!(!log.rook_has_moved(Color::White, CastlingSide::King));
    }
}
