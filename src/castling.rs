//! Castling evaluation
//!
//! Castling rights are derived facts: a side may still castle only while the
//! move log holds no record of its king, nor of a rook carrying that side's
//! tag. On top of the rights, the position itself must cooperate: the king
//! may not be in check, and every square strictly between king and rook must
//! be both empty and unattacked. The attack scan covers all between-squares,
//! including the queenside knight square the king never crosses; the king's
//! own square is covered by the not-in-check precondition.

use crate::attack;
use crate::board::Board;
use crate::log::MoveLog;
use crate::types::{CastlingSide, Color, Square};

use arrayvec::ArrayVec;

/// File deltas from the king to the squares between it and the rook
const QUEENSIDE_BETWEEN: [isize; 3] = [-1, -2, -3];
const KINGSIDE_BETWEEN: [isize; 2] = [1, 2];

/// Returns `true` if `color` is currently permitted to castle on `side`
pub fn castle_allowed(b: &Board, log: &MoveLog, color: Color, side: CastlingSide) -> bool {
    if log.king_has_moved(color) || log.rook_has_moved(color, side) {
        return false;
    }
    let king = match b.king_pos(color) {
        Some(k) => k,
        None => return false,
    };
    if attack::is_cell_attacked(b, king, color.inv()) {
        return false;
    }

    let between: &[isize] = match side {
        CastlingSide::Queen => &QUEENSIDE_BETWEEN,
        CastlingSide::King => &KINGSIDE_BETWEEN,
    };
    for &df in between {
        let sq = match king.try_shift(df, 0) {
            Some(s) => s,
            None => return false,
        };
        if !b.is_free(sq) || attack::is_cell_attacked(b, sq, color.inv()) {
            return false;
        }
    }

    true
}

/// Returns the castling destinations of `color`'s king, queenside first
///
/// Each destination moves the king two files toward the rook. The turn
/// manager appends these to the king's candidate set only for the side to
/// move.
pub fn castle_destinations(b: &Board, log: &MoveLog, color: Color) -> ArrayVec<Square, 2> {
    let mut res = ArrayVec::new();
    let king = match b.king_pos(color) {
        Some(k) => k,
        None => return res,
    };
    if castle_allowed(b, log, color, CastlingSide::Queen) {
        if let Some(dst) = king.try_shift(-2, 0) {
            res.push(dst);
        }
    }
    if castle_allowed(b, log, color, CastlingSide::King) {
        if let Some(dst) = king.try_shift(2, 0) {
            res.push(dst);
        }
    }
    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::MoveRecord;
    use crate::types::Piece;
    use std::str::FromStr;

    fn sq(s: &str) -> Square {
        Square::from_str(s).unwrap()
    }

    #[test]
    fn test_initial_position_blocked() {
        let b = Board::initial();
        let log = MoveLog::new();
        for side in [CastlingSide::Queen, CastlingSide::King] {
            assert!(!castle_allowed(&b, &log, Color::White, side));
            assert!(!castle_allowed(&b, &log, Color::Black, side));
        }
    }

    #[test]
    fn test_kingside_after_clearing() {
        let b = Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQK2R").unwrap();
        let log = MoveLog::new();
        assert!(castle_allowed(&b, &log, Color::White, CastlingSide::King));
        assert!(!castle_allowed(&b, &log, Color::White, CastlingSide::Queen));
        assert_eq!(
            castle_destinations(&b, &log, Color::White).as_slice(),
            &[sq("g1")]
        );
    }

    #[test]
    fn test_queenside_after_clearing() {
        let b = Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/R3KBNR").unwrap();
        let log = MoveLog::new();
        assert!(castle_allowed(&b, &log, Color::White, CastlingSide::Queen));
        assert_eq!(
            castle_destinations(&b, &log, Color::White).as_slice(),
            &[sq("c1")]
        );
    }

    #[test]
    fn test_revoked_by_king_move() {
        let b = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R").unwrap();
        let mut log = MoveLog::new();
        assert!(castle_allowed(&b, &log, Color::White, CastlingSide::King));
        assert!(castle_allowed(&b, &log, Color::Black, CastlingSide::King));

        log.push(MoveRecord::new(1, Color::White, Piece::King, sq("e1"), sq("e2")));
        assert!(!castle_allowed(&b, &log, Color::White, CastlingSide::King));
        assert!(!castle_allowed(&b, &log, Color::White, CastlingSide::Queen));
        // Black's rights are untouched
        assert!(castle_allowed(&b, &log, Color::Black, CastlingSide::King));
    }

    #[test]
    fn test_revoked_by_rook_move() {
        let b = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R").unwrap();
        let mut log = MoveLog::new();

        log.push(MoveRecord::new(1, Color::White, Piece::Rook, sq("h1"), sq("h5")));
        assert!(!castle_allowed(&b, &log, Color::White, CastlingSide::King));
        assert!(castle_allowed(&b, &log, Color::White, CastlingSide::Queen));
    }

    #[test]
    fn test_checked_king_cannot_castle() {
        let b = Board::from_fen("4r3/8/8/8/8/8/8/R3K2R").unwrap();
        let log = MoveLog::new();
        assert!(!castle_allowed(&b, &log, Color::White, CastlingSide::King));
        assert!(!castle_allowed(&b, &log, Color::White, CastlingSide::Queen));
    }

    #[test]
    fn test_attacked_transit_square() {
        // The f-file rook attacks f1, which the king crosses
        let b = Board::from_fen("5r2/8/8/8/8/8/8/R3K2R").unwrap();
        let log = MoveLog::new();
        assert!(!castle_allowed(&b, &log, Color::White, CastlingSide::King));
        assert!(castle_allowed(&b, &log, Color::White, CastlingSide::Queen));
    }

    #[test]
    fn test_attacked_queenside_b_file() {
        // The scan covers every between-square, so an attack on b1 blocks
        // queenside castling even though the king never crosses it.
        let b = Board::from_fen("1r2k3/8/8/8/8/8/8/R3K2R").unwrap();
        let log = MoveLog::new();
        assert!(!castle_allowed(&b, &log, Color::White, CastlingSide::Queen));
        assert!(castle_allowed(&b, &log, Color::White, CastlingSide::King));
    }

    #[test]
    fn test_occupied_between_square() {
        let b = Board::from_fen("r3k2r/8/8/8/8/8/8/RN2K2R").unwrap();
        let log = MoveLog::new();
        assert!(!castle_allowed(&b, &log, Color::White, CastlingSide::Queen));
        assert!(castle_allowed(&b, &log, Color::White, CastlingSide::King));
    }
}
