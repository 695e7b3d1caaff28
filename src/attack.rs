//! Attack and check queries
//!
//! The oracle places hypothetical pieces of each kind on the square in
//! question, with the defender's color, and reuses the pseudo-legal
//! generators: if such a piece would reach an opposing piece whose kind
//! matches the same attack pattern, the square is attacked.

use crate::board::Board;
use crate::geometry;
use crate::movegen;
use crate::types::{Cell, Color, Piece, Square};

/// Returns `true` if any piece of color `attacker` currently threatens `sq`,
/// independent of whose turn it is
pub fn is_cell_attacked(b: &Board, sq: Square, attacker: Color) -> bool {
    let defender = attacker.inv();

    // Diagonal attackers
    for reached in movegen::reach(b, sq, defender, Piece::Bishop) {
        if matches!(b.get(reached).piece(), Some(Piece::Bishop) | Some(Piece::Queen))
            && b.get(reached).color() == Some(attacker)
        {
            return true;
        }
    }

    // Line attackers
    for reached in movegen::reach(b, sq, defender, Piece::Rook) {
        if matches!(b.get(reached).piece(), Some(Piece::Rook) | Some(Piece::Queen))
            && b.get(reached).color() == Some(attacker)
        {
            return true;
        }
    }

    // Knights
    for reached in movegen::reach(b, sq, defender, Piece::Knight) {
        if b.get(reached) == Cell::from_parts(attacker, Piece::Knight) {
            return true;
        }
    }

    // The opposing king
    for reached in movegen::reach(b, sq, defender, Piece::King) {
        if b.get(reached) == Cell::from_parts(attacker, Piece::King) {
            return true;
        }
    }

    // Pawns, on the two diagonals ahead of the defender
    let fwd = geometry::pawn_forward_delta(defender);
    for df in [-1, 1] {
        if let Some(diag) = sq.try_shift(df, fwd) {
            if b.get(diag) == Cell::from_parts(attacker, Piece::Pawn) {
                return true;
            }
        }
    }

    false
}

/// Returns `true` if the king of color `c` is currently attacked
///
/// Returns `false` when that king is not on the board, which can only happen
/// on hand-built positions.
pub fn is_check(b: &Board, c: Color) -> bool {
    match b.king_pos(c) {
        Some(king) => is_cell_attacked(b, king, c.inv()),
        None => false,
    }
}
