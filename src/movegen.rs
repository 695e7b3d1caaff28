//! Pseudo-legal move generation for each piece kind
//!
//! The destinations produced here are valid by piece-movement rules alone and
//! ignore whether the move exposes the mover's own king; that filter belongs
//! to [`legal`](crate::legal) and [`Game`](crate::game::Game). Castling
//! destinations are produced by [`castling`](crate::castling), not here.

use crate::board::Board;
use crate::geometry;
use crate::types::{Color, Piece, Square};

use arrayvec::ArrayVec;

/// List of destination squares for a single piece
///
/// A queen reaches at most 27 squares, so the list never overflows.
pub type DestList = ArrayVec<Square, 32>;

const LINE_DIRS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAG_DIRS: [(isize, isize); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

const KNIGHT_STEPS: [(isize, isize); 8] = [
    (-1, 2),
    (1, 2),
    (-2, 1),
    (-2, -1),
    (2, 1),
    (2, -1),
    (-1, -2),
    (1, -2),
];

const KING_STEPS: [(isize, isize); 8] = [
    (0, 1),
    (0, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (1, 1),
    (-1, -1),
    (1, -1),
];

/// Returns the pseudo-legal destinations of the piece standing on `sq`
///
/// An empty square yields an empty list.
pub fn destinations(b: &Board, sq: Square) -> DestList {
    let cell = b.get(sq);
    match (cell.color(), cell.piece()) {
        (Some(color), Some(piece)) => reach(b, sq, color, piece),
        _ => DestList::new(),
    }
}

/// Returns the squares a piece of the given color and kind would reach from
/// `sq`, whether or not such a piece actually stands there
///
/// The attack oracle relies on this to place hypothetical pieces.
pub(crate) fn reach(b: &Board, sq: Square, color: Color, piece: Piece) -> DestList {
    let mut res = DestList::new();
    match piece {
        Piece::Pawn => pawn(b, sq, color, &mut res),
        Piece::Rook => walk_rays(b, sq, color, &LINE_DIRS, &mut res),
        Piece::Bishop => walk_rays(b, sq, color, &DIAG_DIRS, &mut res),
        Piece::Queen => {
            walk_rays(b, sq, color, &LINE_DIRS, &mut res);
            walk_rays(b, sq, color, &DIAG_DIRS, &mut res);
        }
        Piece::Knight => steps(b, sq, color, &KNIGHT_STEPS, &mut res),
        Piece::King => steps(b, sq, color, &KING_STEPS, &mut res),
    }
    res
}

/// Walks each ray square by square: empties are included and the walk goes
/// on, the first enemy is included and the walk stops, an own piece stops the
/// walk without being included.
fn walk_rays(b: &Board, sq: Square, color: Color, dirs: &[(isize, isize)], res: &mut DestList) {
    for &(df, dr) in dirs {
        let mut cur = sq;
        while let Some(next) = cur.try_shift(df, dr) {
            if b.is_free(next) {
                res.push(next);
                cur = next;
                continue;
            }
            if b.is_enemy(next, color) {
                res.push(next);
            }
            break;
        }
    }
}

fn steps(b: &Board, sq: Square, color: Color, table: &[(isize, isize)], res: &mut DestList) {
    for &(df, dr) in table {
        if let Some(next) = sq.try_shift(df, dr) {
            if b.is_free(next) || b.is_enemy(next, color) {
                res.push(next);
            }
        }
    }
}

fn pawn(b: &Board, sq: Square, color: Color, res: &mut DestList) {
    let fwd = geometry::pawn_forward_delta(color);

    // Single step, and the double step from the home rank when both squares
    // ahead are empty.
    if let Some(one) = sq.try_shift(0, fwd) {
        if b.is_free(one) {
            res.push(one);
            if sq.rank() == geometry::pawn_home_rank(color) {
                if let Some(two) = one.try_shift(0, fwd) {
                    if b.is_free(two) {
                        res.push(two);
                    }
                }
            }
        }
    }

    // Diagonal captures. No en passant.
    for df in [-1, 1] {
        if let Some(diag) = sq.try_shift(df, fwd) {
            if b.is_enemy(diag, color) {
                res.push(diag);
            }
        }
    }
}
