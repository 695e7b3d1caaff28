//! Move simulation and mate detection
//!
//! Both legality filtering and mate search share one primitive: apply a
//! candidate move, ask the attack oracle about the mover's king, then restore
//! the board to its exact pre-trial state. No intermediate state is ever
//! observable to a caller.

use crate::attack;
use crate::board::Board;
use crate::movegen;
use crate::types::{Cell, Color, Square};

/// Tries moving the piece on `src` to `dst` and reports whether the mover's
/// king stays safe
///
/// The board is mutated for the trial and unconditionally restored before
/// returning, captured piece included. An empty `src` trivially reports safe.
pub fn is_king_safe_after(b: &mut Board, src: Square, dst: Square) -> bool {
    let mover = b.get(src);
    let color = match mover.color() {
        Some(c) => c,
        None => return true,
    };
    let captured = b.get(dst);

    b.put(src, Cell::EMPTY);
    b.put(dst, mover);
    let safe = !attack::is_check(b, color);
    b.put(dst, captured);
    b.put(src, mover);

    safe
}

/// Exhaustively determines whether `color` has any move that leaves its own
/// king unattacked
///
/// The king's own destinations are tried first (castle moves excluded), then
/// every destination of every other piece of `color`. There is no check gate:
/// a position with no escaping move reports as mate even when the king is not
/// attacked, so stalemate ends the game the same way. Callers that care can
/// consult [`attack::is_check`] separately.
pub fn is_mate(b: &mut Board, color: Color) -> bool {
    let king = match b.king_pos(color) {
        Some(k) => k,
        None => return false,
    };

    for dst in movegen::destinations(b, king) {
        if is_king_safe_after(b, king, dst) {
            return false;
        }
    }

    // The board is mutated during trials, so snapshot the piece list first.
    let pieces: Vec<Square> = b
        .pieces_of(color)
        .map(|(sq, _)| sq)
        .filter(|sq| *sq != king)
        .collect();
    for src in pieces {
        for dst in movegen::destinations(b, src) {
            if is_king_safe_after(b, src, dst) {
                return false;
            }
        }
    }

    true
}
