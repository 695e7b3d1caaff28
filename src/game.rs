//! Turn management: the state machine the presentation layer talks to
//!
//! Every external command (`select`, `attempt_move`, `choose_promotion`,
//! `cancel_selection`, `restart`) runs to completion synchronously. Failures
//! are ordinary result values: a wrong-turn click, a self-check move or a
//! finished game is an outcome, not an error.

use crate::board::Board;
use crate::castling;
use crate::geometry;
use crate::legal;
use crate::log::{MoveLog, MoveRecord};
use crate::movegen::{self, DestList};
use crate::attack;
use crate::types::{Cell, Color, File, Piece, Square};

/// Snapshot of the externally visible game state
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Status {
    /// Side to move
    pub side: Color,
    /// Turn number; increments after each move by Black
    pub move_number: u16,
    /// The color whose king is currently attacked, if any
    pub checked: Option<Color>,
    /// The losing color once the game has ended
    pub mate: Option<Color>,
}

/// Outcome of [`Game::select`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The piece was selected; these are the destinations on offer
    ///
    /// The list is not filtered for self-check; an unsafe destination is
    /// rejected at [`Game::attempt_move`] time.
    Available(DestList),
    /// Nothing selectable on that square
    Rejected,
}

/// Outcome of [`Game::attempt_move`]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was applied and the turn passed to the opponent
    Committed(Status),
    /// The move would leave the mover's own king attacked; it was rolled
    /// back and the selection dropped
    IllegalSelfCheck,
    /// The move was applied and a pawn now waits on this square for its
    /// replacement kind; all selection input is suspended until
    /// [`Game::choose_promotion`]
    NeedsPromotion(Square),
    /// No piece was selected, or the destination was not on offer
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    Selecting,
    AwaitingDestination {
        src: Square,
        piece: Piece,
        candidates: DestList,
    },
    AwaitingPromotion {
        at: Square,
    },
    Mate {
        loser: Color,
    },
}

/// A full game of chess, from the initial position to mate
///
/// # Example
///
/// ```
/// # use woodpusher::{Game, MoveOutcome, Selection, Square};
/// # use std::str::FromStr;
/// #
/// let mut game = Game::new();
/// let sq = |s| Square::from_str(s).unwrap();
///
/// assert!(matches!(game.select(sq("e2")), Selection::Available(_)));
/// assert!(matches!(game.attempt_move(sq("e4")), MoveOutcome::Committed(_)));
/// assert_eq!(game.log().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    side: Color,
    move_number: u16,
    log: MoveLog,
    phase: Phase,
}

impl Game {
    /// Returns a game at the standard initial position, White to move
    pub fn new() -> Game {
        Game::with_position(Board::initial(), Color::White)
    }

    /// Returns a game starting from an arbitrary position with an empty log
    ///
    /// Since castling rights are derived from the log, both sides may still
    /// castle if the pieces happen to stand where castling requires them.
    pub fn with_position(board: Board, side: Color) -> Game {
        Game {
            board,
            side,
            move_number: 1,
            log: MoveLog::new(),
            phase: Phase::Selecting,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn log(&self) -> &MoveLog {
        &self.log
    }

    pub fn side(&self) -> Color {
        self.side
    }

    pub fn move_number(&self) -> u16 {
        self.move_number
    }

    /// Returns the externally visible state: side to move, turn number,
    /// checked king and mate outcome
    pub fn status(&self) -> Status {
        let checked = [Color::White, Color::Black]
            .into_iter()
            .find(|c| attack::is_check(&self.board, *c));
        let mate = match self.phase {
            Phase::Mate { loser } => Some(loser),
            _ => None,
        };
        Status {
            side: self.side,
            move_number: self.move_number,
            checked,
            mate,
        }
    }

    /// Selects the piece on `sq` and returns its candidate destinations
    ///
    /// Rejected while the game is over or a promotion is pending, while
    /// another piece is already selected, when the square is empty or holds
    /// the opponent's piece, and when the piece has nowhere to go (the
    /// selection then auto-reverts).
    pub fn select(&mut self, sq: Square) -> Selection {
        if !matches!(self.phase, Phase::Selecting) {
            return Selection::Rejected;
        }
        let cell = self.board.get(sq);
        if cell.color() != Some(self.side) {
            return Selection::Rejected;
        }
        let piece = match cell.piece() {
            Some(p) => p,
            None => return Selection::Rejected,
        };

        let mut candidates = movegen::destinations(&self.board, sq);
        if piece == Piece::King {
            candidates.extend(castling::castle_destinations(&self.board, &self.log, self.side));
        }
        if candidates.is_empty() {
            return Selection::Rejected;
        }

        self.phase = Phase::AwaitingDestination {
            src: sq,
            piece,
            candidates: candidates.clone(),
        };
        Selection::Available(candidates)
    }

    /// Attempts to move the selected piece to `dst`
    ///
    /// Any outcome other than `NeedsPromotion` returns the game to the
    /// selecting state (or ends it on mate).
    pub fn attempt_move(&mut self, dst: Square) -> MoveOutcome {
        let (src, piece) = match &self.phase {
            Phase::AwaitingDestination {
                src,
                piece,
                candidates,
            } if candidates.contains(&dst) => (*src, *piece),
            Phase::AwaitingDestination { .. } => {
                self.phase = Phase::Selecting;
                return MoveOutcome::Rejected;
            }
            _ => return MoveOutcome::Rejected,
        };

        if !legal::is_king_safe_after(&mut self.board, src, dst) {
            self.phase = Phase::Selecting;
            return MoveOutcome::IllegalSelfCheck;
        }

        let mover = self.board.get(src);
        self.board.put(src, Cell::EMPTY);
        self.board.put(dst, mover);
        if piece == Piece::King {
            self.relocate_castled_rook(self.side, src, dst);
        }

        self.log
            .push(MoveRecord::new(self.move_number, self.side, piece, src, dst));
        let mover_color = self.side;
        self.side = self.side.inv();
        if mover_color == Color::Black {
            self.move_number += 1;
        }
        self.phase = Phase::Selecting;

        // The turn has already passed; the pawn is replaced in place once the
        // promotion kind arrives, and mate evaluation waits until then.
        if piece == Piece::Pawn && dst.rank() == geometry::promotion_rank(mover_color) {
            self.phase = Phase::AwaitingPromotion { at: dst };
            return MoveOutcome::NeedsPromotion(dst);
        }

        self.finish_turn();
        MoveOutcome::Committed(self.status())
    }

    /// Replaces the pawn awaiting promotion with `kind` and finishes the turn
    ///
    /// Returns `None` when no promotion is pending or `kind` is not one of
    /// Rook, Knight, Bishop or Queen.
    pub fn choose_promotion(&mut self, kind: Piece) -> Option<Status> {
        let at = match self.phase {
            Phase::AwaitingPromotion { at } => at,
            _ => return None,
        };
        if matches!(kind, Piece::Pawn | Piece::King) {
            return None;
        }
        let color = self.board.get(at).color()?;

        self.board.put(at, Cell::from_parts(color, kind));
        self.phase = Phase::Selecting;
        self.finish_turn();
        Some(self.status())
    }

    /// Drops the current selection without side effects
    pub fn cancel_selection(&mut self) {
        if matches!(self.phase, Phase::AwaitingDestination { .. }) {
            self.phase = Phase::Selecting;
        }
    }

    /// Resets board, log and state to the initial position, from any prior
    /// state
    pub fn restart(&mut self) {
        *self = Game::new();
    }

    /// Clears the corner square after a two-file king hop and puts a rook of
    /// the castler's color beside the king
    ///
    /// Rights derivation never sees a rook captured in place, so the corner
    /// may hold something other than the original rook by now. The corner is
    /// cleared regardless and the rook beside the king is freshly created,
    /// never taken from the corner.
    fn relocate_castled_rook(&mut self, color: Color, src: Square, dst: Square) {
        let delta = dst.file().index() as isize - src.file().index() as isize;
        let (corner_file, rook_dst) = match delta {
            -2 => (File::A, dst.try_shift(1, 0)),
            2 => (File::H, dst.try_shift(-1, 0)),
            _ => return,
        };
        let corner = Square::from_parts(corner_file, dst.rank());
        if let Some(rook_dst) = rook_dst {
            self.board.put(corner, Cell::EMPTY);
            self.board
                .put(rook_dst, Cell::from_parts(color, Piece::Rook));
        }
    }

    /// Evaluates the opponent's position after a completed move
    fn finish_turn(&mut self) {
        if legal::is_mate(&mut self.board, self.side) {
            self.phase = Phase::Mate { loser: self.side };
        }
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}
