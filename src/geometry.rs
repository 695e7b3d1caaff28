use crate::types::{Color, Rank};

pub const fn back_rank(c: Color) -> Rank {
    match c {
        Color::White => Rank::R1,
        Color::Black => Rank::R8,
    }
}

pub const fn pawn_home_rank(c: Color) -> Rank {
    match c {
        Color::White => Rank::R2,
        Color::Black => Rank::R7,
    }
}

pub const fn promotion_rank(c: Color) -> Rank {
    match c {
        Color::White => Rank::R8,
        Color::Black => Rank::R1,
    }
}

/// Rank delta of a single pawn step, in `Square::try_shift` terms
pub const fn pawn_forward_delta(c: Color) -> isize {
    match c {
        Color::White => 1,
        Color::Black => -1,
    }
}
