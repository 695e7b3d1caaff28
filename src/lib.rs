pub mod attack;
pub mod board;
pub mod castling;
pub mod game;
pub mod geometry;
pub mod legal;
pub mod log;
pub mod movegen;
pub mod types;

pub use board::Board;
pub use game::{Game, MoveOutcome, Selection, Status};
pub use log::{MoveLog, MoveRecord};
pub use movegen::DestList;
pub use types::{CastlingSide, Cell, Color, File, Piece, Rank, Square};
