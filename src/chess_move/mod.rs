pub mod algebraic_notation;
mod apply;
pub mod castle;
pub mod chess_move;
pub mod rebound;
mod resolve;

pub use algebraic_notation::NotationError;
pub use castle::{CastlePath, CastleRules};
pub use chess_move::Move;
pub use rebound::Rebound;
