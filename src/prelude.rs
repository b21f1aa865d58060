//! Common types re-exported for convenience.

pub use crate::board::{
    annotation::{ReachabilityGrid, SquareAnnotation},
    castle_rights::{CastleRights, Wing},
    color::Color,
    error::{MoveError, PositionError},
    options::RuleOptions,
    piece::Piece,
    piece_kind::PieceKind,
    Board,
};
pub use crate::chess_move::{CastlePath, CastleRules, Move, NotationError, Rebound};
pub use crate::input_handler::fen::{parse_fen, FenParseError, FenRecord};
pub use common::Coordinate;
