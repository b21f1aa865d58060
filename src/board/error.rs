use common::Coordinate;
use thiserror::Error;

use super::piece_kind::PieceKind;

/// Why a board layout could not be turned into a position.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    #[error("Invalid position: unrecognized character {character:?}")]
    InvalidCharacter { character: char },
    #[error("Invalid position: 8 ranks expected, {rank_count:?} given")]
    WrongRankCount { rank_count: usize },
    #[error("Invalid position: rank too long: {rank:?}")]
    RankTooLong { rank: String },
}

/// Why a move was rejected. The board is left untouched whenever one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("No such move available")]
    NoSuchMove,
    #[error("Ambiguous move, candidates on {candidates:?}")]
    AmbiguousMove { candidates: Vec<Coordinate> },
    #[error("Unclaimed capture on {square}")]
    UnclaimedCapture { square: Coordinate },
    #[error("Capture claimed in vain on {square}")]
    CaptureClaimedInVain { square: Coordinate },
    #[error("Self check not allowed")]
    SelfCheckNotAllowed,
    #[error("Cannot promote to {kind}")]
    InvalidPromotion { kind: PieceKind },
    #[error("Move claims check: {claimed}, but the opponent is in check: {actual}")]
    CheckClaimMismatch { claimed: bool, actual: bool },
    #[error("Castling not possible")]
    CastlingNotPossible,
    #[error("Castling requires vacant squares, {square} is occupied")]
    CastlingRequiresVacantSquares { square: Coordinate },
    #[error("King must have safe passage, {square} is attacked")]
    KingMustHaveSafePassage { square: Coordinate },
    #[error("Unable to castle")]
    UnableToCastle,
}
