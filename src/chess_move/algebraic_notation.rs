use common::Coordinate;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::board::{castle_rights::Wing, color::Color, piece_kind::PieceKind};

use super::chess_move::Move;

const CAPTURE_CHAR: &str = "x";
const CHECKMATE_CHAR: &str = "#";
const CHECK_CHAR: &str = "+";

/// Piece letter, from-hint, capture, target, promotion, check or mate, glyphs.
static SAN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([NBRQK])?([a-h]?[1-8]?)(x)?([a-h][1-8])(?:=?([NBRQ]))?([+#])?[!?]*$")
        .expect("SAN_RE regex should be valid")
});

static CASTLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:O-O(-O)?|0-0(-0)?)([+#])?[!?]*$").expect("CASTLE_RE regex should be valid")
});

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("Invalid notation: {notation:?}")]
    InvalidNotation { notation: String },
}

impl Move {
    /// Parses standard algebraic notation for a move by `color`.
    ///
    /// Only the text is checked here: whether the move is playable, and which piece
    /// it refers to, is decided by the board.
    pub fn from_algebraic(notation: &str, color: Color) -> Result<Move, NotationError> {
        let notation = notation.trim();
        let invalid = || NotationError::InvalidNotation {
            notation: notation.to_string(),
        };

        if let Some(captures) = CASTLE_RE.captures(notation) {
            let wing = if captures.get(1).is_some() || captures.get(2).is_some() {
                Wing::Queenside
            } else {
                Wing::Kingside
            };
            let castle = Move::castle(color, wing);
            return Ok(with_check_suffix(castle, captures.get(3).map(|m| m.as_str())));
        }

        let captures = SAN_RE.captures(notation).ok_or_else(invalid)?;

        let kind = match captures.get(1) {
            Some(letter) => letter
                .as_str()
                .chars()
                .next()
                .and_then(|letter| PieceKind::from_algebraic(letter, color))
                .ok_or_else(invalid)?,
            None => PieceKind::pawn(color),
        };
        let target = captures
            .get(4)
            .and_then(|square| Coordinate::from_algebraic(square.as_str()))
            .ok_or_else(invalid)?;

        let mut chess_move = Move::new(kind, target);
        if let Some(hint) = captures.get(2).filter(|hint| !hint.as_str().is_empty()) {
            chess_move = chess_move.from_hint(hint.as_str());
        }
        if captures.get(3).map(|m| m.as_str()) == Some(CAPTURE_CHAR) {
            chess_move = chess_move.capturing();
        }
        if let Some(letter) = captures.get(5) {
            if !kind.is_pawn() {
                return Err(invalid());
            }
            let promotion = letter
                .as_str()
                .chars()
                .next()
                .and_then(|letter| PieceKind::from_algebraic(letter, color))
                .ok_or_else(invalid)?;
            chess_move = chess_move.promoting_to(promotion);
        }

        Ok(with_check_suffix(chess_move, captures.get(6).map(|m| m.as_str())))
    }
}

fn with_check_suffix(chess_move: Move, suffix: Option<&str>) -> Move {
    match suffix {
        Some(CHECKMATE_CHAR) => chess_move.claiming_mate(),
        Some(CHECK_CHAR) => chess_move.claiming_check(),
        _ => chess_move,
    }
}
