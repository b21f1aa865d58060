use std::{fmt, str::FromStr};

use common::Coordinate;
use thiserror::Error;

use crate::board::{
    castle_rights::CastleRights, color::Color, error::PositionError, options::RuleOptions, Board,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenParseError {
    #[error("Wrong number of fields: 1 or 6 expected, {field_count:?} given")]
    WrongNumberOfFields { field_count: usize },
    #[error("Invalid position: {position_error}")]
    InvalidPosition {
        #[from]
        position_error: PositionError,
    },
    #[error("Invalid color: {invalid_color:?}")]
    InvalidColor { invalid_color: String },
    #[error("Invalid castling rights: {invalid_castling:?}")]
    InvalidCastlingRights { invalid_castling: char },
    #[error("Invalid en passant square: {value:?}")]
    InvalidEnPassant { value: String },
    #[error("Invalid halfmove clock: {invalid_clock:?}")]
    InvalidHalfmoveClock { invalid_clock: String },
    #[error("Invalid fullmove number: {invalid_number:?}")]
    InvalidFullmoveNumber { invalid_number: String },
}

type FenResult<T> = Result<T, FenParseError>;

pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// A position together with the bookkeeping FEN carries alongside the layout.
///
/// The board itself knows nothing of turns, rights or clocks; whoever drives a game
/// keeps this record current.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FenRecord {
    pub board: Board,
    pub turn: Color,
    pub castle_rights: CastleRights,
    pub en_passant: Option<Coordinate>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

/// Parses a six-field FEN string, or a lone layout which gets white to move,
/// no castling rights, no en passant target, and fresh clocks.
pub fn parse_fen(fen: &str) -> FenResult<FenRecord> {
    parse_fen_with_options(fen, RuleOptions::default())
}

pub fn parse_fen_with_options(fen: &str, options: RuleOptions) -> FenResult<FenRecord> {
    let fields = split_fen_fields(fen)?;

    let en_passant = parse_en_passant(fields.en_passant)?;
    let board = Board::with_options(fields.position, en_passant, options)?;

    Ok(FenRecord {
        board,
        turn: parse_active_color(fields.active_color)?,
        castle_rights: parse_castle_rights(fields.castle_rights)?,
        en_passant,
        halfmove_clock: parse_halfmove_clock(fields.halfmove_clock)?,
        fullmove_number: parse_fullmove_number(fields.fullmove_number)?,
    })
}

struct FenFields<'a> {
    position: &'a str,
    active_color: &'a str,
    castle_rights: &'a str,
    en_passant: &'a str,
    halfmove_clock: &'a str,
    fullmove_number: &'a str,
}

fn split_fen_fields(fen: &str) -> FenResult<FenFields> {
    let parts: Vec<&str> = fen.split_whitespace().collect();
    match parts.len() {
        1 => Ok(FenFields {
            position: parts[0],
            active_color: "w",
            castle_rights: "-",
            en_passant: "-",
            halfmove_clock: "0",
            fullmove_number: "1",
        }),
        6 => Ok(FenFields {
            position: parts[0],
            active_color: parts[1],
            castle_rights: parts[2],
            en_passant: parts[3],
            halfmove_clock: parts[4],
            fullmove_number: parts[5],
        }),
        field_count => Err(FenParseError::WrongNumberOfFields { field_count }),
    }
}

fn parse_active_color(active_color: &str) -> FenResult<Color> {
    match active_color {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(FenParseError::InvalidColor {
            invalid_color: active_color.to_string(),
        }),
    }
}

fn parse_castle_rights(castle_rights: &str) -> FenResult<CastleRights> {
    CastleRights::from_fen(castle_rights)
        .map_err(|invalid_castling| FenParseError::InvalidCastlingRights { invalid_castling })
}

fn parse_en_passant(en_passant: &str) -> FenResult<Option<Coordinate>> {
    if en_passant == "-" {
        return Ok(None);
    }

    let square = Coordinate::from_algebraic(en_passant).ok_or_else(|| {
        FenParseError::InvalidEnPassant {
            value: en_passant.to_string(),
        }
    })?;
    // Only a double step leaves a target, so it sits on the 3rd or 6th rank.
    if square.rank() != 2 && square.rank() != 5 {
        return Err(FenParseError::InvalidEnPassant {
            value: en_passant.to_string(),
        });
    }
    Ok(Some(square))
}

fn parse_halfmove_clock(halfmove_clock: &str) -> FenResult<u32> {
    halfmove_clock
        .parse::<u32>()
        .map_err(|_| FenParseError::InvalidHalfmoveClock {
            invalid_clock: halfmove_clock.to_string(),
        })
}

fn parse_fullmove_number(fullmove_number: &str) -> FenResult<u32> {
    fullmove_number
        .parse::<u32>()
        .map_err(|_| FenParseError::InvalidFullmoveNumber {
            invalid_number: fullmove_number.to_string(),
        })
}

impl FenRecord {
    pub fn to_fen(&self) -> String {
        let en_passant = match self.en_passant {
            Some(square) => square.to_algebraic(),
            None => "-".to_string(),
        };
        format!(
            "{} {} {} {} {} {}",
            self.board.layout(),
            self.turn.to_fen(),
            self.castle_rights.to_fen(),
            en_passant,
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}

impl FromStr for FenRecord {
    type Err = FenParseError;

    fn from_str(fen: &str) -> Result<Self, Self::Err> {
        parse_fen(fen)
    }
}

impl fmt::Display for FenRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen())
    }
}
