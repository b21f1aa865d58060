#![allow(dead_code)]

use chess_rules::prelude::*;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ReplayError {
    #[error(transparent)]
    Notation(#[from] NotationError),
    #[error(transparent)]
    Move(#[from] MoveError),
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Plays notation moves against a board while keeping the FEN bookkeeping
/// (turn, castling rights, en passant target and clocks) the board leaves to its caller.
pub struct Replay {
    record: FenRecord,
}

impl Replay {
    pub fn new(fen: &str) -> Self {
        init_logging();
        let record = parse_fen(fen).unwrap_or_else(|error| panic!("{}: {}", fen, error));
        Self { record }
    }

    pub fn starting_position() -> Self {
        Self::new(chess_rules::input_handler::fen::STARTING_POSITION_FEN)
    }

    pub fn play(&mut self, notation: &str) -> Result<Rebound, ReplayError> {
        let record = &mut self.record;
        let color = record.turn;
        let chess_move = Move::from_algebraic(notation, color)?;
        let pieces_before = record.board.pieces().len();

        let rebound = if chess_move.castling().is_some() {
            record.board.castle(&chess_move, &record.castle_rights)?
        } else {
            record.board.apply_move(&chess_move, record.en_passant)?
        };

        let captured = record.board.pieces().len() < pieces_before;
        if chess_move.kind().is_pawn() || captured {
            record.halfmove_clock = 0;
        } else {
            record.halfmove_clock += 1;
        }
        if color == Color::Black {
            record.fullmove_number += 1;
        }
        record.castle_rights = record.castle_rights.without(rebound.revoked_castling());
        record.en_passant = rebound.en_passant();
        record.turn = color.opposite();

        Ok(rebound)
    }

    /// Plays every move, panicking with the offending notation on the first failure.
    pub fn play_all(&mut self, notations: &[&str]) {
        for notation in notations {
            if let Err(error) = self.play(notation) {
                panic!("{} failed: {} (position {})", notation, error, self.fen());
            }
        }
    }

    pub fn fen(&self) -> String {
        self.record.to_fen()
    }

    pub fn board(&self) -> &Board {
        &self.record.board
    }

    pub fn turn(&self) -> Color {
        self.record.turn
    }

    /// Whether the side to move is in check.
    pub fn is_checked(&self) -> bool {
        self.record.board.is_checked(self.record.turn)
    }
}
