use common::Coordinate;
use log::debug;
use smallvec::SmallVec;

use crate::board::{annotation::SquareAnnotation, error::MoveError, piece::Piece, Board};

use super::chess_move::Move;

type Candidates = SmallVec<[usize; 4]>;

impl Board {
    /// Picks the one piece a move refers to.
    ///
    /// A piece of the move's kind is a candidate when its reachability at the target
    /// agrees with the move's capture claim, or when it is a pawn that can take the
    /// en passant target the move lands on. The from-hint then keeps only candidates
    /// whose square contains it.
    pub fn resolve(&self, chess_move: &Move, en_passant: Option<Coordinate>) -> Result<&Piece, MoveError> {
        let index = self.resolve_index(chess_move, en_passant)?;
        Ok(&self.pieces()[index])
    }

    pub(crate) fn resolve_index(
        &self,
        chess_move: &Move,
        en_passant: Option<Coordinate>,
    ) -> Result<usize, MoveError> {
        let target = chess_move.target();
        let candidates: Candidates = self
            .pieces()
            .iter()
            .enumerate()
            .filter(|(_, piece)| piece.kind() == chess_move.kind())
            .filter(|(_, piece)| {
                let annotation = piece.annotation_at(target);
                let agrees_with_claim = if chess_move.is_capturing() {
                    annotation == SquareAnnotation::Capture
                } else {
                    annotation == SquareAnnotation::Move
                };
                let takes_en_passant = piece.kind().is_pawn()
                    && Some(target) == en_passant
                    && annotation == SquareAnnotation::Capture;
                agrees_with_claim || takes_en_passant
            })
            .filter(|(_, piece)| piece.location().to_string().contains(chess_move.hint()))
            .map(|(index, _)| index)
            .collect();

        match candidates.as_slice() {
            [] => {
                debug!("no piece can play {}", chess_move);
                Err(MoveError::NoSuchMove)
            }
            [index] => {
                debug!("{} resolved to {}", chess_move, self.pieces()[*index].location());
                Ok(*index)
            }
            _ => Err(MoveError::AmbiguousMove {
                candidates: candidates
                    .iter()
                    .map(|index| self.pieces()[*index].location())
                    .collect(),
            }),
        }
    }
}
