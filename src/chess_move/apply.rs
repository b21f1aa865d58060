use common::Coordinate;
use log::debug;

use crate::board::{
    castle_rights::CastleRights, color::Color, error::MoveError, piece::Piece, Board,
};

use super::{chess_move::Move, rebound::Rebound};

impl Board {
    /// Applies a move and reports its consequences.
    ///
    /// The move is played on a copy of the board which replaces this one only when every
    /// step succeeds, so on error the board is exactly as it was before the call.
    /// Castling moves go through [`Board::castle`] instead.
    pub fn apply_move(
        &mut self,
        chess_move: &Move,
        en_passant: Option<Coordinate>,
    ) -> Result<Rebound, MoveError> {
        let mut staged = self.clone();
        match staged.execute(chess_move, en_passant) {
            Ok(rebound) => {
                *self = staged;
                Ok(rebound)
            }
            Err(error) => {
                debug!("rejected {}: {}", chess_move, error);
                Err(error)
            }
        }
    }

    fn execute(&mut self, chess_move: &Move, en_passant: Option<Coordinate>) -> Result<Rebound, MoveError> {
        let mut index = self.resolve_index(chess_move, en_passant)?;
        let mut rebound = Rebound::default();
        let color = chess_move.color();
        let target = chess_move.target();
        let origin = self.pieces()[index].location();

        let en_passant_capture = chess_move.kind().is_pawn()
            && Some(target) == en_passant
            && self.kind_at(target).is_none();
        let capture = if en_passant_capture {
            // The captured pawn sits one rank behind the target, from the mover's view.
            let captured_square = match color {
                Color::White => target.south(1),
                Color::Black => target.north(1),
            }
            .ok_or(MoveError::CaptureClaimedInVain { square: target })?;
            self.capture(captured_square, true)?
        } else {
            self.capture(target, chess_move.is_capturing())?
        };
        if let Some((removed_index, revoked)) = capture {
            if removed_index < index {
                index -= 1;
            }
            rebound.revoke(revoked);
        }

        let mover = &mut self.pieces_mut()[index];
        rebound.revoke(mover.relocate(target));

        if mover.kind().is_pawn() {
            if origin.rank().abs_diff(target.rank()) == 2 {
                let skipped = Coordinate::new(target.file(), (origin.rank() + target.rank()) / 2);
                rebound.set_en_passant(skipped);
            }
            rebound.set_can_promote(target.rank() == color.promotion_rank());
        }

        if let Some(officer) = chess_move.promotion() {
            let legal_officer = officer.color() == color && !officer.is_pawn() && !officer.is_king();
            if !rebound.can_promote() || !legal_officer {
                return Err(MoveError::InvalidPromotion { kind: officer });
            }
            debug!("{} on {} promotes to {}", chess_move.kind(), target, officer);
            self.pieces_mut()[index] = Piece::new(officer, target);
        }

        self.synchronize(rebound.en_passant());
        self.validate_checks(chess_move, &mut rebound)?;

        Ok(rebound)
    }

    /// Removes the piece on `square` if the move's claim and the board agree there is one.
    /// Returns the removed piece's index and the castling rights its loss revokes.
    fn capture(
        &mut self,
        square: Coordinate,
        claimed: bool,
    ) -> Result<Option<(usize, CastleRights)>, MoveError> {
        match (self.index_at(square), claimed) {
            (Some(index), true) => {
                let captured = self.pieces_mut().remove(index);
                debug!("{} captured on {}", captured.kind(), square);
                Ok(Some((index, captured.castling_effect())))
            }
            (Some(_), false) => Err(MoveError::UnclaimedCapture { square }),
            (None, true) => Err(MoveError::CaptureClaimedInVain { square }),
            (None, false) => Ok(None),
        }
    }

    /// Rejects a move that leaves the mover in check, records whether the opponent is
    /// in check, and with strict options holds the move to its check claim.
    pub(crate) fn validate_checks(&self, chess_move: &Move, rebound: &mut Rebound) -> Result<(), MoveError> {
        let color = chess_move.color();
        if self.is_checked(color) {
            return Err(MoveError::SelfCheckNotAllowed);
        }

        let opponent_checked = self.is_checked(color.opposite());
        if self.options().validate_check_claims && chess_move.claims_check() != opponent_checked {
            return Err(MoveError::CheckClaimMismatch {
                claimed: chess_move.claims_check(),
                actual: opponent_checked,
            });
        }
        rebound.set_opponent_checked(opponent_checked);

        Ok(())
    }
}
