use common::Coordinate;
use log::debug;
use smallvec::{smallvec, SmallVec};

use crate::board::{
    castle_rights::{CastleRights, Wing},
    color::Color,
    error::MoveError,
    piece_kind::PieceKind,
    Board,
};

use super::{chess_move::Move, rebound::Rebound};

/// Squares involved in one castling move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CastlePath {
    /// Squares between king and rook; all must be empty.
    pub vacant: SmallVec<[Coordinate; 3]>,
    /// Squares the king stands on, crosses or lands on; none may be attacked.
    pub safe: SmallVec<[Coordinate; 3]>,
    pub king_from: Coordinate,
    pub king_to: Coordinate,
    pub rook_from: Coordinate,
    pub rook_to: Coordinate,
}

impl CastlePath {
    /// The orthodox path for `color` castling towards `wing`.
    pub fn standard(color: Color, wing: Wing) -> Self {
        let rank = color.back_rank();
        let square = |file: u8| {
            Coordinate::new(file, rank).unwrap_or_else(|| unreachable!("files a-h are on the board"))
        };

        match wing {
            Wing::Kingside => Self {
                vacant: smallvec![square(5), square(6)],
                safe: smallvec![square(4), square(5), square(6)],
                king_from: square(4),
                king_to: square(6),
                rook_from: square(7),
                rook_to: square(5),
            },
            Wing::Queenside => Self {
                vacant: smallvec![square(1), square(2), square(3)],
                safe: smallvec![square(4), square(3), square(2)],
                king_from: square(4),
                king_to: square(2),
                rook_from: square(0),
                rook_to: square(3),
            },
        }
    }
}

/// Knows who may still castle, and where castling moves the pieces.
///
/// The board consumes this as an oracle: it neither tracks nor updates rights itself,
/// it only reports the rights a move revokes through its [`Rebound`].
pub trait CastleRules {
    /// Whether the rights still permit this castling move.
    fn is_allowed(&self, chess_move: &Move) -> bool;

    /// The squares for this castling move, or `None` if the move is not a castling move.
    fn path(&self, chess_move: &Move) -> Option<CastlePath>;
}

impl CastleRules for CastleRights {
    fn is_allowed(&self, chess_move: &Move) -> bool {
        match chess_move.castling() {
            Some(wing) => self.contains(CastleRights::for_wing(chess_move.color(), wing)),
            None => false,
        }
    }

    fn path(&self, chess_move: &Move) -> Option<CastlePath> {
        chess_move
            .castling()
            .map(|wing| CastlePath::standard(chess_move.color(), wing))
    }
}

impl Board {
    /// Castles the king and rook named by `chess_move`.
    ///
    /// Like [`Board::apply_move`], the board is only changed when castling succeeds.
    pub fn castle<R: CastleRules + ?Sized>(
        &mut self,
        chess_move: &Move,
        rules: &R,
    ) -> Result<Rebound, MoveError> {
        let mut staged = self.clone();
        match staged.execute_castle(chess_move, rules) {
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

    fn execute_castle<R: CastleRules + ?Sized>(
        &mut self,
        chess_move: &Move,
        rules: &R,
    ) -> Result<Rebound, MoveError> {
        let color = chess_move.color();

        if !rules.is_allowed(chess_move) {
            return Err(MoveError::CastlingNotPossible);
        }
        let path = rules.path(chess_move).ok_or(MoveError::CastlingNotPossible)?;

        if let Some(square) = path.vacant.iter().find(|square| self.kind_at(**square).is_some()) {
            return Err(MoveError::CastlingRequiresVacantSquares { square: *square });
        }

        for piece in self.pieces().iter().filter(|piece| piece.kind().color() != color) {
            if let Some(square) = path.safe.iter().find(|square| piece.threatens(**square)) {
                return Err(MoveError::KingMustHaveSafePassage { square: *square });
            }
        }

        let king = self
            .index_at(path.king_from)
            .filter(|index| self.pieces()[*index].kind() == PieceKind::king(color));
        let rook = self
            .index_at(path.rook_from)
            .filter(|index| self.pieces()[*index].kind() == PieceKind::rook(color));
        let (king, rook) = match (king, rook) {
            (Some(king), Some(rook)) => (king, rook),
            _ => return Err(MoveError::UnableToCastle),
        };

        let mut rebound = Rebound::default();
        rebound.revoke(self.pieces_mut()[king].relocate(path.king_to));
        self.pieces_mut()[rook].relocate(path.rook_to);
        debug!("{} castles, king to {}", color, path.king_to);

        self.synchronize(None);
        self.validate_checks(chess_move, &mut rebound)?;

        Ok(rebound)
    }
}
