use common::Coordinate;

use crate::board::castle_rights::CastleRights;

/// What a successfully applied move tells the caller about the game going forward.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Rebound {
    revoked_castling: CastleRights,
    en_passant: Option<Coordinate>,
    can_promote: bool,
    opponent_checked: bool,
}

impl Rebound {
    /// Castling rights lost through this move, by moving a king or rook or by
    /// capturing a rook on its home square.
    pub fn revoked_castling(&self) -> CastleRights {
        self.revoked_castling
    }

    /// The square skipped by a two-square pawn advance, capturable on the next move only.
    pub fn en_passant(&self) -> Option<Coordinate> {
        self.en_passant
    }

    pub fn can_promote(&self) -> bool {
        self.can_promote
    }

    pub fn opponent_checked(&self) -> bool {
        self.opponent_checked
    }

    pub(crate) fn revoke(&mut self, rights: CastleRights) {
        self.revoked_castling |= rights;
    }

    pub(crate) fn set_en_passant(&mut self, target: Option<Coordinate>) {
        self.en_passant = target;
    }

    pub(crate) fn set_can_promote(&mut self, can_promote: bool) {
        self.can_promote = can_promote;
    }

    pub(crate) fn set_opponent_checked(&mut self, checked: bool) {
        self.opponent_checked = checked;
    }
}
