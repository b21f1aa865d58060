use common::Coordinate;

use super::{
    annotation::{ReachabilityGrid, SquareAnnotation},
    castle_rights::CastleRights,
    piece_kind::{MovementPattern, PieceKind},
};

/// One occupant of the board, along with its cached view of where it can go.
///
/// The reachability grid is rebuilt wholesale by [`Board`](super::Board) on every
/// synchronization and never patched by hand.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Piece {
    kind: PieceKind,
    location: Coordinate,
    pub(super) reachability: ReachabilityGrid,
    castling_effect: CastleRights,
}

impl Piece {
    pub fn new(kind: PieceKind, location: Coordinate) -> Self {
        let mut reachability = ReachabilityGrid::new();
        reachability.set(location, SquareAnnotation::Origin);

        Self {
            kind,
            location,
            reachability,
            castling_effect: CastleRights::effect_of(kind, location),
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn location(&self) -> Coordinate {
        self.location
    }

    pub fn reachability(&self) -> &ReachabilityGrid {
        &self.reachability
    }

    /// Castling rights revoked if this piece moves or is captured where it stands.
    pub fn castling_effect(&self) -> CastleRights {
        self.castling_effect
    }

    pub fn annotation_at(&self, square: Coordinate) -> SquareAnnotation {
        self.reachability.get(square)
    }

    pub fn can_move_to(&self, square: Coordinate) -> bool {
        self.annotation_at(square) == SquareAnnotation::Move
    }

    pub fn can_capture_at(&self, square: Coordinate) -> bool {
        self.annotation_at(square) == SquareAnnotation::Capture
    }

    /// Whether an enemy king would be attacked by this piece on `square`.
    ///
    /// Pawns attack diagonally whether or not anything stands there, and never
    /// attack the squares they advance onto.
    pub fn threatens(&self, square: Coordinate) -> bool {
        match self.kind.movement_pattern() {
            MovementPattern::Pawn => self.pawn_attacks().contains(&Some(square)),
            _ => matches!(
                self.annotation_at(square),
                SquareAnnotation::Move | SquareAnnotation::Capture | SquareAnnotation::Check
            ),
        }
    }

    /// Moves the piece and returns the castling rights the departure revokes.
    pub(crate) fn relocate(&mut self, target: Coordinate) -> CastleRights {
        let revoked = self.castling_effect;
        self.location = target;
        self.castling_effect = CastleRights::effect_of(self.kind, target);
        revoked
    }
}
