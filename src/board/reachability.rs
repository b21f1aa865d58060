use common::coordinate::{Coordinate, Ray};
use log::trace;

use super::{
    annotation::SquareAnnotation,
    color::Color,
    occupancy::Occupancy,
    piece::Piece,
    piece_kind::MovementPattern,
};

const STRAIGHT: [Ray; 4] = [
    Coordinate::north,
    Coordinate::east,
    Coordinate::south,
    Coordinate::west,
];

const DIAGONAL: [Ray; 4] = [
    Coordinate::northeast,
    Coordinate::southeast,
    Coordinate::southwest,
    Coordinate::northwest,
];

const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

impl Piece {
    /// Recomputes the reachability grid against a freshly synchronized occupancy.
    /// Returns true if the piece attacks the enemy king.
    pub(crate) fn update(&mut self, occupancy: &Occupancy, en_passant: Option<Coordinate>) -> bool {
        self.reachability.clear();
        self.reachability
            .set(self.location(), SquareAnnotation::Origin);

        match self.kind().movement_pattern() {
            MovementPattern::Adjacent => {
                self.mark_adjacent(occupancy, &STRAIGHT) | self.mark_adjacent(occupancy, &DIAGONAL)
            }
            MovementPattern::Straight => self.mark_rays(occupancy, &STRAIGHT),
            MovementPattern::Diagonal => self.mark_rays(occupancy, &DIAGONAL),
            MovementPattern::StraightAndDiagonal => {
                self.mark_rays(occupancy, &STRAIGHT) | self.mark_rays(occupancy, &DIAGONAL)
            }
            MovementPattern::Knight => self.mark_knight(occupancy),
            MovementPattern::Pawn => self.mark_pawn(occupancy, en_passant),
        }
    }

    /// Marks an empty square as a move target. Returns whether a scan may continue past it.
    fn mark_if_reachable_for_move(&mut self, target: Option<Coordinate>, occupancy: &Occupancy) -> bool {
        match target {
            Some(square) if occupancy.is_empty(square) => {
                self.reachability.set(square, SquareAnnotation::Move);
                true
            }
            _ => false,
        }
    }

    /// Marks an enemy-held square as a capture, or as check when the enemy is a king.
    /// Returns whether an enemy king was found.
    fn mark_if_reachable_for_capture(&mut self, target: Option<Coordinate>, occupancy: &Occupancy) -> bool {
        let square = match target {
            Some(square) => square,
            None => return false,
        };
        let occupant = match occupancy.get(square) {
            Some(occupant) if self.kind().is_enemy(occupant) => occupant,
            _ => return false,
        };

        if occupant.is_king() {
            trace!("{} on {} gives check at {}", self.kind(), self.location(), square);
            self.reachability.set(square, SquareAnnotation::Check);
            true
        } else {
            self.reachability.set(square, SquareAnnotation::Capture);
            false
        }
    }

    fn mark_adjacent(&mut self, occupancy: &Occupancy, rays: &[Ray]) -> bool {
        let mut checks = false;
        for ray in rays {
            let target = ray(self.location(), 1);
            if !self.mark_if_reachable_for_move(target, occupancy) {
                checks |= self.mark_if_reachable_for_capture(target, occupancy);
            }
        }
        checks
    }

    // A scan stops at the first occupied square and tries a single capture there.
    fn mark_rays(&mut self, occupancy: &Occupancy, rays: &[Ray]) -> bool {
        let mut checks = false;
        for ray in rays {
            let mut steps = 1;
            while self.mark_if_reachable_for_move(ray(self.location(), steps), occupancy) {
                steps += 1;
            }
            checks |= self.mark_if_reachable_for_capture(ray(self.location(), steps), occupancy);
        }
        checks
    }

    fn mark_knight(&mut self, occupancy: &Occupancy) -> bool {
        let mut checks = false;
        for (file_delta, rank_delta) in KNIGHT_JUMPS {
            let target = self.location().offset(file_delta, rank_delta);
            if !self.mark_if_reachable_for_move(target, occupancy) {
                checks |= self.mark_if_reachable_for_capture(target, occupancy);
            }
        }
        checks
    }

    fn mark_pawn(&mut self, occupancy: &Occupancy, en_passant: Option<Coordinate>) -> bool {
        let color = self.kind().color();
        let forward = pawn_forward(color);

        let advanced = self.mark_if_reachable_for_move(forward(self.location(), 1), occupancy);
        if advanced && self.location().rank() == color.pawn_rank() {
            self.mark_if_reachable_for_move(forward(self.location(), 2), occupancy);
        }

        let mut checks = false;
        for target in self.pawn_attacks().into_iter().flatten() {
            let en_passant_capture = Some(target) == en_passant
                && target.rank() == color.en_passant_capture_rank()
                && occupancy.is_empty(target);
            if en_passant_capture {
                self.reachability.set(target, SquareAnnotation::Capture);
            } else {
                checks |= self.mark_if_reachable_for_capture(Some(target), occupancy);
            }
        }
        checks
    }

    /// The two forward diagonals of a pawn, `None` where they leave the board.
    pub(crate) fn pawn_attacks(&self) -> [Option<Coordinate>; 2] {
        let ahead = pawn_forward(self.kind().color())(self.location(), 1);
        [
            ahead.and_then(|square| square.east(1)),
            ahead.and_then(|square| square.west(1)),
        ]
    }
}

pub(crate) fn pawn_forward(color: Color) -> Ray {
    match color {
        Color::White => Coordinate::north,
        Color::Black => Coordinate::south,
    }
}
