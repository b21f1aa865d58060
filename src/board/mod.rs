pub mod annotation;
pub mod castle_rights;
pub mod color;
pub mod error;
pub mod occupancy;
pub mod options;
pub mod piece;
pub mod piece_kind;

mod layout;
mod reachability;

#[cfg(test)]
mod tests;

use std::fmt;

use common::Coordinate;
use log::trace;

use self::{
    annotation::SquareAnnotation, color::Color, error::PositionError, occupancy::Occupancy, options::RuleOptions, piece::Piece,
    piece_kind::PieceKind,
};

pub const STARTING_POSITION: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// A chess position: the live pieces plus everything derived from them.
///
/// `occupancy`, `material`, `checked` and `kings` are pure functions of `pieces`. They
/// are only ever rebuilt wholesale by [`Board::synchronize`], which runs at
/// construction and after every applied move or castling.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    pieces: Vec<Piece>,
    occupancy: Occupancy,
    material: [u32; 2],
    checked: [bool; 2],
    kings: [Option<Coordinate>; 2],
    options: RuleOptions,
}

impl Board {
    pub fn starting_position() -> Self {
        // The starting layout is a constant known to parse.
        Self::from_layout(STARTING_POSITION, None).unwrap_or_else(|error| {
            panic!("starting position failed to parse: {}", error)
        })
    }

    /// Builds a board from a rank-major layout (`rnbqkbnr/pppppppp/8/...`) and the
    /// current en passant target, if any.
    pub fn from_layout(layout: &str, en_passant: Option<Coordinate>) -> Result<Self, PositionError> {
        Self::with_options(layout, en_passant, RuleOptions::default())
    }

    pub fn with_options(
        layout: &str,
        en_passant: Option<Coordinate>,
        options: RuleOptions,
    ) -> Result<Self, PositionError> {
        let pieces = layout::parse_layout(layout)?;
        Ok(Self::from_pieces(pieces, en_passant, options))
    }

    pub(crate) fn from_pieces(
        pieces: Vec<Piece>,
        en_passant: Option<Coordinate>,
        options: RuleOptions,
    ) -> Self {
        let mut board = Self {
            pieces,
            occupancy: Occupancy::new(),
            material: [0; 2],
            checked: [false; 2],
            kings: [None; 2],
            options,
        };
        board.synchronize(en_passant);
        board
    }

    /// Rebuilds occupancy, every piece's reachability, material, check flags and king
    /// locations from the live pieces.
    ///
    /// # Panics
    ///
    /// If two live pieces share a square. That can only come from a defect in move
    /// execution, never from user input.
    pub fn synchronize(&mut self, en_passant: Option<Coordinate>) {
        self.occupancy.clear();
        self.material = [0; 2];
        self.checked = [false; 2];
        self.kings = [None; 2];

        for piece in &self.pieces {
            if let Err(existing) = self.occupancy.place(piece.location(), piece.kind()) {
                panic!(
                    "board out of sync: {} and {} both stand on {}",
                    existing,
                    piece.kind(),
                    piece.location()
                );
            }
        }

        for piece in self.pieces.iter_mut() {
            let kind = piece.kind();
            let color = kind.color();

            if piece.update(&self.occupancy, en_passant) {
                self.checked[color.opposite().index()] = true;
            }

            if kind.is_king() {
                self.kings[color.index()] = Some(piece.location());
            }

            self.material[color.index()] += kind.material_value();
        }

        trace!(
            "synchronized {} pieces, material {:?}, checked {:?}",
            self.pieces.len(),
            self.material,
            self.checked
        );
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    pub fn options(&self) -> RuleOptions {
        self.options
    }

    pub fn kind_at(&self, square: Coordinate) -> Option<PieceKind> {
        self.occupancy.get(square)
    }

    pub fn piece_at(&self, square: Coordinate) -> Option<&Piece> {
        self.pieces.iter().find(|piece| piece.location() == square)
    }

    pub(crate) fn index_at(&self, square: Coordinate) -> Option<usize> {
        self.pieces.iter().position(|piece| piece.location() == square)
    }

    pub fn material(&self, color: Color) -> u32 {
        self.material[color.index()]
    }

    pub fn is_checked(&self, color: Color) -> bool {
        self.checked[color.index()]
    }

    /// Location of `color`'s king if that king is in check.
    pub fn checked_king(&self, color: Color) -> Option<Coordinate> {
        if self.is_checked(color) {
            self.king_location(color)
        } else {
            None
        }
    }

    pub fn king_location(&self, color: Color) -> Option<Coordinate> {
        self.kings[color.index()]
    }

    /// Every move `color`'s pieces can make as `(from, target, annotation)`, read off
    /// their reachability grids. Quiet moves and captures are listed; whether a move
    /// leaves the mover in check is only decided when it is applied.
    pub fn moves(&self, color: Color) -> Vec<(Coordinate, Coordinate, SquareAnnotation)> {
        let mut moves = Vec::new();
        for piece in self.pieces.iter().filter(|piece| piece.kind().color() == color) {
            for annotation in [SquareAnnotation::Move, SquareAnnotation::Capture] {
                moves.extend(
                    piece
                        .reachability()
                        .squares_marked(annotation)
                        .map(|target| (piece.location(), target, annotation)),
                );
            }
        }
        moves
    }

    pub(crate) fn pieces_mut(&mut self) -> &mut Vec<Piece> {
        &mut self.pieces
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.layout())
    }
}
