use std::fmt;

use common::Coordinate;

/// What a single piece could do on a square, given the last synchronized board.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SquareAnnotation {
    #[default]
    Empty,
    /// The piece's own square.
    Origin,
    Move,
    Capture,
    /// An enemy king stands here and is attacked.
    Check,
}

impl SquareAnnotation {
    fn to_char(self) -> char {
        match self {
            SquareAnnotation::Empty => '.',
            SquareAnnotation::Origin => '*',
            SquareAnnotation::Move => 'o',
            SquareAnnotation::Capture => 'x',
            SquareAnnotation::Check => '+',
        }
    }
}

/// Per-piece 8x8 annotation grid, indexed `[rank][file]`.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct ReachabilityGrid {
    squares: [[SquareAnnotation; 8]; 8],
}

impl ReachabilityGrid {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn get(&self, square: Coordinate) -> SquareAnnotation {
        self.squares[square.rank() as usize][square.file() as usize]
    }

    pub(crate) fn set(&mut self, square: Coordinate, annotation: SquareAnnotation) {
        self.squares[square.rank() as usize][square.file() as usize] = annotation;
    }

    pub(crate) fn clear(&mut self) {
        self.squares = Default::default();
    }

    /// Squares carrying the given annotation, a1 first.
    pub fn squares_marked(&self, annotation: SquareAnnotation) -> impl Iterator<Item = Coordinate> + '_ {
        Coordinate::all().filter(move |square| self.get(*square) == annotation)
    }
}

impl fmt::Display for ReachabilityGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in self.squares.iter().rev() {
            let row: String = rank.iter().map(|annotation| annotation.to_char()).collect();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

impl fmt::Debug for ReachabilityGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n{}", self)
    }
}
