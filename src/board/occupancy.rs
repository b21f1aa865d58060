use std::fmt;

use common::Coordinate;

use super::piece_kind::PieceKind;

/// Board-wide view of which kind stands on each square, indexed `[rank][file]`.
/// Derived from the live pieces during synchronization and never edited otherwise.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Occupancy {
    squares: [[Option<PieceKind>; 8]; 8],
}

impl Occupancy {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn get(&self, square: Coordinate) -> Option<PieceKind> {
        self.squares[square.rank() as usize][square.file() as usize]
    }

    pub fn is_empty(&self, square: Coordinate) -> bool {
        self.get(square).is_none()
    }

    /// Writes a kind onto an empty square. Returns the kind already there instead
    /// if the square is taken.
    pub(crate) fn place(&mut self, square: Coordinate, kind: PieceKind) -> Result<(), PieceKind> {
        let slot = &mut self.squares[square.rank() as usize][square.file() as usize];
        if let Some(existing) = *slot {
            return Err(existing);
        }
        *slot = Some(kind);
        Ok(())
    }

    pub(crate) fn clear(&mut self) {
        self.squares = Default::default();
    }

    /// Rank `rank` from the a-file to the h-file.
    pub fn rank(&self, rank: u8) -> &[Option<PieceKind>; 8] {
        &self.squares[rank as usize]
    }
}

impl fmt::Debug for Occupancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for rank in self.squares.iter().rev() {
            let row: String = rank
                .iter()
                .map(|kind| kind.map(|k| k.to_fen()).unwrap_or('.'))
                .collect();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
