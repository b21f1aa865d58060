use std::fmt;

use common::Coordinate;

use super::{color::Color, piece_kind::PieceKind};

/// The side of the board a castling move heads towards.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Wing {
    Kingside,
    Queenside,
}

/// A set of castling rights, one bit per side and wing.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CastleRights(u8);

impl CastleRights {
    pub const fn white_kingside() -> Self {
        Self(0b1000)
    }

    pub const fn black_kingside() -> Self {
        Self(0b0100)
    }

    pub const fn white_queenside() -> Self {
        Self(0b0010)
    }

    pub const fn black_queenside() -> Self {
        Self(0b0001)
    }

    pub const fn all() -> Self {
        Self(
            Self::white_kingside().0
                | Self::black_kingside().0
                | Self::white_queenside().0
                | Self::black_queenside().0,
        )
    }

    pub const fn none() -> Self {
        Self(0)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, other: CastleRights) -> bool {
        (self.0 & other.0) == other.0
    }

    pub const fn without(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 & !other.0)
    }

    pub fn for_wing(color: Color, wing: Wing) -> Self {
        match (color, wing) {
            (Color::White, Wing::Kingside) => Self::white_kingside(),
            (Color::White, Wing::Queenside) => Self::white_queenside(),
            (Color::Black, Wing::Kingside) => Self::black_kingside(),
            (Color::Black, Wing::Queenside) => Self::black_queenside(),
        }
    }

    pub fn for_color(color: Color) -> Self {
        Self::for_wing(color, Wing::Kingside) | Self::for_wing(color, Wing::Queenside)
    }

    /// Rights lost when a piece of `kind` leaves `location`, either by moving or by
    /// being captured there.
    pub fn effect_of(kind: PieceKind, location: Coordinate) -> Self {
        let color = kind.color();
        if kind.is_king() {
            return Self::for_color(color);
        }
        if !kind.is_rook() || location.rank() != color.back_rank() {
            return Self::none();
        }
        match location.file() {
            0 => Self::for_wing(color, Wing::Queenside),
            7 => Self::for_wing(color, Wing::Kingside),
            _ => Self::none(),
        }
    }

    pub fn to_fen(self) -> String {
        if self.is_empty() {
            return "-".to_string();
        }
        let mut fen = String::new();
        for (right, c) in [
            (Self::white_kingside(), 'K'),
            (Self::white_queenside(), 'Q'),
            (Self::black_kingside(), 'k'),
            (Self::black_queenside(), 'q'),
        ] {
            if self.contains(right) {
                fen.push(c);
            }
        }
        fen
    }

    /// Parses `KQkq`-style availability. Returns the offending character on failure.
    pub fn from_fen(fen: &str) -> Result<Self, char> {
        if fen == "-" {
            return Ok(Self::none());
        }
        let mut rights = Self::none();
        for c in fen.chars() {
            rights = rights
                | match c {
                    'K' => Self::white_kingside(),
                    'Q' => Self::white_queenside(),
                    'k' => Self::black_kingside(),
                    'q' => Self::black_queenside(),
                    _ => return Err(c),
                };
        }
        Ok(rights)
    }
}

impl fmt::Debug for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastleRights({})", self.to_fen())
    }
}

impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen())
    }
}

impl std::ops::BitOr for CastleRights {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for CastleRights {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl std::ops::BitAnd for CastleRights {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}
