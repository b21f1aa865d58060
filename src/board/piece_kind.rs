use std::fmt;

use super::color::Color;

/// Identity of a board occupant: a role together with its side.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    WhitePawn,
    BlackPawn,
    WhiteKnight,
    BlackKnight,
    WhiteBishop,
    BlackBishop,
    WhiteRook,
    BlackRook,
    WhiteQueen,
    BlackQueen,
    WhiteKing,
    BlackKing,
}

/// How a kind of piece travels. Reachability computation dispatches on this.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MovementPattern {
    Adjacent,
    Straight,
    Diagonal,
    StraightAndDiagonal,
    Knight,
    Pawn,
}

impl PieceKind {
    pub const ALL: [PieceKind; 12] = [
        PieceKind::WhitePawn,
        PieceKind::BlackPawn,
        PieceKind::WhiteKnight,
        PieceKind::BlackKnight,
        PieceKind::WhiteBishop,
        PieceKind::BlackBishop,
        PieceKind::WhiteRook,
        PieceKind::BlackRook,
        PieceKind::WhiteQueen,
        PieceKind::BlackQueen,
        PieceKind::WhiteKing,
        PieceKind::BlackKing,
    ];

    pub fn color(&self) -> Color {
        match self {
            PieceKind::WhitePawn
            | PieceKind::WhiteKnight
            | PieceKind::WhiteBishop
            | PieceKind::WhiteRook
            | PieceKind::WhiteQueen
            | PieceKind::WhiteKing => Color::White,
            _ => Color::Black,
        }
    }

    pub fn material_value(&self) -> u32 {
        match self {
            PieceKind::WhitePawn | PieceKind::BlackPawn => 1,
            PieceKind::WhiteKnight | PieceKind::BlackKnight => 3,
            PieceKind::WhiteBishop | PieceKind::BlackBishop => 3,
            PieceKind::WhiteRook | PieceKind::BlackRook => 5,
            PieceKind::WhiteQueen | PieceKind::BlackQueen => 9,
            PieceKind::WhiteKing | PieceKind::BlackKing => 0,
        }
    }

    pub fn is_enemy(&self, other: PieceKind) -> bool {
        self.color() != other.color()
    }

    pub fn is_pawn(&self) -> bool {
        matches!(self, PieceKind::WhitePawn | PieceKind::BlackPawn)
    }

    pub fn is_king(&self) -> bool {
        matches!(self, PieceKind::WhiteKing | PieceKind::BlackKing)
    }

    pub fn is_rook(&self) -> bool {
        matches!(self, PieceKind::WhiteRook | PieceKind::BlackRook)
    }

    pub fn king(color: Color) -> Self {
        match color {
            Color::White => PieceKind::WhiteKing,
            Color::Black => PieceKind::BlackKing,
        }
    }

    pub fn rook(color: Color) -> Self {
        match color {
            Color::White => PieceKind::WhiteRook,
            Color::Black => PieceKind::BlackRook,
        }
    }

    pub fn pawn(color: Color) -> Self {
        match color {
            Color::White => PieceKind::WhitePawn,
            Color::Black => PieceKind::BlackPawn,
        }
    }

    pub fn movement_pattern(&self) -> MovementPattern {
        match self {
            PieceKind::WhitePawn | PieceKind::BlackPawn => MovementPattern::Pawn,
            PieceKind::WhiteKnight | PieceKind::BlackKnight => MovementPattern::Knight,
            PieceKind::WhiteBishop | PieceKind::BlackBishop => MovementPattern::Diagonal,
            PieceKind::WhiteRook | PieceKind::BlackRook => MovementPattern::Straight,
            PieceKind::WhiteQueen | PieceKind::BlackQueen => MovementPattern::StraightAndDiagonal,
            PieceKind::WhiteKing | PieceKind::BlackKing => MovementPattern::Adjacent,
        }
    }

    pub fn to_fen(&self) -> char {
        match self {
            PieceKind::WhitePawn => 'P',
            PieceKind::BlackPawn => 'p',
            PieceKind::WhiteKnight => 'N',
            PieceKind::BlackKnight => 'n',
            PieceKind::WhiteBishop => 'B',
            PieceKind::BlackBishop => 'b',
            PieceKind::WhiteRook => 'R',
            PieceKind::BlackRook => 'r',
            PieceKind::WhiteQueen => 'Q',
            PieceKind::BlackQueen => 'q',
            PieceKind::WhiteKing => 'K',
            PieceKind::BlackKing => 'k',
        }
    }

    pub fn from_fen(c: char) -> Option<PieceKind> {
        match c {
            'P' => Some(PieceKind::WhitePawn),
            'p' => Some(PieceKind::BlackPawn),
            'N' => Some(PieceKind::WhiteKnight),
            'n' => Some(PieceKind::BlackKnight),
            'B' => Some(PieceKind::WhiteBishop),
            'b' => Some(PieceKind::BlackBishop),
            'R' => Some(PieceKind::WhiteRook),
            'r' => Some(PieceKind::BlackRook),
            'Q' => Some(PieceKind::WhiteQueen),
            'q' => Some(PieceKind::BlackQueen),
            'K' => Some(PieceKind::WhiteKing),
            'k' => Some(PieceKind::BlackKing),
            _ => None,
        }
    }

    /// Looks up a kind by its uppercase algebraic letter (`N`, `B`, `R`, `Q`, `K`, `P`)
    /// on behalf of the given side.
    pub fn from_algebraic(letter: char, color: Color) -> Option<PieceKind> {
        if !letter.is_ascii_uppercase() {
            return None;
        }
        match color {
            Color::White => Self::from_fen(letter),
            Color::Black => Self::from_fen(letter.to_ascii_lowercase()),
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen())
    }
}
