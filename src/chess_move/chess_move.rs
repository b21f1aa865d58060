use std::fmt;

use common::Coordinate;

use crate::board::{castle_rights::Wing, color::Color, piece_kind::PieceKind};

/// A move as stated by a player, before the board has decided which piece it means.
///
/// Built from notation with [`Move::from_algebraic`](super::algebraic_notation), or
/// directly with [`Move::new`] and the builder methods.
#[derive(Clone, PartialEq, Eq)]
pub struct Move {
    kind: PieceKind,
    target: Coordinate,
    from_hint: String,
    capturing: bool,
    promotion: Option<PieceKind>,
    claims_check: bool,
    claims_mate: bool,
    castling: Option<Wing>,
}

impl Move {
    pub fn new(kind: PieceKind, target: Coordinate) -> Self {
        Self {
            kind,
            target,
            from_hint: String::new(),
            capturing: false,
            promotion: None,
            claims_check: false,
            claims_mate: false,
            castling: None,
        }
    }

    /// A castling move for `color`. The target is the king's destination.
    pub fn castle(color: Color, wing: Wing) -> Self {
        let file = match wing {
            Wing::Kingside => 6,
            Wing::Queenside => 2,
        };
        let target = Coordinate::new(file, color.back_rank())
            .unwrap_or_else(|| unreachable!("back rank squares are on the board"));
        Self {
            castling: Some(wing),
            ..Self::new(PieceKind::king(color), target)
        }
    }

    /// Restricts the moving piece to those whose square contains `hint`, e.g. `"d"`,
    /// `"6"` or `"e1"`.
    pub fn from_hint(mut self, hint: &str) -> Self {
        self.from_hint = hint.to_string();
        self
    }

    pub fn capturing(mut self) -> Self {
        self.capturing = true;
        self
    }

    pub fn promoting_to(mut self, kind: PieceKind) -> Self {
        self.promotion = Some(kind);
        self
    }

    pub fn claiming_check(mut self) -> Self {
        self.claims_check = true;
        self
    }

    pub fn claiming_mate(mut self) -> Self {
        self.claims_check = true;
        self.claims_mate = true;
        self
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn color(&self) -> Color {
        self.kind.color()
    }

    pub fn target(&self) -> Coordinate {
        self.target
    }

    pub fn hint(&self) -> &str {
        &self.from_hint
    }

    pub fn is_capturing(&self) -> bool {
        self.capturing
    }

    pub fn promotion(&self) -> Option<PieceKind> {
        self.promotion
    }

    pub fn claims_check(&self) -> bool {
        self.claims_check
    }

    pub fn claims_mate(&self) -> bool {
        self.claims_mate
    }

    pub fn castling(&self) -> Option<Wing> {
        self.castling
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(wing) = self.castling {
            let castle = match wing {
                Wing::Kingside => "O-O",
                Wing::Queenside => "O-O-O",
            };
            return write!(f, "{} castles {}", self.color(), castle);
        }

        let capture = if self.capturing { "x" } else { "" };
        let promotion = match self.promotion {
            Some(kind) => format!("={}", kind),
            None => "".to_string(),
        };
        let check = match (self.claims_mate, self.claims_check) {
            (true, _) => "#",
            (false, true) => "+",
            _ => "",
        };
        write!(
            f,
            "{} {}{}{}{}{}",
            self.kind, self.from_hint, capture, self.target, promotion, check
        )
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format!("{}", self).fmt(f)
    }
}
