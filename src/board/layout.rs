use common::Coordinate;

use super::{error::PositionError, piece::Piece, piece_kind::PieceKind, Board};

const RANK_SEPARATOR: &str = "/";

/// Parses the piece placement field of a FEN string.
///
/// Ranks run from the eighth down to the first. A rank may stop short of the h-file,
/// in which case the remaining squares are empty.
pub(crate) fn parse_layout(layout: &str) -> Result<Vec<Piece>, PositionError> {
    let ranks: Vec<&str> = layout.split(RANK_SEPARATOR).collect();
    if ranks.len() != 8 {
        return Err(PositionError::WrongRankCount {
            rank_count: ranks.len(),
        });
    }

    let mut pieces = Vec::new();
    for (rank_idx, rank) in ranks.iter().enumerate() {
        parse_rank(&mut pieces, rank, 7 - rank_idx as u8)?;
    }

    Ok(pieces)
}

fn parse_rank(pieces: &mut Vec<Piece>, rank: &str, rank_number: u8) -> Result<(), PositionError> {
    let too_long = || PositionError::RankTooLong {
        rank: rank.to_string(),
    };
    let mut file = 0u8;

    for c in rank.chars() {
        match c {
            '1'..='8' => {
                file += c as u8 - b'0';
                if file > 8 {
                    return Err(too_long());
                }
            }
            _ => {
                let kind = PieceKind::from_fen(c)
                    .ok_or(PositionError::InvalidCharacter { character: c })?;
                let square = Coordinate::new(file, rank_number).ok_or_else(too_long)?;
                pieces.push(Piece::new(kind, square));
                file += 1;
            }
        }
    }

    Ok(())
}

impl Board {
    /// Renders the occupancy as a FEN piece placement field, eighth rank first.
    pub fn layout(&self) -> String {
        let mut fen_rows = vec![];
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty_square_count = 0;
            for kind in self.occupancy().rank(rank) {
                match kind {
                    Some(kind) => {
                        if empty_square_count > 0 {
                            row.push_str(&empty_square_count.to_string());
                        }
                        empty_square_count = 0;
                        row.push(kind.to_fen());
                    }
                    None => empty_square_count += 1,
                }
            }
            if empty_square_count > 0 {
                row.push_str(&empty_square_count.to_string());
            }
            fen_rows.push(row);
        }
        fen_rows.join(RANK_SEPARATOR)
    }
}
