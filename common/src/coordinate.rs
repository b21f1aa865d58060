use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

static ALGEBRAIC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^([a-hA-H])([1-8])$").expect("ALGEBRAIC_RE regex should be valid")
});

const FILE_CHARS: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// A square on the 8x8 board. `file` 0 is the a-file and `rank` 0 is the first rank,
/// so white pawns advance towards higher ranks ("north").
///
/// A `Coordinate` is always on the board: every constructor and directional helper
/// returns `None` rather than producing an out of range value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    file: u8,
    rank: u8,
}

/// Signature shared by the directional helpers, handy for tables of rays.
pub type Ray = fn(Coordinate, u8) -> Option<Coordinate>;

impl Coordinate {
    pub const fn new(file: u8, rank: u8) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Self { file, rank })
        } else {
            None
        }
    }

    pub const fn file(self) -> u8 {
        self.file
    }

    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Every square, a1 first, rank by rank.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..8u8).flat_map(|rank| (0..8u8).map(move |file| Coordinate { file, rank }))
    }

    pub fn from_algebraic(algebraic_coord: &str) -> Option<Self> {
        let caps = ALGEBRAIC_RE.captures(algebraic_coord)?;
        let file_char = caps[1].chars().next()?.to_ascii_lowercase();
        let rank_char = caps[2].chars().next()?;

        let file = file_char as u8 - b'a';
        let rank = rank_char as u8 - b'1';

        Self::new(file, rank)
    }

    pub fn to_algebraic(self) -> String {
        format!("{}{}", FILE_CHARS[self.file as usize], self.rank + 1)
    }

    /// Shifts by a file and rank delta, or `None` if that leaves the board.
    pub fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Self> {
        let file = self.file as i16 + file_delta as i16;
        let rank = self.rank as i16 + rank_delta as i16;
        if !(0..8).contains(&file) || !(0..8).contains(&rank) {
            return None;
        }
        Self::new(file as u8, rank as u8)
    }

    fn step(self, file_dir: i8, rank_dir: i8, steps: u8) -> Option<Self> {
        if steps > 7 {
            return None;
        }
        let steps = steps as i8;
        self.offset(file_dir * steps, rank_dir * steps)
    }

    pub fn north(self, steps: u8) -> Option<Self> {
        self.step(0, 1, steps)
    }

    pub fn south(self, steps: u8) -> Option<Self> {
        self.step(0, -1, steps)
    }

    pub fn east(self, steps: u8) -> Option<Self> {
        self.step(1, 0, steps)
    }

    pub fn west(self, steps: u8) -> Option<Self> {
        self.step(-1, 0, steps)
    }

    pub fn northeast(self, steps: u8) -> Option<Self> {
        self.step(1, 1, steps)
    }

    pub fn northwest(self, steps: u8) -> Option<Self> {
        self.step(-1, 1, steps)
    }

    pub fn southeast(self, steps: u8) -> Option<Self> {
        self.step(1, -1, steps)
    }

    pub fn southwest(self, steps: u8) -> Option<Self> {
        self.step(-1, -1, steps)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", FILE_CHARS[self.file as usize], self.rank + 1)
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

type ParseError = &'static str;
impl FromStr for Coordinate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_algebraic(s).ok_or("invalid square; expected a file a-h and a rank 1-8")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(algebraic: &str) -> Coordinate {
        Coordinate::from_algebraic(algebraic).unwrap()
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(Coordinate::new(8, 0).is_none());
        assert!(Coordinate::new(0, 8).is_none());
        assert_eq!(Coordinate::new(4, 3), Some(sq("e4")));
    }

    #[test]
    fn test_from_algebraic() {
        assert_eq!(Coordinate::new(0, 0), Coordinate::from_algebraic("a1"));
        assert_eq!(Coordinate::new(0, 0), Coordinate::from_algebraic("A1"));
        assert_eq!(Coordinate::new(7, 7), Coordinate::from_algebraic("h8"));
        assert!(Coordinate::from_algebraic("i1").is_none());
        assert!(Coordinate::from_algebraic("a9").is_none());
        assert!(Coordinate::from_algebraic("e44").is_none());
    }

    #[test]
    fn test_to_algebraic() {
        assert_eq!("a1", sq("a1").to_algebraic());
        assert_eq!("h8", sq("H8").to_string());
        assert_eq!("e4", format!("{:?}", sq("e4")));
    }

    #[test]
    fn test_directions() {
        let e4 = sq("e4");
        assert_eq!(e4.north(2), Some(sq("e6")));
        assert_eq!(e4.south(3), Some(sq("e1")));
        assert_eq!(e4.east(3), Some(sq("h4")));
        assert_eq!(e4.west(4), Some(sq("a4")));
        assert_eq!(e4.northeast(1), Some(sq("f5")));
        assert_eq!(e4.northwest(1), Some(sq("d5")));
        assert_eq!(e4.southeast(3), Some(sq("h1")));
        assert_eq!(e4.southwest(3), Some(sq("b1")));
    }

    #[test]
    fn test_directions_stop_at_the_edge() {
        assert_eq!(sq("e4").south(4), None);
        assert_eq!(sq("h1").east(1), None);
        assert_eq!(sq("a8").northwest(1), None);
        assert_eq!(sq("a1").north(200), None);
    }

    #[test]
    fn test_offset_with_extreme_deltas() {
        assert_eq!(sq("h8").offset(127, 127), None);
        assert_eq!(sq("a1").offset(-128, -128), None);
        assert_eq!(sq("a1").offset(7, 7), Some(sq("h8")));
        assert_eq!(sq("e4").offset(-2, 1), Some(sq("c5")));
    }

    #[test]
    fn test_all_covers_the_board_once() {
        let squares: Vec<_> = Coordinate::all().collect();
        assert_eq!(64, squares.len());
        assert_eq!(sq("a1"), squares[0]);
        assert_eq!(sq("h8"), squares[63]);
    }
}
