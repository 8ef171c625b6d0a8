use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Single coordinate axis used for grid width, height, and positions.
pub type Coord = u8;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

bitflags! {
    /// Set of sides of a cell crossed by the solution path.
    ///
    /// The bit values match the wire order of the four line directions; a
    /// solved cell carries exactly two bits.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct DirSet: u8 {
        const R = 0x01;
        const U = 0x02;
        const L = 0x04;
        const D = 0x08;
    }
}

impl DirSet {
    pub const fn count(self) -> u32 {
        self.bits().count_ones()
    }

    /// Whether this is one of the six two-bit masks a solved cell can take.
    pub const fn is_line_pair(self) -> bool {
        self.count() == 2
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];

    pub const fn mask(self) -> DirSet {
        match self {
            Self::Left => DirSet::L,
            Self::Right => DirSet::R,
            Self::Up => DirSet::U,
            Self::Down => DirSet::D,
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    /// Unit step in grid coordinates; `y` grows downwards.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
            Self::Up => (0, -1),
            Self::Down => (0, 1),
        }
    }
}

/// The six direction pairs a solved cell can take, in canonical order.
pub const LINE_PAIRS: [[Direction; 2]; 6] = [
    [Direction::Left, Direction::Right],
    [Direction::Left, Direction::Up],
    [Direction::Left, Direction::Down],
    [Direction::Right, Direction::Up],
    [Direction::Right, Direction::Down],
    [Direction::Up, Direction::Down],
];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Tricky,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Easy, Self::Tricky, Self::Hard];

    pub const fn title(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Tricky => "Tricky",
            Self::Hard => "Hard",
        }
    }

    /// One-letter key used in the textual parameter format.
    pub const fn key(self) -> char {
        match self {
            Self::Easy => 'e',
            Self::Tricky => 't',
            Self::Hard => 'h',
        }
    }

    pub const fn from_key(key: char) -> Option<Difficulty> {
        match key {
            'e' => Some(Self::Easy),
            't' => Some(Self::Tricky),
            'h' => Some(Self::Hard),
            _ => None,
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Easy
    }
}

impl core::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_masks_are_distinct_bits() {
        assert_eq!(DirSet::R.bits(), 0x01);
        assert_eq!(DirSet::U.bits(), 0x02);
        assert_eq!(DirSet::L.bits(), 0x04);
        assert_eq!(DirSet::D.bits(), 0x08);
        assert_eq!(DirSet::all().count(), 4);
    }

    #[test]
    fn opposite_is_an_involution() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_ne!(dir.opposite().mask(), dir.mask());
        }
    }

    #[test]
    fn every_two_bit_mask_is_a_line_pair() {
        let mut pairs = 0;
        for bits in 0u8..16 {
            let mask = DirSet::from_bits_truncate(bits);
            if mask.is_line_pair() {
                pairs += 1;
                assert!(
                    LINE_PAIRS
                        .iter()
                        .any(|pair| (pair[0].mask() | pair[1].mask()) == mask)
                );
            }
        }
        assert_eq!(pairs, 6);
    }

    #[test]
    fn difficulty_keys_round_trip() {
        for difficulty in Difficulty::ALL {
            assert_eq!(Difficulty::from_key(difficulty.key()), Some(difficulty));
        }
        assert_eq!(Difficulty::from_key('x'), None);
    }
}
