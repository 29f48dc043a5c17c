//! Cardinal directions and their encoding in per-cell wall masks

use std::fmt;

/// One of the four cardinal directions a cell wall can face
///
/// The discriminant doubles as the bit position in a cell's wall mask,
/// so a full mask fits in the low four bits of a `u8`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    /// Toward the previous row
    North = 0,
    /// Toward the next column
    East = 1,
    /// Toward the next row
    South = 2,
    /// Toward the previous column
    West = 3,
}

impl Direction {
    /// All directions in candidate scan order (north, east, south, west)
    ///
    /// Both removal strategies iterate this array in order, which is what
    /// makes their tie-breaking behavior identical.
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Bit assigned to this direction in a cell's wall mask
    pub const fn bit(self) -> u8 {
        1 << self as u8
    }

    /// The direction pointing back toward this one
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Row and column offset of the neighboring cell in this direction
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::North => (-1, 0),
            Self::East => (0, 1),
            Self::South => (1, 0),
            Self::West => (0, -1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::Direction;

    #[test]
    fn test_opposite_is_an_involution() {
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
            assert_ne!(direction.opposite(), direction);
        }
    }

    #[test]
    fn test_mask_bits_are_distinct() {
        let combined = Direction::ALL
            .iter()
            .fold(0u8, |mask, direction| mask | direction.bit());
        assert_eq!(combined, 0b1111);
    }

    #[test]
    fn test_opposite_offsets_cancel() {
        for direction in Direction::ALL {
            let (dx, dy) = direction.offset();
            let (ox, oy) = direction.opposite().offset();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }
}
