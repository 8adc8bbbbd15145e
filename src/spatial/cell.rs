//! Cardinal directions and per-cell wall state
//!
//! Walls are packed as a 4-bit set (north = bit 0, east = bit 1, south = bit 2,
//! west = bit 3). The packed value doubles as the cell's hex digit in exports.

use std::fmt;

/// One of the four cardinal directions, in the fixed enumeration order N, E, S, W
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Towards decreasing `y`
    North,
    /// Towards increasing `x`
    East,
    /// Towards increasing `y`
    South,
    /// Towards decreasing `x`
    West,
}

impl Direction {
    /// All directions in neighbor enumeration order
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Wall bit for this side of a cell
    pub const fn bit(self) -> u8 {
        match self {
            Self::North => 0b0001,
            Self::East => 0b0010,
            Self::South => 0b0100,
            Self::West => 0b1000,
        }
    }

    /// The side facing back from the neighbor
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Unit coordinate delta `(dx, dy)`
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::North => (0, -1),
            Self::East => (1, 0),
            Self::South => (0, 1),
            Self::West => (-1, 0),
        }
    }

    /// Direction for a unit delta, `None` for anything that is not a cardinal step
    pub const fn from_delta(dx: isize, dy: isize) -> Option<Self> {
        match (dx, dy) {
            (0, -1) => Some(Self::North),
            (1, 0) => Some(Self::East),
            (0, 1) => Some(Self::South),
            (-1, 0) => Some(Self::West),
            _ => None,
        }
    }

    /// Compass letter used in exported paths
    pub const fn compass(self) -> char {
        match self {
            Self::North => 'N',
            Self::East => 'E',
            Self::South => 'S',
            Self::West => 'W',
        }
    }

    /// Parse a compass letter
    pub const fn from_compass(letter: char) -> Option<Self> {
        match letter {
            'N' => Some(Self::North),
            'E' => Some(Self::East),
            'S' => Some(Self::South),
            'W' => Some(Self::West),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.compass())
    }
}

/// Packed set of present walls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WallSet(u8);

impl WallSet {
    /// All four walls present
    pub const FULL: Self = Self(0b1111);
    /// No walls present
    pub const EMPTY: Self = Self(0);

    /// Build from a packed value, ignoring bits above the low nibble
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0b1111)
    }

    /// Packed value in `0..=15`
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Test whether the wall on `side` is present
    pub const fn contains(self, side: Direction) -> bool {
        self.0 & side.bit() != 0
    }

    /// Add or remove the wall on `side`
    pub const fn set(&mut self, side: Direction, present: bool) {
        if present {
            self.0 |= side.bit();
        } else {
            self.0 &= !side.bit();
        }
    }

    /// Number of walls present
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Single uppercase hex digit for the packed value
    pub fn to_hex(self) -> char {
        char::from_digit(u32::from(self.0), 16).map_or('F', |c| c.to_ascii_uppercase())
    }

    /// Parse a single hex digit (either case)
    pub fn from_hex(digit: char) -> Option<Self> {
        digit
            .to_digit(16)
            .and_then(|value| u8::try_from(value).ok())
            .map(Self)
    }
}

impl Default for WallSet {
    fn default() -> Self {
        Self::FULL
    }
}

/// A single maze position: wall state plus the traversal flag used while carving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    walls: WallSet,
    visited: bool,
}

impl Cell {
    /// Fully walled, unvisited cell
    pub const fn new() -> Self {
        Self {
            walls: WallSet::FULL,
            visited: false,
        }
    }

    /// Cell with the given walls, unvisited
    pub const fn with_walls(walls: WallSet) -> Self {
        Self {
            walls,
            visited: false,
        }
    }

    /// Current wall set
    pub const fn walls(&self) -> WallSet {
        self.walls
    }

    /// Test the wall on `side`
    pub const fn has_wall(&self, side: Direction) -> bool {
        self.walls.contains(side)
    }

    /// Add or remove the wall on `side`
    pub const fn set_wall(&mut self, side: Direction, present: bool) {
        self.walls.set(side, present);
    }

    /// Open the wall on `side`
    pub const fn remove_wall(&mut self, side: Direction) {
        self.walls.set(side, false);
    }

    /// Whether a carving algorithm has reached this cell
    pub const fn visited(&self) -> bool {
        self.visited
    }

    /// Set the traversal flag
    pub const fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }

    /// Number of walls present (0-4)
    pub const fn wall_count(&self) -> u32 {
        self.walls.count()
    }

    /// A dead end has exactly one open side
    pub const fn is_dead_end(&self) -> bool {
        self.wall_count() == 3
    }

    /// Hex digit of the wall state
    pub fn to_hex(&self) -> char {
        self.walls.to_hex()
    }
}
