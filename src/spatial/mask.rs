use bitvec::prelude::*;
use std::fmt;

use crate::spatial::grid::Position;

/// Fixed-size bitset over the positions of a `width` x `height` grid
///
/// Positions are stored row-major. Out-of-range positions are never members,
/// so membership tests double as bounds checks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellMask {
    bits: BitVec,
    width: usize,
    height: usize,
}

impl CellMask {
    /// Create a mask with no positions set
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            bits: bitvec![0; width * height],
            width,
            height,
        }
    }

    /// Create a mask from a list of positions, silently dropping out-of-range ones
    pub fn from_positions(width: usize, height: usize, positions: &[Position]) -> Self {
        let mut mask = Self::new(width, height);
        for &position in positions {
            mask.insert(position);
        }
        mask
    }

    const fn index(&self, position: Position) -> Option<usize> {
        if position.x < self.width && position.y < self.height {
            Some(position.y * self.width + position.x)
        } else {
            None
        }
    }

    /// Insert a position, returning whether it was newly added
    pub fn insert(&mut self, position: Position) -> bool {
        let Some(index) = self.index(position) else {
            return false;
        };
        let was_set = self.bits.get(index).as_deref() == Some(&true);
        self.bits.set(index, true);
        !was_set
    }

    /// Test position membership
    pub fn contains(&self, position: Position) -> bool {
        self.index(position)
            .is_some_and(|index| self.bits.get(index).as_deref() == Some(&true))
    }

    /// Test if no positions are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count positions in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Grid dimensions `(width, height)` this mask covers
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Member positions in row-major order
    pub fn positions(&self) -> Vec<Position> {
        let width = self.width.max(1);
        self.bits
            .iter_ones()
            .map(|index| Position::new(index % width, index / width))
            .collect()
    }
}

impl fmt::Display for CellMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CellMask({} positions)", self.count())
    }
}
