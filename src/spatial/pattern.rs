//! Protected glyph placement
//!
//! A "42" glyph is stamped near the middle of sufficiently large grids. Its cells
//! stay fully walled: carving, braiding and pathfinding all treat them as absent.

use crate::io::configuration::{GLYPH_HEIGHT, GLYPH_WIDTH, MIN_PATTERN_DIMENSION};
use crate::io::error::{MazeError, Result};
use crate::spatial::grid::Position;
use crate::spatial::mask::CellMask;

/// Glyph cells relative to the anchor, `(dx, dy)`
const GLYPH_OFFSETS: [(usize, usize); 18] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (1, 2),
    (2, 2),
    (2, 3),
    (2, 4),
    (4, 0),
    (4, 2),
    (4, 3),
    (4, 4),
    (5, 0),
    (5, 2),
    (5, 4),
    (6, 0),
    (6, 1),
    (6, 2),
    (6, 4),
];

/// When the protected glyph is placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum PatternPolicy {
    /// Always place it; grids too small to host it are rejected
    #[default]
    Required,
    /// Place it only when the grid is large enough
    WhenFits,
    /// Never place it
    Disabled,
}

/// Fixed set of coordinates excluded from every maze operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectedRegion {
    anchor: Option<Position>,
    positions: Vec<Position>,
    mask: CellMask,
}

impl ProtectedRegion {
    /// A region with no positions
    pub fn empty(width: usize, height: usize) -> Self {
        Self {
            anchor: None,
            positions: Vec::new(),
            mask: CellMask::new(width, height),
        }
    }

    /// Glyph anchor for a grid, defined only when both sides exceed
    /// [`MIN_PATTERN_DIMENSION`]
    pub const fn anchor_for(width: usize, height: usize) -> Option<Position> {
        if width > MIN_PATTERN_DIMENSION && height > MIN_PATTERN_DIMENSION {
            Some(Position::new(
                (width - GLYPH_WIDTH) / 2,
                (height - GLYPH_HEIGHT) / 2,
            ))
        } else {
            None
        }
    }

    /// Place the glyph on a `width` x `height` grid
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::PatternUnavailable`] when the grid is too small
    pub fn glyph(width: usize, height: usize) -> Result<Self> {
        let anchor = Self::anchor_for(width, height)
            .ok_or(MazeError::PatternUnavailable { width, height })?;

        let positions: Vec<Position> = GLYPH_OFFSETS
            .iter()
            .map(|&(dx, dy)| Position::new(anchor.x + dx, anchor.y + dy))
            .collect();
        let mask = CellMask::from_positions(width, height, &positions);

        Ok(Self {
            anchor: Some(anchor),
            positions,
            mask,
        })
    }

    /// Build the region a policy asks for
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::PatternUnavailable`] under [`PatternPolicy::Required`]
    /// when the grid is too small
    pub fn for_policy(policy: PatternPolicy, width: usize, height: usize) -> Result<Self> {
        match policy {
            PatternPolicy::Required => Self::glyph(width, height),
            PatternPolicy::WhenFits => {
                Ok(Self::glyph(width, height).unwrap_or_else(|_| Self::empty(width, height)))
            }
            PatternPolicy::Disabled => Ok(Self::empty(width, height)),
        }
    }

    /// Reject entry or exit points inside the region
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::PatternViolation`] naming the offending point
    pub fn check_excludes(&self, entry: Position, exit: Position) -> Result<()> {
        if self.contains(entry) {
            return Err(MazeError::PatternViolation {
                point: "entry",
                position: entry,
            });
        }
        if self.contains(exit) {
            return Err(MazeError::PatternViolation {
                point: "exit",
                position: exit,
            });
        }
        Ok(())
    }

    /// Anchor of the placed glyph
    pub const fn anchor(&self) -> Option<Position> {
        self.anchor
    }

    /// Protected positions in glyph order
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Membership test
    pub fn contains(&self, position: Position) -> bool {
        self.mask.contains(position)
    }

    /// Number of protected positions
    pub const fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the region is empty
    pub const fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Bitset view for grid construction
    pub const fn mask(&self) -> &CellMask {
        &self.mask
    }
}
