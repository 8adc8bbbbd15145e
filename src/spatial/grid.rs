//! Rectangular cell grid with bounds and protected-region checks
//!
//! Cells are stored in an `ndarray` indexed `[y, x]`. Every neighbor lookup goes
//! through the same bounds check, and the carving variants additionally reject
//! protected positions, so no wall of a protected cell can ever be opened.

use ndarray::Array2;
use std::fmt;

use crate::spatial::cell::{Cell, Direction, WallSet};
use crate::spatial::mask::CellMask;

/// Integer grid coordinate
///
/// Ordering compares `x` first, then `y`. The pathfinder relies on this order
/// to break ties between equal-cost frontier entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Position {
    /// Column, growing east
    pub x: usize,
    /// Row, growing south
    pub y: usize,
}

impl Position {
    /// Create a position
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The adjacent position in `direction`, if it does not underflow
    pub const fn step(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.delta();
        match (self.x.checked_add_signed(dx), self.y.checked_add_signed(dy)) {
            (Some(x), Some(y)) => Some(Self { x, y }),
            _ => None,
        }
    }

    /// Direction of a single cardinal step from `self` to `other`
    pub const fn direction_to(self, other: Self) -> Option<Direction> {
        let dx = other.x as isize - self.x as isize;
        let dy = other.y as isize - self.y as isize;
        Direction::from_delta(dx, dy)
    }
}

impl From<(usize, usize)> for Position {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.x, self.y)
    }
}

/// Rectangular array of cells plus the positions carving must never touch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<Cell>,
    protected: CellMask,
    width: usize,
    height: usize,
}

impl Grid {
    /// Create a grid of fully walled, unvisited cells
    pub fn new(width: usize, height: usize, protected: CellMask) -> Self {
        Self {
            cells: Array2::from_elem((height, width), Cell::new()),
            protected,
            width,
            height,
        }
    }

    /// Rebuild a grid from decoded wall sets laid out row-major
    ///
    /// Returns `None` when `walls` does not hold exactly `width * height` entries.
    pub fn from_walls(width: usize, height: usize, walls: &[WallSet]) -> Option<Self> {
        let cells: Vec<Cell> = walls.iter().map(|&w| Cell::with_walls(w)).collect();
        let cells = Array2::from_shape_vec((height, width), cells).ok()?;
        Some(Self {
            cells,
            protected: CellMask::new(width, height),
            width,
            height,
        })
    }

    /// Replace the protected positions, keeping every wall as it is
    ///
    /// Returns `None` when the mask covers different dimensions.
    pub fn with_protected(mut self, protected: CellMask) -> Option<Self> {
        if protected.dimensions() != (self.width, self.height) {
            return None;
        }
        self.protected = protected;
        Some(self)
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Positions excluded from carving, braiding and pathfinding
    pub const fn protected(&self) -> &CellMask {
        &self.protected
    }

    /// Check if a position lies inside the grid
    pub const fn in_bounds(&self, position: Position) -> bool {
        position.x < self.width && position.y < self.height
    }

    /// Check if a position is protected
    pub fn is_protected(&self, position: Position) -> bool {
        self.protected.contains(position)
    }

    /// Inside the grid and outside the protected region
    pub fn is_carvable(&self, position: Position) -> bool {
        self.in_bounds(position) && !self.is_protected(position)
    }

    /// Number of positions carving can reach
    pub fn carvable_count(&self) -> usize {
        self.width * self.height - self.protected.count()
    }

    /// Cell at `position`
    pub fn cell(&self, position: Position) -> Option<&Cell> {
        self.cells.get((position.y, position.x))
    }

    /// Mutable cell at `position`
    pub fn cell_mut(&mut self, position: Position) -> Option<&mut Cell> {
        self.cells.get_mut((position.y, position.x))
    }

    /// Wall set at `position`, `None` out of bounds
    pub fn walls(&self, position: Position) -> Option<WallSet> {
        self.cell(position).map(Cell::walls)
    }

    /// Whether a carving algorithm has reached `position`
    pub fn is_visited(&self, position: Position) -> bool {
        self.cell(position).is_some_and(Cell::visited)
    }

    /// Mark `position` as reached
    pub fn mark_visited(&mut self, position: Position) {
        if let Some(cell) = self.cell_mut(position) {
            cell.set_visited(true);
        }
    }

    /// In-bounds neighbor of `position` in `direction`
    pub fn neighbor(&self, position: Position, direction: Direction) -> Option<Position> {
        position
            .step(direction)
            .filter(|&next| self.in_bounds(next))
    }

    /// In-bounds, non-protected neighbor of `position` in `direction`
    pub fn carvable_neighbor(&self, position: Position, direction: Direction) -> Option<Position> {
        position
            .step(direction)
            .filter(|&next| self.is_carvable(next))
    }

    /// Carvable neighbors not yet visited, in N, E, S, W order
    pub fn unvisited_neighbors(&self, position: Position) -> Vec<(Direction, Position)> {
        Direction::ALL
            .iter()
            .filter_map(|&direction| {
                self.carvable_neighbor(position, direction)
                    .filter(|&next| !self.is_visited(next))
                    .map(|next| (direction, next))
            })
            .collect()
    }

    /// Open the wall pair between `position` and its neighbor in `direction`
    ///
    /// Both sides are updated together. Refuses (returning `false`) when either
    /// side is out of bounds or protected.
    pub fn remove_wall_between(&mut self, position: Position, direction: Direction) -> bool {
        if !self.is_carvable(position) {
            return false;
        }
        let Some(next) = self.carvable_neighbor(position, direction) else {
            return false;
        };

        if let Some(cell) = self.cell_mut(position) {
            cell.remove_wall(direction);
        }
        if let Some(cell) = self.cell_mut(next) {
            cell.remove_wall(direction.opposite());
        }
        true
    }

    /// Whether a passage connects `position` to its neighbor in `direction`
    ///
    /// Requires both facing walls to be absent.
    pub fn is_open(&self, position: Position, direction: Direction) -> bool {
        let Some(next) = self.neighbor(position, direction) else {
            return false;
        };
        let here_open = self
            .cell(position)
            .is_some_and(|cell| !cell.has_wall(direction));
        let there_open = self
            .cell(next)
            .is_some_and(|cell| !cell.has_wall(direction.opposite()));
        here_open && there_open
    }

    /// Neighbors reachable through open passages, in N, E, S, W order
    pub fn open_neighbors(&self, position: Position) -> Vec<Position> {
        Direction::ALL
            .iter()
            .filter(|&&direction| self.is_open(position, direction))
            .filter_map(|&direction| self.neighbor(position, direction))
            .collect()
    }

    /// Every position in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Position::new(x, y)))
    }

    /// Rows of cells, north to south
    pub fn rows(&self) -> impl Iterator<Item = ndarray::ArrayView1<'_, Cell>> {
        self.cells.rows().into_iter()
    }
}
