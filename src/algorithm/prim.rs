//! Randomized Prim carving
//!
//! Maintains a frontier of candidate edges leading from visited cells to
//! unvisited carvable neighbors. Each step draws one edge uniformly at random;
//! edges whose target was reached in the meantime are discarded silently.

use crate::algorithm::carving::{CarveStep, CarvingStrategy};
use crate::algorithm::random::RandomSelector;
use crate::spatial::cell::Direction;
use crate::spatial::grid::{Grid, Position};

/// Candidate passage from a visited cell to a neighbor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierEdge {
    /// Visited side
    pub from: Position,
    /// Neighbor that would be connected
    pub to: Position,
    /// Side of `from` facing `to`
    pub wall: Direction,
}

impl FrontierEdge {
    /// Side of `to` facing `from`
    pub const fn opposite(&self) -> Direction {
        self.wall.opposite()
    }
}

/// Frontier state for one Prim run
#[derive(Debug, Clone, Default)]
pub struct RandomizedPrim {
    frontier: Vec<FrontierEdge>,
}

impl RandomizedPrim {
    /// Create an idle strategy; [`CarvingStrategy::begin`] seeds the frontier
    pub const fn new() -> Self {
        Self {
            frontier: Vec::new(),
        }
    }

    /// Number of pending candidate edges
    pub const fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    fn extend_frontier(&mut self, grid: &Grid, from: Position) {
        self.frontier.extend(
            grid.unvisited_neighbors(from)
                .into_iter()
                .map(|(wall, to)| FrontierEdge { from, to, wall }),
        );
    }
}

impl CarvingStrategy for RandomizedPrim {
    fn begin(&mut self, grid: &Grid, entry: Position) {
        self.frontier.clear();
        self.extend_frontier(grid, entry);
    }

    fn advance(&mut self, grid: &mut Grid, rng: &mut RandomSelector) -> Option<CarveStep> {
        while !self.frontier.is_empty() {
            let index = rng.index(self.frontier.len());
            let edge = self.frontier.swap_remove(index);

            if grid.is_visited(edge.to) {
                continue;
            }

            grid.remove_wall_between(edge.from, edge.wall);
            grid.mark_visited(edge.to);
            self.extend_frontier(grid, edge.to);
            return Some(CarveStep::carved(edge.from, edge.wall));
        }
        None
    }
}
