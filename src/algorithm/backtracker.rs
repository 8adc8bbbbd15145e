//! Depth-first backtracker carving
//!
//! Keeps an explicit stack of visited cells. Each step looks at the top of the
//! stack, picks one unvisited carvable neighbor uniformly at random, opens the
//! wall pair towards it and pushes it. Dead ends are popped without emitting.

use crate::algorithm::carving::{CarveStep, CarvingStrategy};
use crate::algorithm::random::RandomSelector;
use crate::spatial::grid::{Grid, Position};

/// Stack state for one backtracker run
#[derive(Debug, Clone, Default)]
pub struct Backtracker {
    stack: Vec<Position>,
}

impl Backtracker {
    /// Create an idle backtracker; [`CarvingStrategy::begin`] seeds the stack
    pub const fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Current stack depth
    pub const fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl CarvingStrategy for Backtracker {
    fn begin(&mut self, _grid: &Grid, entry: Position) {
        self.stack.clear();
        self.stack.push(entry);
    }

    fn advance(&mut self, grid: &mut Grid, rng: &mut RandomSelector) -> Option<CarveStep> {
        loop {
            let current = *self.stack.last()?;
            let neighbors = grid.unvisited_neighbors(current);

            let Some(&(direction, next)) = rng.choose(&neighbors) else {
                self.stack.pop();
                continue;
            };

            grid.remove_wall_between(current, direction);
            grid.mark_visited(next);
            self.stack.push(next);
            return Some(CarveStep::carved(current, direction));
        }
    }
}
