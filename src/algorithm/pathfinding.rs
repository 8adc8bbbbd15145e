//! Uniform-cost shortest-path search over the carved grid
//!
//! Every passage costs 1. Frontier entries are ordered by `(cost, position)`,
//! so equal costs fall back to position order (`x`, then `y`). A cell is
//! re-queued only when a strictly cheaper route to it appears, and the search
//! stops the first time the exit is dequeued. Routes are kept as a predecessor
//! map and rebuilt for each reported path.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::iter::FusedIterator;

use crate::spatial::grid::{Grid, Position};

/// Outcome of expanding one frontier entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expansion {
    /// A non-goal cell was expanded; carries the partial path ending there
    Partial(Vec<Position>),
    /// The exit was dequeued; carries the complete path
    Found(Vec<Position>),
    /// The frontier is empty and the exit was never reached
    Exhausted,
}

/// Incremental uniform-cost search state
#[derive(Debug, Clone)]
pub struct UniformCostSearch {
    exit: Position,
    frontier: BinaryHeap<Reverse<(usize, Position)>>,
    best_cost: HashMap<Position, usize>,
    came_from: HashMap<Position, Position>,
    expanded: usize,
    done: bool,
}

impl UniformCostSearch {
    /// Start a search from `entry` towards `exit`
    pub fn new(entry: Position, exit: Position) -> Self {
        let mut frontier = BinaryHeap::new();
        frontier.push(Reverse((0, entry)));
        let mut best_cost = HashMap::new();
        best_cost.insert(entry, 0);

        Self {
            exit,
            frontier,
            best_cost,
            came_from: HashMap::new(),
            expanded: 0,
            done: false,
        }
    }

    /// Number of expansions performed so far
    pub const fn expanded(&self) -> usize {
        self.expanded
    }

    /// Route from the entry to `end` through recorded predecessors
    ///
    /// A cell's predecessor is settled before the cell is queued, so the chain
    /// is stable once `end` has been dequeued.
    fn path_to(&self, end: Position) -> Vec<Position> {
        let mut path = vec![end];
        let mut current = end;
        while let Some(&previous) = self.came_from.get(&current) {
            path.push(previous);
            current = previous;
        }
        path.reverse();
        path
    }

    /// Dequeue and expand the cheapest frontier entry
    pub fn expand(&mut self, grid: &Grid) -> Expansion {
        if self.done {
            return Expansion::Exhausted;
        }

        while let Some(Reverse((cost, current))) = self.frontier.pop() {
            if cost > self.best_cost.get(&current).copied().unwrap_or(usize::MAX) {
                continue;
            }
            self.expanded += 1;

            if current == self.exit {
                self.done = true;
                return Expansion::Found(self.path_to(current));
            }

            let next_cost = cost + 1;
            for next in grid.open_neighbors(current) {
                if !grid.is_carvable(next) {
                    continue;
                }
                let known = self.best_cost.get(&next).copied().unwrap_or(usize::MAX);
                if next_cost < known {
                    self.best_cost.insert(next, next_cost);
                    self.came_from.insert(next, current);
                    self.frontier.push(Reverse((next_cost, next)));
                }
            }

            return Expansion::Partial(self.path_to(current));
        }

        self.done = true;
        Expansion::Exhausted
    }
}

/// Run a search to completion
///
/// Returns `None` when `exit` is unreachable from `entry`.
pub fn shortest_path(grid: &Grid, entry: Position, exit: Position) -> Option<Vec<Position>> {
    let mut search = UniformCostSearch::new(entry, exit);
    loop {
        match search.expand(grid) {
            Expansion::Partial(_) => {}
            Expansion::Found(path) => return Some(path),
            Expansion::Exhausted => return None,
        }
    }
}

/// Lazy sequence of partial paths, one per expansion
///
/// The final item is the complete path; it is also written to the result slot
/// the sequence was created with. When the exit is unreachable the slot keeps
/// its previous value.
pub struct PathSteps<'a> {
    grid: Option<&'a Grid>,
    search: UniformCostSearch,
    result: &'a mut Option<Vec<Position>>,
}

impl<'a> PathSteps<'a> {
    /// Prepare a search over `grid`; with no grid the sequence is empty
    pub fn new(
        grid: Option<&'a Grid>,
        entry: Position,
        exit: Position,
        result: &'a mut Option<Vec<Position>>,
    ) -> Self {
        Self {
            grid,
            search: UniformCostSearch::new(entry, exit),
            result,
        }
    }

    /// Number of expansions performed so far
    pub const fn expanded(&self) -> usize {
        self.search.expanded()
    }
}

impl Iterator for PathSteps<'_> {
    type Item = Vec<Position>;

    fn next(&mut self) -> Option<Vec<Position>> {
        let grid = self.grid?;
        match self.search.expand(grid) {
            Expansion::Partial(path) => Some(path),
            Expansion::Found(path) => {
                tracing::debug!(
                    length = path.len(),
                    expanded = self.search.expanded(),
                    "shortest path found"
                );
                *self.result = Some(path.clone());
                self.grid = None;
                Some(path)
            }
            Expansion::Exhausted => {
                tracing::warn!(
                    expanded = self.search.expanded(),
                    "exit is unreachable from entry"
                );
                self.grid = None;
                None
            }
        }
    }
}

impl FusedIterator for PathSteps<'_> {}
