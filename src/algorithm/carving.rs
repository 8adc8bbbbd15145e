//! Shared carving driver
//!
//! Both carving algorithms are written as [`CarvingStrategy`] implementations
//! that remove one wall pair per call. [`CarveSteps`] wraps a strategy into a
//! lazy, non-restartable sequence of [`CarveStep`] events: a start sentinel,
//! one event per removed wall pair, and a braiding pass on exhaustion when
//! the maze is not meant to be perfect.

use std::fmt;
use std::iter::FusedIterator;

use crate::algorithm::backtracker::Backtracker;
use crate::algorithm::braid::braid_dead_ends;
use crate::algorithm::prim::RandomizedPrim;
use crate::algorithm::random::RandomSelector;
use crate::spatial::cell::Direction;
use crate::spatial::grid::{Grid, Position};

/// One observable carving event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CarveStep {
    /// Cell the wall was removed from
    pub position: Position,
    /// Side of `position` that was opened; `None` for the start sentinel
    pub wall: Option<Direction>,
}

impl CarveStep {
    /// Start-of-run sentinel at the entry
    pub const fn start(entry: Position) -> Self {
        Self {
            position: entry,
            wall: None,
        }
    }

    /// A wall removal on `side` of `position`
    pub const fn carved(position: Position, side: Direction) -> Self {
        Self {
            position,
            wall: Some(side),
        }
    }

    /// Whether this is the start sentinel
    pub const fn is_start(&self) -> bool {
        self.wall.is_none()
    }
}

/// Available carving algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Algorithm {
    /// Depth-first search with an explicit stack
    #[default]
    Backtracker,
    /// Randomized Prim over a frontier of candidate edges
    Prim,
}

impl Algorithm {
    /// Fresh strategy state for one run
    pub fn strategy(self) -> Box<dyn CarvingStrategy> {
        match self {
            Self::Backtracker => Box::new(Backtracker::new()),
            Self::Prim => Box::new(RandomizedPrim::new()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Backtracker => write!(f, "backtracker"),
            Self::Prim => write!(f, "prim"),
        }
    }
}

/// A wall-removal algorithm driven one carve at a time
pub trait CarvingStrategy {
    /// Prepare internal state; the entry is already marked visited
    fn begin(&mut self, grid: &Grid, entry: Position);

    /// Remove the next wall pair and report it, or `None` once the run is over
    fn advance(&mut self, grid: &mut Grid, rng: &mut RandomSelector) -> Option<CarveStep>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Start,
    Carving,
    Done,
}

/// Lazy sequence of carving events over a freshly reset grid
///
/// Exhausting the sequence performs the whole run, braiding included. Dropping
/// it early leaves the grid partially carved.
pub struct CarveSteps<'a> {
    grid: &'a mut Grid,
    rng: &'a mut RandomSelector,
    strategy: Box<dyn CarvingStrategy>,
    entry: Position,
    seed: u64,
    perfect: bool,
    phase: Phase,
    carved: usize,
}

impl<'a> CarveSteps<'a> {
    /// Reseed `rng`, mark `entry` visited and hand the grid to `algorithm`
    ///
    /// `grid` must be freshly built; carving starts from its current state.
    pub fn new(
        grid: &'a mut Grid,
        rng: &'a mut RandomSelector,
        algorithm: Algorithm,
        entry: Position,
        seed: u64,
        perfect: bool,
    ) -> Self {
        rng.reseed(seed);
        grid.mark_visited(entry);
        let mut strategy = algorithm.strategy();
        strategy.begin(grid, entry);

        Self {
            grid,
            rng,
            strategy,
            entry,
            seed,
            perfect,
            phase: Phase::Start,
            carved: 0,
        }
    }

    /// Wall pairs removed so far, sentinel and braiding excluded
    pub const fn carved(&self) -> usize {
        self.carved
    }

    /// Whether the run, braiding included, has finished
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Done
    }

    fn finish(&mut self) {
        self.phase = Phase::Done;
        tracing::debug!(carved = self.carved, "carving finished");

        if !self.perfect {
            self.rng.reseed(self.seed);
            let opened = braid_dead_ends(self.grid, self.rng);
            tracing::debug!(opened, "braided dead ends");
        }
    }
}

impl Iterator for CarveSteps<'_> {
    type Item = CarveStep;

    fn next(&mut self) -> Option<CarveStep> {
        match self.phase {
            Phase::Start => {
                self.phase = Phase::Carving;
                Some(CarveStep::start(self.entry))
            }
            Phase::Carving => {
                if let Some(step) = self.strategy.advance(self.grid, self.rng) {
                    self.carved += 1;
                    Some(step)
                } else {
                    self.finish();
                    None
                }
            }
            Phase::Done => None,
        }
    }
}

impl FusedIterator for CarveSteps<'_> {}
