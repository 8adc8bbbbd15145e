//! Maze generator instance
//!
//! A [`MazeGenerator`] owns validated parameters, the protected region, the
//! current grid, the last computed path and its own random source. Carving
//! replaces the grid wholesale; only the seed may change between runs.

use crate::algorithm::braid::braid_dead_ends;
use crate::algorithm::carving::{Algorithm, CarveSteps};
use crate::algorithm::pathfinding::PathSteps;
use crate::algorithm::random::{RandomSelector, random_seed};
use crate::io::codec::{MazeDocument, encode_compass};
use crate::io::configuration::{
    DEFAULT_PATTERN_POLICY, MAX_DIMENSION, MIN_DIMENSION, RANDOM_SEED_MAX,
};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::grid::{Grid, Position};
use crate::spatial::pattern::{PatternPolicy, ProtectedRegion};

/// Construction inputs for a generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeParameters {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
    /// Start of the solved path
    pub entry: Position,
    /// End of the solved path
    pub exit: Position,
    /// Seed; drawn at random on construction when absent
    pub seed: Option<u64>,
    /// Opaque output handle, passed through to the exporter
    pub output_file: String,
    /// `true` keeps the maze a spanning tree; `false` braids dead ends afterwards
    pub perfect: bool,
    /// Protected glyph placement
    pub pattern: PatternPolicy,
}

impl MazeParameters {
    /// Parameters with no seed and the default pattern policy
    pub fn new(
        width: usize,
        height: usize,
        entry: Position,
        exit: Position,
        output_file: impl Into<String>,
        perfect: bool,
    ) -> Self {
        Self {
            width,
            height,
            entry,
            exit,
            seed: None,
            output_file: output_file.into(),
            perfect,
            pattern: DEFAULT_PATTERN_POLICY,
        }
    }

    /// Fix the seed
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Choose the pattern policy
    #[must_use]
    pub const fn with_pattern(mut self, pattern: PatternPolicy) -> Self {
        self.pattern = pattern;
        self
    }

    /// Check every field before anything is allocated
    ///
    /// # Errors
    ///
    /// Returns [`crate::MazeError::InvalidParameter`] naming the first offending field
    pub fn validate(&self) -> Result<()> {
        for (name, size) in [("width", self.width), ("height", self.height)] {
            if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&size) {
                return Err(invalid_parameter(
                    name,
                    &size,
                    &format!("must be between {MIN_DIMENSION} and {MAX_DIMENSION} cells"),
                ));
            }
        }

        for (name, point) in [("entry", self.entry), ("exit", self.exit)] {
            if point.x >= self.width || point.y >= self.height {
                return Err(invalid_parameter(
                    name,
                    &point,
                    &format!("outside the {}x{} maze", self.width, self.height),
                ));
            }
        }

        if self.entry == self.exit {
            return Err(invalid_parameter(
                "exit",
                &self.exit,
                &"entry and exit must be different cells",
            ));
        }

        if self.output_file.trim().is_empty() {
            return Err(invalid_parameter(
                "output_file",
                &self.output_file,
                &"must not be empty",
            ));
        }

        Ok(())
    }
}

/// Generator instance driving carving, braiding and solving over one grid
#[derive(Debug, Clone)]
pub struct MazeGenerator {
    width: usize,
    height: usize,
    entry: Position,
    exit: Position,
    seed: u64,
    output_file: String,
    perfect: bool,
    region: ProtectedRegion,
    grid: Option<Grid>,
    path: Option<Vec<Position>>,
    rng: RandomSelector,
}

impl MazeGenerator {
    /// Validate parameters and place the protected region
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any parameter fails validation
    /// - The policy requires the glyph and the grid is too small for it
    /// - Entry or exit lies inside the glyph
    pub fn new(parameters: MazeParameters) -> Result<Self> {
        parameters.validate()?;

        let region =
            ProtectedRegion::for_policy(parameters.pattern, parameters.width, parameters.height)?;
        region.check_excludes(parameters.entry, parameters.exit)?;

        let seed = parameters
            .seed
            .unwrap_or_else(|| random_seed(RANDOM_SEED_MAX));

        tracing::debug!(
            width = parameters.width,
            height = parameters.height,
            seed,
            protected = region.len(),
            "maze generator created"
        );

        Ok(Self {
            width: parameters.width,
            height: parameters.height,
            entry: parameters.entry,
            exit: parameters.exit,
            seed,
            output_file: parameters.output_file,
            perfect: parameters.perfect,
            region,
            grid: None,
            path: None,
            rng: RandomSelector::new(seed),
        })
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Start of the solved path
    pub const fn entry(&self) -> Position {
        self.entry
    }

    /// End of the solved path
    pub const fn exit(&self) -> Position {
        self.exit
    }

    /// Seed every carve and braid restarts from
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Replace the seed; the next carve uses it
    pub const fn set_seed(&mut self, seed: u64) {
        self.seed = seed;
    }

    /// Output handle supplied at construction
    pub fn output_file(&self) -> &str {
        &self.output_file
    }

    /// Whether braiding is skipped
    pub const fn perfect(&self) -> bool {
        self.perfect
    }

    /// Protected positions
    pub const fn protected_region(&self) -> &ProtectedRegion {
        &self.region
    }

    /// Current grid, `None` before the first carve
    pub const fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    /// Last path found, `None` before a successful search
    pub fn path(&self) -> Option<&[Position]> {
        self.path.as_deref()
    }

    /// Forget the stored path
    pub fn clear_path(&mut self) {
        self.path = None;
    }

    /// Discard the current maze and start a lazy carve with `algorithm`
    ///
    /// The stored path is cleared as it no longer matches the grid.
    pub fn carve_steps(&mut self, algorithm: Algorithm) -> CarveSteps<'_> {
        tracing::debug!(%algorithm, seed = self.seed, "carving started");
        self.path = None;
        let grid = self
            .grid
            .insert(Grid::new(self.width, self.height, self.region.mask().clone()));
        CarveSteps::new(
            grid,
            &mut self.rng,
            algorithm,
            self.entry,
            self.seed,
            self.perfect,
        )
    }

    /// Carve with `algorithm` to completion, returning the number of wall pairs removed
    pub fn carve(&mut self, algorithm: Algorithm) -> usize {
        let mut steps = self.carve_steps(algorithm);
        steps.by_ref().for_each(drop);
        steps.carved()
    }

    /// Lazy depth-first backtracker run
    pub fn backtracker_steps(&mut self) -> CarveSteps<'_> {
        self.carve_steps(Algorithm::Backtracker)
    }

    /// Depth-first backtracker run to completion
    pub fn backtracker(&mut self) -> usize {
        self.carve(Algorithm::Backtracker)
    }

    /// Lazy randomized Prim run
    pub fn prim_steps(&mut self) -> CarveSteps<'_> {
        self.carve_steps(Algorithm::Prim)
    }

    /// Randomized Prim run to completion
    pub fn prim(&mut self) -> usize {
        self.carve(Algorithm::Prim)
    }

    /// Reseed and braid the current grid, returning the number of walls opened
    ///
    /// Does nothing before the first carve.
    pub fn braid(&mut self) -> usize {
        let Some(grid) = self.grid.as_mut() else {
            tracing::warn!("braiding requested before carving");
            return 0;
        };
        self.rng.reseed(self.seed);
        braid_dead_ends(grid, &mut self.rng)
    }

    /// Lazy shortest-path search from entry to exit
    ///
    /// Empty before the first carve.
    pub fn shortest_path_steps(&mut self) -> PathSteps<'_> {
        if self.grid.is_none() {
            tracing::warn!("no path can be provided before a maze is carved");
        }
        PathSteps::new(self.grid.as_ref(), self.entry, self.exit, &mut self.path)
    }

    /// Run the shortest-path search to completion
    ///
    /// Returns the stored path, which keeps its previous value when the exit
    /// is unreachable.
    pub fn find_shortest_path(&mut self) -> Option<&[Position]> {
        self.shortest_path_steps().for_each(drop);
        self.path()
    }

    /// Stored path as compass letters; empty when there is no path
    pub fn compass_path(&self) -> String {
        self.path.as_deref().map_or_else(String::new, encode_compass)
    }

    /// Export view of the current maze, `None` before the first carve
    pub fn to_document(&self) -> Option<MazeDocument> {
        self.grid.as_ref().map(|grid| MazeDocument {
            grid: grid.clone(),
            entry: self.entry,
            exit: self.exit,
            path: self.compass_path(),
        })
    }
}
