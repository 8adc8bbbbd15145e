//! Command-line interface: read a configuration file, carve, solve and export

use crate::algorithm::carving::Algorithm;
use crate::algorithm::generator::{MazeGenerator, MazeParameters};
use crate::io::configuration::{DEFAULT_ALGORITHM, DEFAULT_PATTERN_POLICY};
use crate::io::error::Result;
use crate::io::export::write_output;
use crate::io::parsing::MazeConfig;
use crate::io::progress::ProgressManager;
use crate::spatial::pattern::PatternPolicy;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "mazegen")]
#[command(
    author,
    version,
    about = "Carve a seeded maze around a protected glyph and export its shortest path"
)]
/// Command-line arguments for the maze generator
pub struct Cli {
    /// Configuration file with WIDTH, HEIGHT, ENTRY, EXIT, OUTPUT_FILE, PERFECT and optional SEED
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Carving algorithm
    #[arg(short, long, value_enum, default_value_t = DEFAULT_ALGORITHM)]
    pub algorithm: Algorithm,

    /// Protected glyph placement
    #[arg(short, long, value_enum, default_value_t = DEFAULT_PATTERN_POLICY)]
    pub pattern: PatternPolicy,

    /// Seed overriding the configuration file
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Suppress progress output and informational logs
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log every stage at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Default log level implied by the flags
    pub const fn log_level(&self) -> Level {
        if self.quiet {
            Level::WARN
        } else if self.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        }
    }

    /// Merge the configuration file with command-line overrides
    pub fn parameters(&self, config: MazeConfig) -> MazeParameters {
        let parameters = config.into_parameters().with_pattern(self.pattern);
        match self.seed {
            Some(seed) => parameters.with_seed(seed),
            None => parameters,
        }
    }
}

/// Runs the full pipeline for one configuration file
pub struct MazeRunner {
    cli: Cli,
    progress_manager: ProgressManager,
}

impl MazeRunner {
    /// Create a runner for the given arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = ProgressManager::new(cli.should_show_progress());
        Self {
            cli,
            progress_manager,
        }
    }

    /// Parse, construct, carve, solve and export
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration file cannot be read or is invalid
    /// - Generator construction fails validation
    /// - The output file cannot be written
    pub fn run(&mut self) -> Result<()> {
        let start_time = Instant::now();

        let config = MazeConfig::from_file(&self.cli.config)?;
        let mut generator = MazeGenerator::new(self.cli.parameters(config))?;
        tracing::info!(
            width = generator.width(),
            height = generator.height(),
            seed = generator.seed(),
            algorithm = %self.cli.algorithm,
            "generating maze"
        );

        self.carve(&mut generator);
        self.solve(&mut generator);
        self.progress_manager.finish();

        write_output(&generator)?;

        tracing::info!(
            path = %generator.compass_path(),
            elapsed_ms = start_time.elapsed().as_millis(),
            "done"
        );
        Ok(())
    }

    fn carve(&mut self, generator: &mut MazeGenerator) {
        let algorithm = self.cli.algorithm;
        // A spanning tree over the carvable cells has one edge fewer than cells
        let total = (generator.width() * generator.height())
            .saturating_sub(generator.protected_region().len())
            .saturating_sub(1);

        self.progress_manager
            .start_carving(&algorithm.to_string(), total);

        let mut steps = generator.carve_steps(algorithm);
        for step in steps.by_ref() {
            if !step.is_start() {
                self.progress_manager.carved();
            }
        }
        let carved = steps.carved();
        self.progress_manager.complete_carving(carved);
    }

    fn solve(&mut self, generator: &mut MazeGenerator) {
        self.progress_manager.start_solving();

        let mut steps = generator.shortest_path_steps();
        while let Some(partial) = steps.next() {
            self.progress_manager
                .expanded(steps.expanded(), partial.len());
        }

        let path_len = generator.path().map(<[_]>::len);
        if path_len.is_none() {
            tracing::warn!("no path from entry to exit");
        }
        self.progress_manager.complete_solving(path_len);
    }
}
