//! CLI entry point for seeded maze generation and solving

use clap::Parser;
use mazegen::io::cli::{Cli, MazeRunner};

fn main() -> mazegen::Result<()> {
    let cli = Cli::parse();
    mazegen::io::logging::init(cli.log_level());
    let mut runner = MazeRunner::new(cli);
    runner.run()
}
