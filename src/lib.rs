//! Seeded rectangular maze carving with a protected glyph region, dead-end braiding
//! and uniform-cost shortest-path search
//!
//! Every stage is available both as a run-to-completion call and as a lazy step
//! sequence, so an external animator can replay carving and solving one event at a time.

#![forbid(unsafe_code)]

/// Carving strategies, braiding, pathfinding and the generator instance
pub mod algorithm;
/// Input/output: codec, configuration files, command line, logging and errors
pub mod io;
/// Cells, walls, the grid and the protected region
pub mod spatial;

pub use algorithm::generator::{MazeGenerator, MazeParameters};
pub use io::error::{MazeError, Result};
pub use spatial::{Direction, Grid, Position};
