//! Spatial data structures for the maze
//!
//! This module contains:
//! - Per-cell wall state and cardinal directions
//! - The rectangular grid with bounds and protected-region checks
//! - The fixed glyph pattern that carving must never breach

/// Cardinal directions, wall sets and cells
pub mod cell;
/// Rectangular grid of cells
pub mod grid;
/// Fixed-size position bit set
pub mod mask;
/// Protected glyph placement
pub mod pattern;

pub use cell::{Cell, Direction, WallSet};
pub use grid::{Grid, Position};
pub use mask::CellMask;
pub use pattern::{PatternPolicy, ProtectedRegion};
