//! Input/output operations and error handling

/// Command-line interface and the generation pipeline
pub mod cli;
/// Hex grid and compass path encoding
pub mod codec;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Export file writing and reading
pub mod export;
/// Tracing subscriber setup
pub mod logging;
/// Configuration file parsing
pub mod parsing;
/// Progress display for step sequences
pub mod progress;
