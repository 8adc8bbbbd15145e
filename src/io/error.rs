//! Error types for maze construction, configuration and export

use std::fmt;
use std::path::PathBuf;

use crate::spatial::grid::Position;

/// Main error type for all maze operations
#[derive(Debug)]
pub enum MazeError {
    /// A construction parameter failed validation
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// The grid is too small to host the protected glyph
    PatternUnavailable {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },

    /// Entry or exit lies inside the protected glyph
    PatternViolation {
        /// Which point collided (`"entry"` or `"exit"`)
        point: &'static str,
        /// The colliding coordinate
        position: Position,
    },

    /// A configuration line could not be interpreted
    Config {
        /// 1-based line number, 0 when the problem is not tied to a line
        line: usize,
        /// Description of the problem
        reason: String,
    },

    /// A configuration key is not recognised
    UnknownKey {
        /// The offending key
        key: String,
        /// 1-based line number
        line: usize,
    },

    /// A mandatory configuration key is absent
    MissingKey {
        /// The missing key
        key: &'static str,
    },

    /// Exported maze text could not be decoded
    Decode {
        /// 1-based line number
        line: usize,
        /// Description of the problem
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::PatternUnavailable { width, height } => {
                write!(
                    f,
                    "Cannot place the protected pattern on a {width}x{height} maze: both sides must exceed 8"
                )
            }
            Self::PatternViolation { point, position } => {
                write!(f, "The {point} point ({position}) lies inside the protected pattern")
            }
            Self::Config { line, reason } => {
                if *line == 0 {
                    write!(f, "Invalid configuration: {reason}")
                } else {
                    write!(f, "Invalid configuration at line {line}: {reason}")
                }
            }
            Self::UnknownKey { key, line } => {
                write!(f, "Unknown configuration key '{key}' at line {line}")
            }
            Self::MissingKey { key } => {
                write!(f, "Missing mandatory configuration key '{key}'")
            }
            Self::Decode { line, reason } => {
                write!(f, "Malformed maze text at line {line}: {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for maze results
pub type Result<T> = std::result::Result<T, MazeError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MazeError {
    MazeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a configuration error tied to a line
pub fn config_error(line: usize, reason: &impl ToString) -> MazeError {
    MazeError::Config {
        line,
        reason: reason.to_string(),
    }
}

/// Create a decode error tied to a line
pub fn decode_error(line: usize, reason: &impl ToString) -> MazeError {
    MazeError::Decode {
        line,
        reason: reason.to_string(),
    }
}
