//! Tests for error display and source chaining

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::io;
    use std::path::PathBuf;

    use mazegen::MazeError;
    use mazegen::io::error::{config_error, decode_error, invalid_parameter};
    use mazegen::spatial::grid::Position;

    // Tests messages carry the offending values
    // Verified by dropping the value from the parameter message
    #[test]
    fn test_display_messages() {
        let error = invalid_parameter("width", &2, &"too narrow");
        assert_eq!(error.to_string(), "Invalid parameter 'width' = '2': too narrow");

        let violation = MazeError::PatternViolation {
            point: "exit",
            position: Position::new(7, 6),
        };
        assert_eq!(
            violation.to_string(),
            "The exit point (7, 6) lies inside the protected pattern"
        );

        let missing = MazeError::MissingKey { key: "PERFECT" };
        assert_eq!(
            missing.to_string(),
            "Missing mandatory configuration key 'PERFECT'"
        );

        let unavailable = MazeError::PatternUnavailable {
            width: 3,
            height: 12,
        };
        assert!(unavailable.to_string().contains("3x12"));
    }

    // Tests line numbers are shown only when known
    // Verified by always printing the line
    #[test]
    fn test_line_numbers() {
        assert_eq!(
            config_error(0, &"file is empty").to_string(),
            "Invalid configuration: file is empty"
        );
        assert_eq!(
            config_error(4, &"bad value").to_string(),
            "Invalid configuration at line 4: bad value"
        );
        assert_eq!(
            decode_error(2, &"ragged row").to_string(),
            "Malformed maze text at line 2: ragged row"
        );
    }

    // Tests only file system errors expose a source
    // Verified by returning None for every variant
    #[test]
    fn test_error_source() {
        let fs_error = MazeError::FileSystem {
            path: PathBuf::from("maze.txt"),
            operation: "write",
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(fs_error.source().is_some());
        assert!(fs_error.to_string().contains("maze.txt"));

        let unknown = MazeError::UnknownKey {
            key: "DEPTH".to_string(),
            line: 3,
        };
        assert!(unknown.source().is_none());
    }
}
