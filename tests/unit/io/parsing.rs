//! Tests for configuration file parsing

#[cfg(test)]
mod tests {
    use std::io::Write;

    use mazegen::MazeError;
    use mazegen::io::parsing::MazeConfig;
    use mazegen::spatial::grid::Position;

    const VALID: &str = "\
# maze settings
WIDTH=20
HEIGHT=15
ENTRY=0,0
EXIT=19,14
OUTPUT_FILE=maze.txt
PERFECT=True
";

    // Tests a well-formed file converts every field
    // Verified by swapping the coordinate order
    #[test]
    fn test_parse_valid() {
        let config = MazeConfig::parse(VALID).expect("valid configuration");

        assert_eq!(config.width, 20);
        assert_eq!(config.height, 15);
        assert_eq!(config.entry, Position::new(0, 0));
        assert_eq!(config.exit, Position::new(19, 14));
        assert_eq!(config.output_file, "maze.txt");
        assert!(config.perfect);
        assert_eq!(config.seed, None);
    }

    // Tests whitespace, the optional seed and later duplicates
    // Verified by keeping the first duplicate
    #[test]
    fn test_parse_lenient_layout() {
        let text = format!("{VALID}\n  SEED = 7  \nWIDTH = 21\nnot a setting\nPERFECT=0\n");
        let config = MazeConfig::parse(&text).expect("valid configuration");

        assert_eq!(config.width, 21);
        assert_eq!(config.seed, Some(7));
        assert!(!config.perfect);
    }

    // Tests each rejection maps to its error variant
    // Verified by ignoring unknown keys
    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            MazeConfig::parse("# only a comment\n\n"),
            Err(MazeError::Config { line: 0, .. })
        ));
        assert!(matches!(
            MazeConfig::parse(&format!("{VALID}DEPTH=3\n")),
            Err(MazeError::UnknownKey { line: 8, .. })
        ));
        assert!(matches!(
            MazeConfig::parse(&VALID.replace("PERFECT=True\n", "")),
            Err(MazeError::MissingKey { key: "PERFECT" })
        ));
        assert!(matches!(
            MazeConfig::parse(&VALID.replace("OUTPUT_FILE=maze.txt", "OUTPUT_FILE=")),
            Err(MazeError::MissingKey { key: "OUTPUT_FILE" })
        ));
    }

    // Tests value conversions report the offending line
    // Verified by parsing signed integers
    #[test]
    fn test_parse_bad_values() {
        assert!(matches!(
            MazeConfig::parse(&VALID.replace("WIDTH=20", "WIDTH=-20")),
            Err(MazeError::Config { line: 2, .. })
        ));
        assert!(matches!(
            MazeConfig::parse(&VALID.replace("ENTRY=0,0", "ENTRY=0,0,0")),
            Err(MazeError::Config { line: 4, .. })
        ));
        assert!(matches!(
            MazeConfig::parse(&VALID.replace("PERFECT=True", "PERFECT=yes")),
            Err(MazeError::Config { line: 7, .. })
        ));
    }

    // Tests conversion keeps the seed and uses the default pattern policy
    // Verified by dropping the seed during conversion
    #[test]
    fn test_into_parameters() {
        let text = format!("{VALID}SEED=3\n");
        let parameters = MazeConfig::parse(&text)
            .expect("valid configuration")
            .into_parameters();

        assert_eq!(parameters.seed, Some(3));
        assert_eq!(parameters.output_file, "maze.txt");
        assert!(parameters.validate().is_ok());
    }

    // Tests reading from disk and reporting unreadable paths
    // Verified by parsing the path instead of its contents
    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(VALID.as_bytes()).expect("write config");

        let config = MazeConfig::from_file(file.path()).expect("readable config");
        assert_eq!(config.width, 20);

        let dir = tempfile::tempdir().expect("temp dir");
        assert!(matches!(
            MazeConfig::from_file(&dir.path().join("absent.txt")),
            Err(MazeError::FileSystem { .. })
        ));
    }
}
