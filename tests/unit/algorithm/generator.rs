//! Tests for parameter validation and the generator lifecycle

#[cfg(test)]
mod tests {
    use mazegen::algorithm::carving::{Algorithm, CarveStep};
    use mazegen::io::configuration::MAX_DIMENSION;
    use mazegen::io::parsing::MazeConfig;
    use mazegen::spatial::grid::Position;
    use mazegen::spatial::pattern::PatternPolicy;
    use mazegen::{MazeError, MazeGenerator, MazeParameters};

    fn parameters(width: usize, height: usize) -> MazeParameters {
        MazeParameters::new(
            width,
            height,
            Position::new(0, 0),
            Position::new(width - 1, height - 1),
            "maze.txt",
            true,
        )
        .with_seed(42)
    }

    fn invalid_parameter_name(result: mazegen::Result<MazeGenerator>) -> Option<&'static str> {
        match result {
            Err(MazeError::InvalidParameter { parameter, .. }) => Some(parameter),
            _ => None,
        }
    }

    // Tests validation names the first offending field
    // Verified by reordering the checks
    #[test]
    fn test_validation_order() {
        let mut narrow = parameters(9, 9);
        narrow.width = 2;
        narrow.height = 1;
        assert_eq!(invalid_parameter_name(MazeGenerator::new(narrow)), Some("width"));

        let mut short = parameters(9, 9);
        short.height = 2;
        assert_eq!(invalid_parameter_name(MazeGenerator::new(short)), Some("height"));

        let mut outside = parameters(9, 9);
        outside.entry = Position::new(9, 0);
        assert_eq!(invalid_parameter_name(MazeGenerator::new(outside)), Some("entry"));

        let mut exit_outside = parameters(9, 9);
        exit_outside.exit = Position::new(0, 9);
        assert_eq!(invalid_parameter_name(MazeGenerator::new(exit_outside)), Some("exit"));

        let mut same = parameters(9, 9);
        same.exit = same.entry;
        assert_eq!(invalid_parameter_name(MazeGenerator::new(same)), Some("exit"));

        let mut unnamed = parameters(9, 9);
        unnamed.output_file = "  ".to_string();
        assert_eq!(
            invalid_parameter_name(MazeGenerator::new(unnamed)),
            Some("output_file")
        );
    }

    // Tests oversized grids are rejected before anything is allocated
    // Verified by removing the upper bound from the dimension check
    #[test]
    fn test_validation_rejects_oversized_grids() {
        let config = MazeConfig::parse(
            "WIDTH=5000000000\nHEIGHT=5000000000\nENTRY=0,0\nEXIT=1,1\nOUTPUT_FILE=maze.txt\nPERFECT=1\n",
        )
        .expect("valid configuration text");
        assert_eq!(
            invalid_parameter_name(MazeGenerator::new(config.into_parameters())),
            Some("width")
        );

        let mut tall = parameters(9, 9);
        tall.height = MAX_DIMENSION + 1;
        assert_eq!(invalid_parameter_name(MazeGenerator::new(tall)), Some("height"));

        let mut wide = parameters(9, 9);
        wide.width = 100_000;
        wide.height = 100_000;
        assert_eq!(invalid_parameter_name(MazeGenerator::new(wide)), Some("width"));

        let mut edge = parameters(9, 9);
        edge.width = MAX_DIMENSION;
        assert!(edge.validate().is_ok());
    }

    // Tests the glyph requirement and the entry/exit exclusion at construction
    // Verified by constructing without placing the region
    #[test]
    fn test_pattern_checks_at_construction() {
        assert!(matches!(
            MazeGenerator::new(parameters(8, 12)),
            Err(MazeError::PatternUnavailable { .. })
        ));

        let small = MazeGenerator::new(parameters(3, 3).with_pattern(PatternPolicy::WhenFits))
            .expect("small grid without glyph");
        assert!(small.protected_region().is_empty());

        let mut inside = parameters(9, 9);
        inside.entry = Position::new(1, 2);
        assert!(matches!(
            MazeGenerator::new(inside),
            Err(MazeError::PatternViolation { point: "entry", .. })
        ));

        let generator = MazeGenerator::new(parameters(9, 9)).expect("valid 9x9");
        assert_eq!(generator.protected_region().len(), 18);
    }

    // Tests a missing seed is drawn from the small default range
    // Verified by defaulting to u64::MAX
    #[test]
    fn test_random_seed_when_absent() {
        let mut params = parameters(9, 9);
        params.seed = None;

        let generator = MazeGenerator::new(params).expect("valid 9x9");
        assert!(generator.seed() <= 100);
    }

    // Tests nothing is available before the first carve
    // Verified by building the grid in the constructor
    #[test]
    fn test_state_before_carving() {
        let mut generator = MazeGenerator::new(parameters(9, 9)).expect("valid 9x9");

        assert!(generator.grid().is_none());
        assert_eq!(generator.braid(), 0);
        assert_eq!(generator.shortest_path_steps().count(), 0);
        assert!(generator.find_shortest_path().is_none());
        assert!(generator.to_document().is_none());
        assert_eq!(generator.compass_path(), "");
    }

    // Tests both algorithms carve a spanning tree over the carvable cells
    // Verified by counting the sentinel as a carve
    #[test]
    fn test_carve_counts() {
        let mut generator = MazeGenerator::new(parameters(10, 10)).expect("valid 10x10");
        assert_eq!(generator.backtracker(), 100 - 18 - 1);
        assert_eq!(generator.prim(), 100 - 18 - 1);
    }

    // Tests identical configurations emit identical event sequences
    // Verified by reseeding from entropy
    #[test]
    fn test_deterministic_steps() {
        let record = |algorithm: Algorithm| {
            let mut generator = MazeGenerator::new(parameters(12, 9)).expect("valid 12x9");
            let steps: Vec<CarveStep> = generator.carve_steps(algorithm).collect();
            (steps, generator.grid().cloned())
        };

        for algorithm in [Algorithm::Backtracker, Algorithm::Prim] {
            assert_eq!(record(algorithm), record(algorithm));
        }
    }

    // Tests carving twice with the same seed restarts the random sequence
    // Verified by skipping the reseed at the start of a carve
    #[test]
    fn test_recarve_is_reproducible() {
        let mut generator = MazeGenerator::new(parameters(11, 11)).expect("valid 11x11");
        generator.backtracker();
        let first = generator.grid().cloned();

        generator.prim();
        generator.backtracker();
        assert_eq!(generator.grid().cloned(), first);

        generator.set_seed(43);
        generator.backtracker();
        assert_ne!(generator.grid().cloned(), first);
    }

    // Tests the path is found, stored and cleared by the next carve
    // Verified by keeping the stale path after re-carving
    #[test]
    fn test_path_lifecycle() {
        let mut generator = MazeGenerator::new(parameters(9, 9)).expect("valid 9x9");
        generator.prim();

        let path = generator
            .find_shortest_path()
            .map(<[Position]>::to_vec)
            .expect("perfect maze is connected");
        assert_eq!(path.first(), Some(&Position::new(0, 0)));
        assert_eq!(path.last(), Some(&Position::new(8, 8)));
        assert_eq!(generator.compass_path().len(), path.len() - 1);

        generator.backtracker_steps().for_each(drop);
        assert!(generator.path().is_none());

        generator.find_shortest_path();
        generator.clear_path();
        assert!(generator.path().is_none());
    }

    // Tests the export view mirrors the generator state
    // Verified by exporting the entry twice
    #[test]
    fn test_to_document() {
        let mut generator = MazeGenerator::new(parameters(9, 9)).expect("valid 9x9");
        generator.backtracker();
        generator.find_shortest_path();

        let document = generator.to_document().expect("carved");
        assert_eq!(document.entry, Position::new(0, 0));
        assert_eq!(document.exit, Position::new(8, 8));
        assert_eq!(document.path, generator.compass_path());
        assert_eq!(Some(&document.grid), generator.grid());
    }
}
