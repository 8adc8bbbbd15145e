//! Constants and runtime configuration defaults

use crate::algorithm::carving::Algorithm;
use crate::spatial::pattern::PatternPolicy;

// Grid limits
/// Smallest width or height a maze may have
pub const MIN_DIMENSION: usize = 3;

// Safety limit to prevent excessive memory allocation
/// Largest width or height a maze may have
pub const MAX_DIMENSION: usize = 10_000;

/// Both sides must exceed this for the protected glyph to fit
pub const MIN_PATTERN_DIMENSION: usize = 8;

/// Width of the protected glyph bounding box
pub const GLYPH_WIDTH: usize = 7;
/// Height of the protected glyph bounding box
pub const GLYPH_HEIGHT: usize = 5;

// Default values for configurable parameters
/// Carving algorithm used when none is requested
pub const DEFAULT_ALGORITHM: Algorithm = Algorithm::Backtracker;

/// Glyph placement used when none is requested
pub const DEFAULT_PATTERN_POLICY: PatternPolicy = PatternPolicy::Required;

/// Upper bound (inclusive) of the seed drawn when none is supplied
pub const RANDOM_SEED_MAX: u64 = 100;

// Configuration file keys
/// Grid width key
pub const KEY_WIDTH: &str = "WIDTH";
/// Grid height key
pub const KEY_HEIGHT: &str = "HEIGHT";
/// Entry coordinate key
pub const KEY_ENTRY: &str = "ENTRY";
/// Exit coordinate key
pub const KEY_EXIT: &str = "EXIT";
/// Output identifier key
pub const KEY_OUTPUT_FILE: &str = "OUTPUT_FILE";
/// Perfect flag key
pub const KEY_PERFECT: &str = "PERFECT";
/// Optional seed key
pub const KEY_SEED: &str = "SEED";

/// Keys that must appear in every configuration file, in report order
pub const MANDATORY_KEYS: [&str; 6] = [
    KEY_WIDTH,
    KEY_HEIGHT,
    KEY_ENTRY,
    KEY_EXIT,
    KEY_OUTPUT_FILE,
    KEY_PERFECT,
];

/// Every recognised key
pub const KNOWN_KEYS: [&str; 7] = [
    KEY_WIDTH,
    KEY_HEIGHT,
    KEY_ENTRY,
    KEY_EXIT,
    KEY_OUTPUT_FILE,
    KEY_PERFECT,
    KEY_SEED,
];

/// Prefix marking a comment line
pub const COMMENT_PREFIX: char = '#';

// Progress display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
/// Spinner refresh interval while solving
pub const SPINNER_TICK_MS: u64 = 80;
