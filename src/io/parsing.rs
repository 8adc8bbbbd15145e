//! Configuration file parsing
//!
//! Files hold one `KEY=VALUE` per line. Blank lines, `#` comments and lines
//! without `=` are ignored. Values are converted to typed fields here; range
//! checks against the grid happen later in [`MazeParameters::validate`].

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::algorithm::generator::MazeParameters;
use crate::io::configuration::{
    COMMENT_PREFIX, KEY_ENTRY, KEY_EXIT, KEY_HEIGHT, KEY_OUTPUT_FILE, KEY_PERFECT, KEY_SEED,
    KEY_WIDTH, KNOWN_KEYS, MANDATORY_KEYS,
};
use crate::io::error::{MazeError, Result, config_error};
use crate::spatial::grid::Position;

/// Typed contents of a configuration file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeConfig {
    /// `WIDTH`
    pub width: usize,
    /// `HEIGHT`
    pub height: usize,
    /// `ENTRY`
    pub entry: Position,
    /// `EXIT`
    pub exit: Position,
    /// `OUTPUT_FILE`
    pub output_file: String,
    /// `PERFECT`
    pub perfect: bool,
    /// `SEED`, optional
    pub seed: Option<u64>,
}

impl MazeConfig {
    /// Read and parse a configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its contents are invalid
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| MazeError::FileSystem {
            path: path.to_path_buf(),
            operation: "read configuration",
            source,
        })?;
        Self::parse(&text)
    }

    /// Parse configuration text
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The text has no content lines
    /// - A key is not recognised
    /// - A value cannot be converted
    /// - A mandatory key is missing
    pub fn parse(text: &str) -> Result<Self> {
        let entries = collect_entries(text)?;

        for key in MANDATORY_KEYS {
            if !entries.contains_key(key) {
                return Err(MazeError::MissingKey { key });
            }
        }

        let field = |key: &'static str| entries.get(key).copied().unwrap_or((0, ""));

        let (line, value) = field(KEY_WIDTH);
        let width = parse_unsigned(line, KEY_WIDTH, value)?;
        let (line, value) = field(KEY_HEIGHT);
        let height = parse_unsigned(line, KEY_HEIGHT, value)?;
        let (line, value) = field(KEY_ENTRY);
        let entry = parse_coordinates(line, KEY_ENTRY, value)?;
        let (line, value) = field(KEY_EXIT);
        let exit = parse_coordinates(line, KEY_EXIT, value)?;
        let (line, value) = field(KEY_PERFECT);
        let perfect = parse_flag(line, KEY_PERFECT, value)?;
        let (_, output_file) = field(KEY_OUTPUT_FILE);

        let seed = match entries.get(KEY_SEED) {
            Some(&(line, value)) => Some(parse_unsigned(line, KEY_SEED, value)?),
            None => None,
        };

        Ok(Self {
            width,
            height,
            entry,
            exit,
            output_file: output_file.to_string(),
            perfect,
            seed,
        })
    }

    /// Convert into generator parameters with the default pattern policy
    pub fn into_parameters(self) -> MazeParameters {
        let parameters = MazeParameters::new(
            self.width,
            self.height,
            self.entry,
            self.exit,
            self.output_file,
            self.perfect,
        );
        match self.seed {
            Some(seed) => parameters.with_seed(seed),
            None => parameters,
        }
    }
}

/// Map each known key to its `(line, value)`; later lines overwrite earlier ones
fn collect_entries(text: &str) -> Result<HashMap<&'static str, (usize, &str)>> {
    let mut entries = HashMap::new();
    let mut content_lines = 0;

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
            continue;
        }
        content_lines += 1;

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim();

        let known = KNOWN_KEYS
            .iter()
            .find(|&&candidate| candidate == key)
            .ok_or_else(|| MazeError::UnknownKey {
                key: key.to_string(),
                line: index + 1,
            })?;

        if !value.is_empty() {
            entries.insert(*known, (index + 1, value));
        }
    }

    if content_lines == 0 {
        return Err(config_error(0, &"file is empty"));
    }

    Ok(entries)
}

fn parse_unsigned<T>(line: usize, key: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|err| {
        config_error(
            line,
            &format!("{key} must be a non-negative integer, got '{value}' ({err})"),
        )
    })
}

fn parse_coordinates(line: usize, key: &str, value: &str) -> Result<Position> {
    let parts: Vec<&str> = value.split(',').collect();
    let [x, y] = parts.as_slice() else {
        return Err(config_error(
            line,
            &format!("{key} must have exactly 2 coordinates, got '{value}'"),
        ));
    };
    let x = parse_unsigned(line, key, x.trim())?;
    let y = parse_unsigned(line, key, y.trim())?;
    Ok(Position::new(x, y))
}

fn parse_flag(line: usize, key: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(config_error(
            line,
            &format!("{key} must be true/1 or false/0, got '{value}'"),
        )),
    }
}
