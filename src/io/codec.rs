//! Textual maze encoding
//!
//! The export layout is:
//! - `height` lines of `width` uppercase hex digits, one per cell wall set
//! - a blank line
//! - the entry as `x, y`
//! - the exit as `x, y`
//! - the path as compass letters (`N`, `E`, `S`, `W`), possibly empty
//!
//! Every line, the last included, ends with a newline.

use crate::io::configuration::MIN_DIMENSION;
use crate::io::error::{Result, decode_error};
use crate::spatial::cell::{Direction, WallSet};
use crate::spatial::grid::{Grid, Position};

/// Encode the grid as rows of hex digits joined by newlines (no trailing newline)
pub fn encode_grid(grid: &Grid) -> String {
    grid.rows()
        .map(|row| row.iter().map(|cell| cell.to_hex()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Decode rows of hex digits back into a grid
///
/// The decoded grid carries no protected region.
///
/// # Errors
///
/// Returns [`crate::MazeError::Decode`] when a character is not a hex digit,
/// rows differ in length, or the grid is smaller than 3x3
pub fn decode_grid(text: &str) -> Result<Grid> {
    let mut walls = Vec::new();
    let mut width = None;
    let mut height = 0;

    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        let row: Vec<WallSet> = line
            .trim_end()
            .chars()
            .map(|digit| {
                WallSet::from_hex(digit).ok_or_else(|| {
                    decode_error(line_number, &format!("'{digit}' is not a hex digit"))
                })
            })
            .collect::<Result<_>>()?;

        match width {
            None => width = Some(row.len()),
            Some(expected) if expected != row.len() => {
                return Err(decode_error(
                    line_number,
                    &format!("expected {expected} cells, found {}", row.len()),
                ));
            }
            Some(_) => {}
        }

        walls.extend(row);
        height += 1;
    }

    let width = width.unwrap_or(0);
    if width < MIN_DIMENSION || height < MIN_DIMENSION {
        return Err(decode_error(
            height.max(1),
            &format!("a {width}x{height} grid is smaller than {MIN_DIMENSION}x{MIN_DIMENSION}"),
        ));
    }

    Grid::from_walls(width, height, &walls)
        .ok_or_else(|| decode_error(height, &"cell count does not match dimensions"))
}

/// Encode a path as compass letters, skipping non-cardinal deltas
pub fn encode_compass(path: &[Position]) -> String {
    path.windows(2)
        .filter_map(|pair| match pair {
            [from, to] => from.direction_to(*to),
            _ => None,
        })
        .map(Direction::compass)
        .collect()
}

/// Replay compass letters from `start`
///
/// # Errors
///
/// Returns [`crate::MazeError::Decode`] on an unknown letter or a step that
/// leaves the non-negative quadrant
pub fn decode_compass(start: Position, letters: &str) -> Result<Vec<Position>> {
    let mut path = vec![start];
    let mut current = start;

    for letter in letters.trim().chars() {
        let direction = Direction::from_compass(letter)
            .ok_or_else(|| decode_error(1, &format!("'{letter}' is not a compass letter")))?;
        current = current
            .step(direction)
            .ok_or_else(|| decode_error(1, &format!("step {direction} leaves the grid")))?;
        path.push(current);
    }

    Ok(path)
}

fn parse_point(line_number: usize, line: Option<&str>) -> Result<Position> {
    let line = line.ok_or_else(|| decode_error(line_number, &"missing coordinate line"))?;
    let (x, y) = line
        .split_once(',')
        .ok_or_else(|| decode_error(line_number, &format!("'{line}' is not 'x, y'")))?;
    let x = x
        .trim()
        .parse()
        .map_err(|err| decode_error(line_number, &format!("bad x coordinate: {err}")))?;
    let y = y
        .trim()
        .parse()
        .map_err(|err| decode_error(line_number, &format!("bad y coordinate: {err}")))?;
    Ok(Position::new(x, y))
}

/// Complete export of one maze
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeDocument {
    /// Carved grid
    pub grid: Grid,
    /// Entry coordinate
    pub entry: Position,
    /// Exit coordinate
    pub exit: Position,
    /// Compass-encoded path, empty when none was found
    pub path: String,
}

impl MazeDocument {
    /// Render the export text
    pub fn render(&self) -> String {
        format!(
            "{}\n\n{}\n{}\n{}\n",
            encode_grid(&self.grid),
            self.entry,
            self.exit,
            self.path
        )
    }

    /// Parse export text produced by [`MazeDocument::render`]
    ///
    /// Accepts both `\n` and `\r\n` line endings.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MazeError::Decode`] when any section is malformed
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text.lines();
        let mut grid_lines = Vec::new();
        let mut separated = false;
        for line in lines.by_ref() {
            if line.trim().is_empty() {
                separated = true;
                break;
            }
            grid_lines.push(line);
        }
        if !separated {
            return Err(decode_error(
                grid_lines.len().max(1),
                &"missing blank line after the grid",
            ));
        }
        let grid = decode_grid(&grid_lines.join("\n"))?;

        let trailer_start = grid.height() + 2;
        let entry = parse_point(trailer_start, lines.next())?;
        let exit = parse_point(trailer_start + 1, lines.next())?;
        let path = lines.next().unwrap_or_default().trim().to_string();

        decode_compass(entry, &path).map_err(|err| {
            decode_error(
                trailer_start + 2,
                &format!("'{path}' is not a compass path ({err})"),
            )
        })?;

        Ok(Self {
            grid,
            entry,
            exit,
            path,
        })
    }

    /// Path coordinates replayed from the entry
    ///
    /// # Errors
    ///
    /// Returns [`crate::MazeError::Decode`] when the stored letters are invalid
    pub fn path_positions(&self) -> Result<Vec<Position>> {
        decode_compass(self.entry, &self.path)
    }
}
