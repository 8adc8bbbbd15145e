//! Dead-end braiding
//!
//! A single row-major pass over the interior cells. Each dead end (three walls
//! present) opens the wall towards one uniformly chosen carvable neighbor. The
//! choice may land on the side that is already open, in which case nothing
//! changes. Cells earlier in the pass are not revisited.

use crate::algorithm::random::RandomSelector;
use crate::spatial::cell::Direction;
use crate::spatial::grid::{Grid, Position};

/// Braid the dead ends of `grid`, returning the number of walls actually opened
///
/// The caller is responsible for reseeding `rng`.
pub fn braid_dead_ends(grid: &mut Grid, rng: &mut RandomSelector) -> usize {
    let mut opened = 0;

    for y in 1..grid.height().saturating_sub(1) {
        for x in 1..grid.width().saturating_sub(1) {
            let position = Position::new(x, y);
            if grid.is_protected(position) || !is_dead_end(grid, position) {
                continue;
            }

            let candidates: Vec<Direction> = Direction::ALL
                .iter()
                .copied()
                .filter(|&direction| grid.carvable_neighbor(position, direction).is_some())
                .collect();

            let Some(&direction) = rng.choose(&candidates) else {
                continue;
            };

            let was_closed = grid
                .cell(position)
                .is_some_and(|cell| cell.has_wall(direction));
            if grid.remove_wall_between(position, direction) && was_closed {
                opened += 1;
            }
        }
    }

    opened
}

/// Count dead ends among the carvable cells of `grid`
pub fn count_dead_ends(grid: &Grid) -> usize {
    grid.positions()
        .filter(|&position| !grid.is_protected(position) && is_dead_end(grid, position))
        .count()
}

fn is_dead_end(grid: &Grid, position: Position) -> bool {
    grid.cell(position).is_some_and(|cell| cell.is_dead_end())
}
