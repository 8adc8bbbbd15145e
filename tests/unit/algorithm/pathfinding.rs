//! Tests for uniform-cost search and the lazy path sequence

#[cfg(test)]
mod tests {
    use mazegen::algorithm::pathfinding::{Expansion, PathSteps, UniformCostSearch, shortest_path};
    use mazegen::spatial::cell::{Direction, WallSet};
    use mazegen::spatial::grid::{Grid, Position};
    use mazegen::spatial::mask::CellMask;

    fn open_grid(width: usize, height: usize) -> Grid {
        let mut grid = Grid::new(width, height, CellMask::new(width, height));
        for position in grid.positions().collect::<Vec<_>>() {
            grid.remove_wall_between(position, Direction::East);
            grid.remove_wall_between(position, Direction::South);
        }
        grid
    }

    // Tests the path along a corridor
    // Verified by ignoring walls when relaxing neighbors
    #[test]
    fn test_corridor_path() {
        let mut grid = Grid::new(3, 3, CellMask::new(3, 3));
        grid.remove_wall_between(Position::new(0, 0), Direction::East);
        grid.remove_wall_between(Position::new(1, 0), Direction::East);
        grid.remove_wall_between(Position::new(2, 0), Direction::South);

        let path = shortest_path(&grid, Position::new(0, 0), Position::new(2, 1));
        assert_eq!(
            path,
            Some(vec![
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(2, 0),
                Position::new(2, 1),
            ])
        );
    }

    // Tests the path length is minimal in an open room
    // Verified by returning the first path that touches the exit
    #[test]
    fn test_minimal_length() {
        let grid = open_grid(5, 4);
        let path = shortest_path(&grid, Position::new(0, 0), Position::new(4, 3))
            .expect("open room is connected");

        assert_eq!(path.len(), 8);
        assert_eq!(path.first(), Some(&Position::new(0, 0)));
        assert_eq!(path.last(), Some(&Position::new(4, 3)));
    }

    // Tests equal-cost ties break towards the smaller position
    // Verified by ordering the frontier by path instead of position
    #[test]
    fn test_tie_break_prefers_smaller_position() {
        let grid = open_grid(3, 3);
        let path = shortest_path(&grid, Position::new(0, 0), Position::new(1, 1))
            .expect("open room is connected");

        // (0, 1) sorts before (1, 0), so it is expanded first and reaches the exit first
        assert_eq!(
            path,
            vec![Position::new(0, 0), Position::new(0, 1), Position::new(1, 1)]
        );
    }

    // Tests protected cells are never traversed even when walls are missing
    // Verified by dropping the carvable check on neighbors
    #[test]
    fn test_protected_cells_not_traversed() {
        let walls = vec![WallSet::EMPTY; 9];
        let open = Grid::from_walls(3, 3, &walls).expect("nine wall sets");
        assert!(shortest_path(&open, Position::new(0, 1), Position::new(2, 1)).is_some());

        let column = [Position::new(1, 0), Position::new(1, 1), Position::new(1, 2)];
        let blocked = open
            .with_protected(CellMask::from_positions(3, 3, &column))
            .expect("mask matches the grid");
        assert!(column.iter().all(|&position| blocked.walls(position) == Some(WallSet::EMPTY)));
        assert!(blocked.is_open(Position::new(0, 1), Direction::East));

        assert_eq!(
            shortest_path(&blocked, Position::new(0, 1), Position::new(2, 1)),
            None
        );
    }

    // Tests expansions report partial paths and stop after the exit
    // Verified by continuing to expand after the exit is found
    #[test]
    fn test_expansion_sequence() {
        let grid = open_grid(3, 3);
        let mut search = UniformCostSearch::new(Position::new(0, 0), Position::new(0, 1));

        assert_eq!(
            search.expand(&grid),
            Expansion::Partial(vec![Position::new(0, 0)])
        );
        assert_eq!(
            search.expand(&grid),
            Expansion::Found(vec![Position::new(0, 0), Position::new(0, 1)])
        );
        assert_eq!(search.expand(&grid), Expansion::Exhausted);
        assert_eq!(search.expanded(), 2);
    }

    // Tests every reported path is a rebuilt chain of open passages from the entry
    // Verified by recording the predecessor before checking for an improvement
    #[test]
    fn test_partial_paths_are_rebuilt_chains() {
        let grid = open_grid(6, 5);
        let entry = Position::new(2, 2);
        let mut search = UniformCostSearch::new(entry, Position::new(5, 4));
        let mut longest = 0;

        loop {
            let path = match search.expand(&grid) {
                Expansion::Partial(path) => path,
                Expansion::Found(path) => {
                    assert_eq!(path.len(), 6);
                    break;
                }
                Expansion::Exhausted => panic!("open room is connected"),
            };

            assert_eq!(path.first(), Some(&entry));
            assert!(path.len() >= longest, "expansions go in cost order");
            longest = path.len();
            for pair in path.windows(2) {
                let [from, to] = pair else { continue };
                let direction = from.direction_to(*to).expect("cardinal step");
                assert!(grid.is_open(*from, direction));
            }
        }
    }

    // Tests the lazy sequence stores the final path in its slot
    // Verified by not writing the slot on success
    #[test]
    fn test_path_steps_store_result() {
        let grid = open_grid(4, 4);
        let mut result = None;
        let steps: Vec<Vec<Position>> =
            PathSteps::new(Some(&grid), Position::new(0, 0), Position::new(3, 3), &mut result)
                .collect();

        let last = steps.last().cloned();
        assert!(steps.len() > 1);
        assert_eq!(result, last);
        assert_eq!(result.map(|path| path.len()), Some(7));
    }

    // Tests an unreachable exit leaves the previous result untouched
    // Verified by clearing the slot on exhaustion
    #[test]
    fn test_path_steps_unreachable_keeps_result() {
        let grid = Grid::new(3, 3, CellMask::new(3, 3));
        let previous = vec![Position::new(0, 0)];
        let mut result = Some(previous.clone());

        let mut steps =
            PathSteps::new(Some(&grid), Position::new(0, 0), Position::new(2, 2), &mut result);
        assert_eq!(steps.next(), Some(vec![Position::new(0, 0)]));
        assert_eq!(steps.next(), None);
        assert_eq!(steps.next(), None);
        drop(steps);

        assert_eq!(result, Some(previous));
    }

    // Tests a missing grid yields an empty sequence
    // Verified by searching an empty default grid
    #[test]
    fn test_path_steps_without_grid() {
        let mut result = None;
        let count = PathSteps::new(None, Position::new(0, 0), Position::new(1, 1), &mut result)
            .count();

        assert_eq!(count, 0);
        assert_eq!(result, None);
    }
}
