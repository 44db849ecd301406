use crate::grid::Grid;
use crate::solver::GridSolver;
use fxhash::{FxBuildHasher, FxHashSet};
use grid_util::point::Point;
use indexmap::IndexSet;
use log::debug;
use std::collections::VecDeque;

type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// Outcome of a flood fill: the processed cells in the order they were closed, and whether the
/// exploration stopped because it reached the target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Exploration {
    pub closed: Vec<Point>,
    pub reached_target: bool,
}

/// Breadth-first exploration of the empty cells around the start. It does not reconstruct a
/// route; the closed list is a report of the region explored before the target was found.
#[derive(Clone, Copy, Debug, Default)]
pub struct FloodFillSolver;

impl FloodFillSolver {
    pub fn explore(&self, grid: &Grid) -> Exploration {
        let target = grid.target();
        let mut open: VecDeque<Point> = VecDeque::new();
        let mut in_open: FxHashSet<Point> = FxHashSet::default();
        let mut closed: FxIndexSet<Point> = FxIndexSet::default();
        open.push_back(grid.start());
        in_open.insert(grid.start());

        let mut reached_target = false;
        while let Some(&current) = open.front() {
            if current == target {
                reached_target = true;
                break;
            }
            for n in grid.neighbours(&current) {
                if grid.can_move_to(&n) && !closed.contains(&n) && !in_open.contains(&n) {
                    open.push_back(n);
                    in_open.insert(n);
                }
            }
            open.pop_front();
            in_open.remove(&current);
            closed.insert(current);
        }
        debug!(
            "Flood fill closed {} cells, target reached: {}",
            closed.len(),
            reached_target
        );
        Exploration {
            closed: closed.into_iter().collect(),
            reached_target,
        }
    }
}

impl GridSolver for FloodFillSolver {
    fn solve(&self, grid: &Grid) -> Vec<Point> {
        self.explore(grid).closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reaches_open_target() {
        let grid: Grid = "s   \n    \n   t".parse().unwrap();
        let exploration = FloodFillSolver.explore(&grid);
        assert!(exploration.reached_target);
        assert_eq!(exploration.closed[0], grid.start());
        assert!(!exploration.closed.contains(&grid.target()));
    }

    /// Cells are closed in breadth-first order, neighbours queued `y + 1`, `x + 1`, `y - 1`,
    /// `x - 1`.
    #[test]
    fn closes_in_fifo_order() {
        let grid: Grid = "  \n s\n  \n#t".parse().unwrap();
        let closed = FloodFillSolver.solve(&grid);
        let p = |x, y| Point::new(x, y);
        assert_eq!(closed, vec![p(1, 1), p(1, 2), p(1, 0), p(0, 1)]);
    }

    #[test]
    fn corridor_exploration_order() {
        let grid: Grid = "s  #\n # #\n  t".parse().unwrap();
        let exploration = FloodFillSolver.explore(&grid);
        let p = |x, y| Point::new(x, y);
        assert!(exploration.reached_target);
        assert_eq!(
            exploration.closed,
            vec![p(0, 0), p(0, 1), p(1, 0), p(0, 2), p(2, 0), p(1, 2), p(2, 1)]
        );
    }

    #[test]
    fn start_equal_to_target() {
        let grid = Grid::from_cells(
            1,
            1,
            vec![crate::grid::Cell::Empty],
            Point::new(0, 0),
            Point::new(0, 0),
        )
        .unwrap();
        let exploration = FloodFillSolver.explore(&grid);
        assert!(exploration.reached_target);
        assert!(exploration.closed.is_empty());
    }

    #[test]
    fn exhausts_walled_region() {
        let grid: Grid = "s #  \n  # t\n##   ".parse().unwrap();
        let exploration = FloodFillSolver.explore(&grid);
        assert!(!exploration.reached_target);
        assert_eq!(exploration.closed.len(), 4);
        assert!(exploration
            .closed
            .iter()
            .all(|p| p.x < 2 && grid.can_move_to(p)));
    }
}
