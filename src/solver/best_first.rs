use crate::grid::Grid;
use crate::solver::GridSolver;
use grid_util::point::Point;
use log::{debug, info, warn};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

struct LargestScoreHolder {
    score: i32,
    index: usize,
}

impl Eq for LargestScoreHolder {}

impl PartialEq for LargestScoreHolder {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score && self.index == other.index
    }
}

impl PartialOrd for LargestScoreHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LargestScoreHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        // Largest score first, equal scores pop the larger linear index first
        match self.score.cmp(&other.score) {
            Ordering::Equal => self.index.cmp(&other.index),
            s => s,
        }
    }
}

/// Greedy best-first search that runs backwards from the target to the start, so that the chain
/// of predecessors read from the start leads to the target.
///
/// The priority of a cell is only its [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry)
/// to the start and no path cost is accumulated, so the route found is not necessarily the
/// shortest one.
#[derive(Clone, Debug)]
pub struct BestFirstSolver {
    /// Skip the search when start and target lie on different connected components.
    pub use_components: bool,
}

impl Default for BestFirstSolver {
    fn default() -> BestFirstSolver {
        BestFirstSolver::new()
    }
}

impl BestFirstSolver {
    pub fn new() -> BestFirstSolver {
        BestFirstSolver {
            use_components: true,
        }
    }

    fn heuristic(&self, point: &Point, start: &Point) -> i32 {
        point.manhattan_distance(start)
    }

    /// Computes a route from the start to the target. The returned path starts at the cell after
    /// the start and ends with the target; it is empty if no route exists or if start and target
    /// coincide.
    pub fn search(&self, grid: &Grid) -> Vec<Point> {
        let start = grid.start();
        let target = grid.target();
        if self.use_components && grid.unreachable(&start, &target) {
            info!("{} is not reachable from {}", target, start);
            return Vec::new();
        }

        let mut previous: Vec<Option<Point>> = vec![None; grid.len()];
        let mut visited = vec![false; grid.len()];
        let mut to_see = BinaryHeap::new();
        to_see.push(LargestScoreHolder {
            score: self.heuristic(&target, &start),
            index: grid.index_of(&target),
        });

        while let Some(LargestScoreHolder { index, .. }) = to_see.pop() {
            let current = grid.point_of(index);
            visited[index] = true;
            if current == start {
                debug!(
                    "Reached start after visiting {} cells",
                    visited.iter().filter(|&&v| v).count()
                );
                return reconstruct_path(grid, &previous, start, target);
            }
            for neighbour in grid.neighbours(&current) {
                let n = grid.index_of(&neighbour);
                if grid.is_wall(&neighbour) || visited[n] {
                    continue;
                }
                previous[n] = Some(current);
                visited[n] = true;
                to_see.push(LargestScoreHolder {
                    score: self.heuristic(&neighbour, &start),
                    index: n,
                });
            }
        }
        info!("Search from {} exhausted without reaching {}", target, start);
        Vec::new()
    }
}

/// Follows the predecessor chain from `start` until `target`, collecting every predecessor. The
/// start itself is left out, the target is the last element.
fn reconstruct_path(
    grid: &Grid,
    previous: &[Option<Point>],
    start: Point,
    target: Point,
) -> Vec<Point> {
    let mut path = Vec::new();
    let mut current = start;
    while current != target {
        match previous[grid.index_of(&current)] {
            Some(came_from) => {
                path.push(came_from);
                current = came_from;
            }
            None => {
                warn!("Predecessor chain is broken at {}", current);
                return Vec::new();
            }
        }
    }
    path
}

impl GridSolver for BestFirstSolver {
    fn solve(&self, grid: &Grid) -> Vec<Point> {
        self.search(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn solve_simple_problem() {
        let grid: Grid = "s  #\n # #\n  t".parse().unwrap();
        let path = BestFirstSolver::new().search(&grid);
        assert_eq!(path, vec![p(0, 1), p(0, 2), p(1, 2), p(2, 2)]);
    }

    /// Asserts that the case in which start and goal are equal is handled correctly.
    #[test]
    fn equal_start_goal() {
        let grid = Grid::from_cells(1, 1, vec![Cell::Empty], p(0, 0), p(0, 0)).unwrap();
        for use_components in [false, true] {
            let solver = BestFirstSolver { use_components };
            assert!(solver.search(&grid).is_empty());
        }
    }

    #[test]
    fn walled_off_target() {
        let grid: Grid = "s #  \n  # t\n  #  ".parse().unwrap();
        for use_components in [false, true] {
            let solver = BestFirstSolver { use_components };
            assert!(solver.search(&grid).is_empty());
        }
    }

    /// Targets on the border of the grid must not make the search look outside of it.
    #[test]
    fn border_cells() {
        let grid: Grid = "t   \n### \ns   ".parse().unwrap();
        let path = BestFirstSolver::new().search(&grid);
        assert_eq!(path.last(), Some(&grid.target()));
        assert_eq!(path.len(), 8);
        for pair in path.windows(2) {
            assert_eq!(pair[0].manhattan_distance(&pair[1]), 1);
        }
    }

    #[test]
    fn equal_scores_prefer_larger_index() {
        let mut heap = BinaryHeap::new();
        heap.push(LargestScoreHolder { score: 3, index: 6 });
        heap.push(LargestScoreHolder { score: 3, index: 9 });
        heap.push(LargestScoreHolder { score: 5, index: 1 });
        let order = std::iter::from_fn(|| heap.pop().map(|h| h.index)).collect::<Vec<_>>();
        assert_eq!(order, vec![1, 9, 6]);
    }
}
