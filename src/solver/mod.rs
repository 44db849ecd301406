use crate::grid::Grid;
use grid_util::point::Point;

pub mod best_first;
pub mod flood_fill;

use best_first::BestFirstSolver;
use flood_fill::FloodFillSolver;

/// A traversal over a [Grid] producing an ordered sequence of points that the
/// [renderer](crate::render) can draw.
pub trait GridSolver {
    fn solve(&self, grid: &Grid) -> Vec<Point>;
}

/// Selects which traversal is run on a maze.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Greedy best-first search from target back to start, yielding a route.
    #[default]
    DirectedSearch,
    /// Breadth-first exploration from the start, yielding the explored region.
    FloodFill,
}

impl Mode {
    pub fn solve(self, grid: &Grid) -> Vec<Point> {
        match self {
            Mode::DirectedSearch => BestFirstSolver::new().solve(grid),
            Mode::FloodFill => FloodFillSolver.solve(grid),
        }
    }
}
