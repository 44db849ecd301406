//! # maze_route
//!
//! Routes through mazes drawn as text and draws the route back onto the maze as ASCII line-art.
//! A maze is made of `#` walls, spaces, one start cell `s` and one target cell `t`:
//!
//! ```text
//! s  #
//!  # #
//!   t
//! ```
//!
//! Two traversals are available through [Mode]: a greedy
//! [best-first search](https://en.wikipedia.org/wiki/Best-first_search) that runs from the target
//! back to the start and yields a route, and a
//! [flood fill](https://en.wikipedia.org/wiki/Flood_fill) that reports the region explored from
//! the start. Note that the best-first search orders cells by their distance to the start only,
//! so routes are not necessarily shortest. Connected components are computed when the grid is
//! built to avoid searching if no route exists.
//!
//! ```
//! use maze_route::{render, Grid, Mode};
//!
//! let grid: Grid = "s  #\n # #\n  t".parse().unwrap();
//! let path = Mode::DirectedSearch.solve(&grid);
//! assert_eq!(render(&grid, &path), "s  #\n|# #\n\\-t \n");
//! ```
pub mod error;
pub mod grid;
pub mod render;
pub mod solver;

pub use crate::error::{MazeError, MazeResult};
pub use crate::grid::{Cell, Grid};
pub use crate::render::render;
pub use crate::solver::{GridSolver, Mode};

/// Parses `input`, runs the traversal selected by `mode` and renders the result.
pub fn route_text(input: &str, mode: Mode) -> MazeResult<String> {
    let grid: Grid = input.parse()?;
    let path = mode.solve(&grid);
    Ok(render(&grid, &path))
}
