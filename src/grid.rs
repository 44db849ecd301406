use crate::error::{MazeError, MazeResult};
use core::fmt;
use grid_util::point::Point;
use itertools::iproduct;
use log::{debug, warn};
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

/// Offsets of the four orthogonal neighbours. The order decides the order in which the flood fill
/// queues cells: `y + 1` first, then `x + 1`, `y - 1` and `x - 1`.
const NEUMANN_OFFSETS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Wall,
}

/// A rectangular maze with a start and a target cell. Cells are stored row-major, so the cell at
/// `(x, y)` lives at index `x + y * width`. Connected components of the empty cells are computed
/// once on construction using a [UnionFind] so that unreachable targets can be rejected without
/// searching.
///
/// A [Grid] is immutable after construction and can be shared between any number of solvers.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    start: Point,
    target: Point,
    components: UnionFind<usize>,
}

impl Grid {
    /// Builds a grid from raw cells, checking that the dimensions match and that start and target
    /// are empty cells inside the grid.
    pub fn from_cells(
        width: usize,
        height: usize,
        cells: Vec<Cell>,
        start: Point,
        target: Point,
    ) -> MazeResult<Grid> {
        if width == 0 || height == 0 || width * height != cells.len() {
            return Err(MazeError::InvalidDimensions {
                width,
                height,
                cells: cells.len(),
            });
        }
        let mut grid = Grid {
            width,
            height,
            cells,
            start,
            target,
            components: UnionFind::new(0),
        };
        grid.check_marker("start", &start)?;
        grid.check_marker("target", &target)?;
        grid.generate_components();
        Ok(grid)
    }

    fn check_marker(&self, marker: &'static str, point: &Point) -> MazeResult<()> {
        if !self.in_bounds(point) {
            return Err(MazeError::MarkerOutOfBounds {
                marker,
                x: point.x,
                y: point.y,
            });
        }
        if self.cells[self.index_of(point)] == Cell::Wall {
            return Err(MazeError::MarkerOnWall {
                marker,
                x: point.x,
                y: point.y,
            });
        }
        Ok(())
    }

    /// Parses a maze from its text lines. The width is the length of the longest line; cells past
    /// the end of a shorter line stay [Cell::Empty].
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> MazeResult<Grid> {
        let height = lines.len();
        let width = lines
            .iter()
            .map(|line| line.as_ref().chars().count())
            .max()
            .unwrap_or(0);
        let mut cells = vec![Cell::Empty; width * height];
        let mut start = None;
        let mut target = None;
        for (y, line) in lines.iter().enumerate() {
            for (x, ch) in line.as_ref().chars().enumerate() {
                let point = Point::new(x as i32, y as i32);
                cells[x + y * width] = match ch {
                    '#' => Cell::Wall,
                    ' ' => Cell::Empty,
                    's' => {
                        if let Some(previous) = start.replace(point) {
                            warn!("Start {} is overridden by {}", previous, point);
                        }
                        Cell::Empty
                    }
                    't' => {
                        if let Some(previous) = target.replace(point) {
                            warn!("Target {} is overridden by {}", previous, point);
                        }
                        Cell::Empty
                    }
                    _ => return Err(MazeError::InvalidCharacter { ch, x, y }),
                };
            }
        }
        let start = start.ok_or(MazeError::MissingStart)?;
        let target = target.ok_or(MazeError::MissingTarget)?;
        debug!("Parsed {}x{} maze from {} to {}", width, height, start, target);
        Grid::from_cells(width, height, cells, start, target)
    }

    /// Reads all lines of `reader` and parses them as a maze. Bytes that are not valid UTF-8 are
    /// reported as [MazeError::InvalidCharacter] at their position.
    pub fn from_reader<R: BufRead>(reader: R) -> MazeResult<Grid> {
        Grid::from_lines(&read_lines(reader)?)
    }

    /// Opens the file at `path` and parses it as a maze.
    pub fn from_path<P: AsRef<Path>>(path: P) -> MazeResult<Grid> {
        let path = path.as_ref();
        let io_error = |source| MazeError::Io {
            path: Some(path.to_path_buf()),
            source,
        };
        let file = File::open(path).map_err(io_error)?;
        let lines = read_lines(BufReader::new(file)).map_err(io_error)?;
        Grid::from_lines(&lines)
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    /// Number of cells, `width * height`.
    pub fn len(&self) -> usize {
        self.cells.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
    pub fn start(&self) -> Point {
        self.start
    }
    pub fn target(&self) -> Point {
        self.target
    }

    /// Linear index of `point`. The point has to be in bounds, see [in_bounds](Self::in_bounds).
    pub fn index_of(&self, point: &Point) -> usize {
        debug_assert!(self.in_bounds(point), "{} is out of bounds", point);
        point.x as usize + point.y as usize * self.width
    }
    /// Inverse of [index_of](Self::index_of).
    pub fn point_of(&self, index: usize) -> Point {
        Point::new((index % self.width) as i32, (index / self.width) as i32)
    }
    pub fn in_bounds(&self, point: &Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width
            && (point.y as usize) < self.height
    }
    /// The cell at `point`, or [None] if it lies outside the grid.
    pub fn cell(&self, point: &Point) -> Option<Cell> {
        if self.in_bounds(point) {
            Some(self.cells[self.index_of(point)])
        } else {
            None
        }
    }
    /// Points outside the grid are not walls, but they are not traversable either.
    pub fn is_wall(&self, point: &Point) -> bool {
        self.cell(point) == Some(Cell::Wall)
    }
    pub fn can_move_to(&self, point: &Point) -> bool {
        self.cell(point) == Some(Cell::Empty)
    }

    /// The orthogonal neighbours of `point` that lie inside the grid, in the order `(x, y + 1)`,
    /// `(x + 1, y)`, `(x, y - 1)`, `(x - 1, y)`. Walls are included; use [can_move_to](Self::can_move_to) to filter them.
    pub fn neighbours(&self, point: &Point) -> SmallVec<[Point; 4]> {
        NEUMANN_OFFSETS
            .iter()
            .map(|(dx, dy)| Point::new(point.x + dx, point.y + dy))
            .filter(|p| self.in_bounds(p))
            .collect()
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> usize {
        self.components.find(self.index_of(point))
    }
    /// Checks if `a` and `b` are empty cells on the same connected component.
    pub fn reachable(&self, a: &Point, b: &Point) -> bool {
        self.can_move_to(a)
            && self.can_move_to(b)
            && self
                .components
                .equiv(self.index_of(a), self.index_of(b))
    }
    pub fn unreachable(&self, a: &Point, b: &Point) -> bool {
        !self.reachable(a, b)
    }

    /// Links every empty cell to its empty east and south neighbours. Together this covers every
    /// orthogonal adjacency exactly once.
    fn generate_components(&mut self) {
        let mut components = UnionFind::new(self.cells.len());
        for (y, x) in iproduct!(0..self.height as i32, 0..self.width as i32) {
            let point = Point::new(x, y);
            if !self.can_move_to(&point) {
                continue;
            }
            let ix = self.index_of(&point);
            for n in [Point::new(x + 1, y), Point::new(x, y + 1)] {
                if self.can_move_to(&n) {
                    components.union(ix, self.index_of(&n));
                }
            }
        }
        self.components = components;
    }
}

/// Splits `reader` into lines on `\n`, dropping a trailing `\r`. Invalid UTF-8 turns into
/// [char::REPLACEMENT_CHARACTER], which the parser then rejects with its coordinate.
fn read_lines<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    reader
        .split(b'\n')
        .map(|line| {
            line.map(|mut bytes| {
                if bytes.last() == Some(&b'\r') {
                    bytes.pop();
                }
                String::from_utf8_lossy(&bytes).into_owned()
            })
        })
        .collect()
}

impl FromStr for Grid {
    type Err = MazeError;
    fn from_str(s: &str) -> MazeResult<Grid> {
        Grid::from_lines(&s.lines().collect::<Vec<&str>>())
    }
}

/// Writes the grid back in its input format, padding short rows with spaces.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height as i32 {
            let row = (0..self.width as i32)
                .map(|x| {
                    let p = Point::new(x, y);
                    if p == self.start {
                        's'
                    } else if p == self.target {
                        't'
                    } else if self.is_wall(&p) {
                        '#'
                    } else {
                        ' '
                    }
                })
                .collect::<String>();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
