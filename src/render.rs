//! Turns an ordered path into line-art. Every cell gets an [Intersection] mask recording in which
//! directions the path leaves it; the mask then selects a [Glyph].
use crate::grid::{Cell, Grid};
use grid_util::point::Point;
use itertools::Itertools;

/// Per-cell connectivity bitmask of a path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Intersection(pub u8);

impl Intersection {
    pub const UP: u8 = 1;
    pub const LEFT: u8 = 2;
    pub const RIGHT: u8 = 4;
    pub const DOWN: u8 = 8;
    pub const VISITED: u8 = 16;
    const DIRECTIONS: u8 = Self::UP | Self::LEFT | Self::RIGHT | Self::DOWN;

    pub fn has(self, bits: u8) -> bool {
        self.0 & bits == bits
    }
    pub fn set(&mut self, bits: u8) {
        self.0 |= bits;
    }
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
    /// The direction bits only, without [VISITED](Self::VISITED).
    pub fn directions(self) -> u8 {
        self.0 & Self::DIRECTIONS
    }

    /// Glyph of an empty cell carrying this mask.
    pub fn glyph(self) -> Glyph {
        const UP: u8 = Intersection::UP;
        const LEFT: u8 = Intersection::LEFT;
        const RIGHT: u8 = Intersection::RIGHT;
        const DOWN: u8 = Intersection::DOWN;
        const UP_DOWN: u8 = UP | DOWN;
        const LEFT_RIGHT: u8 = LEFT | RIGHT;
        const UP_LEFT: u8 = UP | LEFT;
        const UP_RIGHT: u8 = UP | RIGHT;
        const LEFT_DOWN: u8 = LEFT | DOWN;
        const RIGHT_DOWN: u8 = RIGHT | DOWN;
        if !self.has(Self::VISITED) {
            debug_assert!(
                self.directions() == 0,
                "direction bits {:#07b} on a cell the path never visited",
                self.0
            );
            return if self.is_empty() {
                Glyph::Blank
            } else {
                Glyph::Junction
            };
        }
        // A cell links to at most its predecessor and its successor
        debug_assert!(
            self.directions().count_ones() <= 2,
            "mask {:#07b} has more than two directions",
            self.0
        );
        match self.directions() {
            0 => Glyph::Hub,
            UP | DOWN | UP_DOWN => Glyph::Vertical,
            LEFT | RIGHT | LEFT_RIGHT => Glyph::Horizontal,
            UP_LEFT | RIGHT_DOWN => Glyph::Slash,
            UP_RIGHT | LEFT_DOWN => Glyph::Backslash,
            _ => Glyph::Junction,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Glyph {
    Start,
    Target,
    Wall,
    /// A wall cell the path runs through.
    CrossedWall,
    Blank,
    Hub,
    Vertical,
    Horizontal,
    Slash,
    Backslash,
    Junction,
}

impl Glyph {
    pub fn as_char(self) -> char {
        match self {
            Glyph::Start => 's',
            Glyph::Target => 't',
            Glyph::Wall => '#',
            Glyph::CrossedWall => 'X',
            Glyph::Blank => ' ',
            Glyph::Hub => 'o',
            Glyph::Vertical => '|',
            Glyph::Horizontal => '-',
            Glyph::Slash => '/',
            Glyph::Backslash => '\\',
            Glyph::Junction => '?',
        }
    }
}

/// Computes the [Intersection] mask of every cell, indexed like the cells of `grid`. Points
/// outside the grid are skipped and break the chain, so the cells on either side of them are not
/// connected. A cell visited again loses the links it had so far.
pub fn compute_intersections(grid: &Grid, path: &[Point]) -> Vec<Intersection> {
    let mut intersections = vec![Intersection::default(); grid.len()];
    let mut previous: Option<Point> = None;
    for point in path {
        if !grid.in_bounds(point) {
            previous = None;
            continue;
        }
        let ix = grid.index_of(point);
        intersections[ix] = Intersection(Intersection::VISITED);
        if let Some(prev) = previous {
            let prev_ix = grid.index_of(&prev);
            let link = match (point.x - prev.x, point.y - prev.y) {
                (0, -1) => Some((Intersection::DOWN, Intersection::UP)),
                (-1, 0) => Some((Intersection::RIGHT, Intersection::LEFT)),
                (1, 0) => Some((Intersection::LEFT, Intersection::RIGHT)),
                (0, 1) => Some((Intersection::UP, Intersection::DOWN)),
                _ => None,
            };
            if let Some((current_bit, prev_bit)) = link {
                intersections[ix].set(current_bit);
                intersections[prev_ix].set(prev_bit);
            }
        }
        previous = Some(*point);
    }
    intersections
}

/// The glyph drawn at `point` given the masks from [compute_intersections], or [None] if the
/// point lies outside the grid. Cells without a mask are drawn as if the path never touched them.
pub fn glyph_at(grid: &Grid, intersections: &[Intersection], point: &Point) -> Option<Glyph> {
    let cell = grid.cell(point)?;
    let intersection = intersections
        .get(grid.index_of(point))
        .copied()
        .unwrap_or_default();
    Some(match cell {
        Cell::Wall if intersection.is_empty() => Glyph::Wall,
        Cell::Wall => Glyph::CrossedWall,
        _ if *point == grid.start() => Glyph::Start,
        _ if *point == grid.target() => Glyph::Target,
        _ => intersection.glyph(),
    })
}

/// Draws `path` onto `grid`, one line per row, each terminated by a newline.
pub fn render(grid: &Grid, path: &[Point]) -> String {
    let intersections = compute_intersections(grid, path);
    (0..grid.height() as i32)
        .map(|y| {
            (0..grid.width() as i32)
                .filter_map(|x| glyph_at(grid, &intersections, &Point::new(x, y)))
                .map(Glyph::as_char)
                .collect::<String>()
        })
        .map(|row| row + "\n")
        .join("")
}
