//! Discrete maze cells and discretized headings.
//!
//! The maze is a 7×7 grid of 100-unit cells centred on the origin, so the
//! outer boundary sits at ±350 on both axes. A continuous position maps to
//! a cell with
//!
//! ```text
//! column = floor((x + 350) / 100)
//! row    = floor((y + 350) / 100)
//! ```
//!
//! Every component that needs a discrete location goes through
//! [`Cell::from_position`] so the mapping lives in one place.

use std::fmt;

use super::math::{QUARTER_TURN, normalize_orientation};
use super::point::Point2D;

/// Cells per side of the maze.
pub const GRID_SIZE: i32 = 7;

/// Side length of one cell in world units.
pub const CELL_SIZE: f64 = 100.0;

/// Distance from the maze centre to its outer boundary.
pub const MAZE_HALF_EXTENT: f64 = CELL_SIZE * GRID_SIZE as f64 / 2.0;

/// The last cell before the maze exit (bottom-right corner).
pub const EXIT_CELL: Cell = Cell::new(GRID_SIZE - 1, GRID_SIZE - 1);

/// The cell just past the exit, one step below [`EXIT_CELL`].
///
/// It lies outside the grid; translating toward it ends on the boundary.
pub const EXIT_TARGET: Cell = Cell::new(GRID_SIZE - 1, GRID_SIZE);

/// A discrete (column, row) maze coordinate.
///
/// Coordinates are signed so that neighbours of boundary cells can be
/// represented and looked up (they resolve to the visit map's sentinel).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    /// Column index, 0 at the left edge.
    pub col: i32,
    /// Row index, 0 at the top edge.
    pub row: i32,
}

impl Cell {
    /// Create a new cell.
    #[inline]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Cell containing a world position.
    #[inline]
    pub fn from_position(p: Point2D) -> Self {
        Self {
            col: ((p.x + MAZE_HALF_EXTENT) / CELL_SIZE).floor() as i32,
            row: ((p.y + MAZE_HALF_EXTENT) / CELL_SIZE).floor() as i32,
        }
    }

    /// World position of the cell centre.
    ///
    /// Inverse of [`Cell::from_position`] for every in-grid cell.
    #[inline]
    pub fn center(self) -> Point2D {
        Point2D::new(
            (f64::from(self.col) + 0.5) * CELL_SIZE - MAZE_HALF_EXTENT,
            (f64::from(self.row) + 0.5) * CELL_SIZE - MAZE_HALF_EXTENT,
        )
    }

    /// Is this cell inside the 7×7 grid?
    #[inline]
    pub fn in_grid(self) -> bool {
        (0..GRID_SIZE).contains(&self.col) && (0..GRID_SIZE).contains(&self.row)
    }

    /// Nearest in-grid cell.
    #[inline]
    pub fn clamped(self) -> Self {
        Self {
            col: self.col.clamp(0, GRID_SIZE - 1),
            row: self.row.clamp(0, GRID_SIZE - 1),
        }
    }

    /// Neighbour at the given offset.
    #[inline]
    pub fn offset(self, (dc, dr): (i32, i32)) -> Self {
        Self {
            col: self.col + dc,
            row: self.row + dr,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Direction relative to the current heading.
///
/// Declaration order is the tie-break priority used by exploration:
/// front beats right beats left. The discriminant is the sensor index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RelativeDirection {
    /// Straight ahead.
    Front = 0,
    /// A clockwise quarter turn away.
    Right = 1,
    /// A counter-clockwise quarter turn away.
    Left = 2,
}

impl RelativeDirection {
    /// All directions in tie-break priority order.
    pub const PRIORITY: [RelativeDirection; 3] = [
        RelativeDirection::Front,
        RelativeDirection::Right,
        RelativeDirection::Left,
    ];

    /// Sensor index (0 = front, 1 = right, 2 = left).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Axis-aligned heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heading {
    /// Facing +X.
    Right,
    /// Facing +Y.
    Down,
    /// Facing -X.
    Left,
    /// Facing -Y.
    Up,
}

/// (front, right, left) neighbour offsets per heading, indexed by
/// [`Heading::index`].
const NEIGHBOR_OFFSETS: [[(i32, i32); 3]; 4] = [
    // Right
    [(1, 0), (0, 1), (0, -1)],
    // Down
    [(0, 1), (-1, 0), (1, 0)],
    // Left
    [(-1, 0), (0, -1), (0, 1)],
    // Up
    [(0, -1), (1, 0), (-1, 0)],
];

impl Heading {
    /// Discretize an orientation.
    ///
    /// The circle is split into eight 45° slices measured from +X; each
    /// heading owns the two slices around its axis, so the sector edges
    /// sit halfway between axes.
    pub fn from_orientation(theta: f64) -> Self {
        let slice = normalize_orientation(theta) / (QUARTER_TURN / 2.0);
        if !(1.0..7.0).contains(&slice) {
            Heading::Right
        } else if slice < 3.0 {
            Heading::Down
        } else if slice < 5.0 {
            Heading::Left
        } else {
            Heading::Up
        }
    }

    /// Table index.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Heading::Right => 0,
            Heading::Down => 1,
            Heading::Left => 2,
            Heading::Up => 3,
        }
    }

    /// Cell offset of one step in this heading.
    #[inline]
    pub fn step(self) -> (i32, i32) {
        NEIGHBOR_OFFSETS[self.index()][RelativeDirection::Front.index()]
    }

    /// Absolute heading of a relative direction.
    pub fn turn(self, direction: RelativeDirection) -> Heading {
        let shift = match direction {
            RelativeDirection::Front => 0,
            RelativeDirection::Right => 1,
            RelativeDirection::Left => 3,
        };
        match (self.index() + shift) % 4 {
            0 => Heading::Right,
            1 => Heading::Down,
            2 => Heading::Left,
            _ => Heading::Up,
        }
    }

    /// Neighbour of `cell` in a direction relative to this heading.
    #[inline]
    pub fn neighbor(self, cell: Cell, direction: RelativeDirection) -> Cell {
        cell.offset(NEIGHBOR_OFFSETS[self.index()][direction.index()])
    }
}
