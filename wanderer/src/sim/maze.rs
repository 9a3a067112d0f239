//! 7×7 maze layouts for the simulator.
//!
//! A maze is the set of walls between adjacent cells. The outer boundary
//! is always walled except for the exit edge below [`EXIT_CELL`]; cells
//! outside the grid are open floor.
//!
//! TOML layout files list interior walls as `[col_a, row_a, col_b, row_b]`:
//!
//! ```toml
//! walls = [
//!     [0, 0, 1, 0],
//!     [2, 3, 2, 4],
//! ]
//! ```

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::Deserialize;

use crate::core::{CELL_SIZE, Cell, EXIT_CELL, EXIT_TARGET, GRID_SIZE, Heading, Point2D};
use crate::error::{Result, WandererError};

/// Clearance reported when nothing blocks a direction.
pub const SENSOR_RANGE: f64 = 1000.0;

const STEPS: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// Unordered pair of adjacent cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct Edge(Cell, Cell);

impl Edge {
    fn new(a: Cell, b: Cell) -> Self {
        if (a.col, a.row) <= (b.col, b.row) {
            Edge(a, b)
        } else {
            Edge(b, a)
        }
    }
}

#[derive(Debug, Deserialize)]
struct MazeFile {
    #[serde(default)]
    walls: Vec<[i32; 4]>,
}

/// Wall layout of a simulated maze.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Maze {
    walls: HashSet<Edge>,
}

impl Maze {
    /// Maze with no interior walls.
    pub fn open() -> Self {
        Self::default()
    }

    /// Maze from an explicit list of interior walls.
    pub fn from_walls(walls: &[(Cell, Cell)]) -> Result<Self> {
        let mut maze = Self::open();
        for &(a, b) in walls {
            maze.add_wall(a, b)?;
        }
        Ok(maze)
    }

    /// Parse a TOML layout.
    pub fn from_toml(text: &str) -> Result<Self> {
        let file: MazeFile =
            toml::from_str(text).map_err(|e| WandererError::Maze(e.to_string()))?;
        let walls: Vec<(Cell, Cell)> = file
            .walls
            .iter()
            .map(|w| (Cell::new(w[0], w[1]), Cell::new(w[2], w[3])))
            .collect();
        Self::from_walls(&walls)
    }

    /// Load a TOML layout file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Perfect maze carved by randomized depth-first search from (0, 0).
    ///
    /// Every cell is reachable and there is exactly one path between any
    /// two cells. The same seed always carves the same maze.
    pub fn random(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut walls = HashSet::new();
        for cell in all_cells() {
            for step in [(1, 0), (0, 1)] {
                let next = cell.offset(step);
                if next.in_grid() {
                    walls.insert(Edge::new(cell, next));
                }
            }
        }

        let start = Cell::new(0, 0);
        let mut visited = HashSet::from([start]);
        let mut stack = vec![start];
        while let Some(&cell) = stack.last() {
            let mut options: Vec<Cell> = STEPS
                .iter()
                .map(|&s| cell.offset(s))
                .filter(|n| n.in_grid() && !visited.contains(n))
                .collect();
            if options.is_empty() {
                stack.pop();
                continue;
            }
            options.shuffle(&mut rng);
            let next = options[0];
            walls.remove(&Edge::new(cell, next));
            visited.insert(next);
            stack.push(next);
        }

        Self { walls }
    }

    /// Add an interior wall between two adjacent in-grid cells.
    pub fn add_wall(&mut self, a: Cell, b: Cell) -> Result<()> {
        if !a.in_grid() || !b.in_grid() {
            return Err(WandererError::Maze(format!(
                "wall {}-{} lies outside the grid",
                a, b
            )));
        }
        if (a.col - b.col).abs() + (a.row - b.row).abs() != 1 {
            return Err(WandererError::Maze(format!(
                "wall {}-{} does not separate adjacent cells",
                a, b
            )));
        }
        self.walls.insert(Edge::new(a, b));
        Ok(())
    }

    /// Number of interior walls.
    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    /// Can one step from `a` to the adjacent cell `b` be taken?
    pub fn is_passable(&self, a: Cell, b: Cell) -> bool {
        if (a.col - b.col).abs() + (a.row - b.row).abs() != 1 {
            return false;
        }
        match (a.in_grid(), b.in_grid()) {
            (true, true) => !self.walls.contains(&Edge::new(a, b)),
            (false, false) => true,
            _ => Edge::new(a, b) == Edge::new(EXIT_CELL, EXIT_TARGET),
        }
    }

    /// Can a straight move from `from` to `to` be made without crossing a
    /// wall? Moves may cross at most one cell boundary per axis.
    pub fn can_travel(&self, from: Point2D, to: Point2D) -> bool {
        let a = Cell::from_position(from);
        let b = Cell::from_position(to);
        let (dc, dr) = (b.col - a.col, b.row - a.row);
        if dc.abs() > 1 || dr.abs() > 1 {
            return false;
        }
        match (dc, dr) {
            (0, 0) => true,
            (_, 0) | (0, _) => self.is_passable(a, b),
            _ => {
                let via_col = a.offset((dc, 0));
                let via_row = a.offset((0, dr));
                (self.is_passable(a, via_col) && self.is_passable(via_col, b))
                    || (self.is_passable(a, via_row) && self.is_passable(via_row, b))
            }
        }
    }

    /// Free distance from `position` along an axis heading.
    ///
    /// Walks open cells until a wall and measures to that wall. Openings
    /// that lead out of the grid report [`SENSOR_RANGE`].
    pub fn clearance(&self, position: Point2D, heading: Heading) -> f64 {
        let mut cell = Cell::from_position(position);
        if !cell.in_grid() {
            return SENSOR_RANGE;
        }
        loop {
            let next = cell.offset(heading.step());
            if !self.is_passable(cell, next) {
                break;
            }
            if !next.in_grid() {
                return SENSOR_RANGE;
            }
            cell = next;
        }

        let center = cell.center();
        let half = CELL_SIZE / 2.0;
        let distance = match heading {
            Heading::Right => center.x + half - position.x,
            Heading::Down => center.y + half - position.y,
            Heading::Left => position.x - (center.x - half),
            Heading::Up => position.y - (center.y - half),
        };
        distance.clamp(0.0, SENSOR_RANGE)
    }

    /// Cells reachable from `start` through open passages, within the grid.
    pub fn reachable_from(&self, start: Cell) -> HashSet<Cell> {
        let mut seen = HashSet::new();
        if !start.in_grid() {
            return seen;
        }
        seen.insert(start);
        let mut stack = vec![start];
        while let Some(cell) = stack.pop() {
            for step in STEPS {
                let next = cell.offset(step);
                if next.in_grid() && self.is_passable(cell, next) && seen.insert(next) {
                    stack.push(next);
                }
            }
        }
        seen
    }
}

fn all_cells() -> impl Iterator<Item = Cell> {
    (0..GRID_SIZE).flat_map(|row| (0..GRID_SIZE).map(move |col| Cell::new(col, row)))
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..=GRID_SIZE {
            // Horizontal walls above `row`
            for col in 0..GRID_SIZE {
                let below = Cell::new(col, row);
                let above = Cell::new(col, row - 1);
                let open = self.is_passable(above, below);
                f.write_str(if open { "+   " } else { "+---" })?;
            }
            writeln!(f, "+")?;
            if row == GRID_SIZE {
                break;
            }
            for col in 0..=GRID_SIZE {
                let left = Cell::new(col - 1, row);
                let right = Cell::new(col, row);
                let open = self.is_passable(left, right);
                f.write_str(if open { " " } else { "|" })?;
                if col < GRID_SIZE {
                    f.write_str("   ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_open_maze_passages() {
        let maze = Maze::open();
        assert!(maze.is_passable(Cell::new(0, 0), Cell::new(1, 0)));
        assert!(!maze.is_passable(Cell::new(0, 0), Cell::new(-1, 0)));
        assert!(!maze.is_passable(Cell::new(0, 0), Cell::new(1, 1)));
        assert!(maze.is_passable(EXIT_CELL, EXIT_TARGET));
        assert!(maze.is_passable(EXIT_TARGET, EXIT_CELL));
        assert!(!maze.is_passable(EXIT_CELL, Cell::new(7, 6)));
        assert_eq!(maze.reachable_from(Cell::new(0, 0)).len(), 49);
    }

    #[test]
    fn test_clearance_open_maze() {
        let maze = Maze::open();
        let p = Cell::new(0, 0).center();
        assert_eq!(maze.clearance(p, Heading::Right), 650.0);
        assert_eq!(maze.clearance(p, Heading::Down), 650.0);
        assert_eq!(maze.clearance(p, Heading::Left), 50.0);
        assert_eq!(maze.clearance(p, Heading::Up), 50.0);
        // Looking out through the exit
        assert_eq!(maze.clearance(EXIT_CELL.center(), Heading::Down), SENSOR_RANGE);
        assert_eq!(maze.clearance(Cell::new(6, 2).center(), Heading::Down), SENSOR_RANGE);
    }

    #[test]
    fn test_clearance_stops_at_walls() {
        let maze = Maze::from_walls(&[(Cell::new(1, 0), Cell::new(2, 0))]).unwrap();
        let p = Cell::new(0, 0).center();
        assert_eq!(maze.clearance(p, Heading::Right), 150.0);
        assert_eq!(maze.clearance(Point2D::new(-280.0, -300.0), Heading::Right), 130.0);
    }

    #[test]
    fn test_wall_validation() {
        assert!(Maze::from_walls(&[(Cell::new(0, 0), Cell::new(2, 0))]).is_err());
        assert!(Maze::from_walls(&[(Cell::new(6, 6), Cell::new(6, 7))]).is_err());
        let maze = Maze::from_walls(&[
            (Cell::new(1, 0), Cell::new(0, 0)),
            (Cell::new(0, 0), Cell::new(1, 0)),
        ])
        .unwrap();
        assert_eq!(maze.wall_count(), 1);
    }

    #[test]
    fn test_can_travel() {
        let maze = Maze::from_walls(&[(Cell::new(0, 0), Cell::new(1, 0))]).unwrap();
        assert!(maze.can_travel(Point2D::new(-300.0, -300.0), Point2D::new(-260.0, -300.0)));
        assert!(!maze.can_travel(Point2D::new(-255.0, -300.0), Point2D::new(-245.0, -300.0)));
        assert!(!maze.can_travel(Point2D::new(-300.0, -355.0), Point2D::new(-300.0, -345.0)));
        // Diagonal corner: around through (0, 1)
        assert!(maze.can_travel(Point2D::new(-251.0, -251.0), Point2D::new(-249.0, -249.0)));
        // Out through the exit
        assert!(maze.can_travel(Point2D::new(300.0, 349.0), Point2D::new(300.0, 351.0)));
    }

    #[test]
    fn test_random_maze_is_perfect() {
        for seed in [1, 7, 42] {
            let maze = Maze::random(seed);
            assert_eq!(maze.reachable_from(Cell::new(0, 0)).len(), 49);
            // A spanning tree of 49 cells removes 48 of the 84 interior walls
            assert_eq!(maze.wall_count(), 84 - 48);
            assert_eq!(maze, Maze::random(seed));
        }
    }

    #[test]
    fn test_toml_layout() {
        let maze = Maze::from_toml("walls = [[0, 0, 1, 0], [2, 3, 2, 4]]").unwrap();
        assert_eq!(maze.wall_count(), 2);
        assert!(!maze.is_passable(Cell::new(2, 4), Cell::new(2, 3)));
        assert_eq!(Maze::from_toml("").unwrap(), Maze::open());
        assert!(matches!(
            Maze::from_toml("walls = [[0, 0]]"),
            Err(WandererError::Maze(_))
        ));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "walls = [[5, 5, 5, 6]]").unwrap();
        let maze = Maze::from_file(file.path()).unwrap();
        assert!(!maze.is_passable(Cell::new(5, 5), Cell::new(5, 6)));
    }

    #[test]
    fn test_display_marks_exit() {
        let text = Maze::open().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 15);
        assert_eq!(lines[0], "+---+---+---+---+---+---+---+");
        assert_eq!(lines[14], "+---+---+---+---+---+---+   +");
        assert_eq!(lines[1], "|                           |");
    }
}
