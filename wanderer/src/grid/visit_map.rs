//! Per-cell visit counter.

use std::fmt;

use crate::core::{Cell, GRID_SIZE};

/// Count reported for cells outside the grid.
///
/// Strictly larger than any count reachable by incrementing, so the
/// exploration heuristic never prefers stepping off the maze.
pub const UNVISITABLE: u32 = u32::MAX;

const SIDE: usize = GRID_SIZE as usize;

/// 7×7 visit counter.
///
/// ```text
/// 1,1,1,1,0,0,0,
/// 0,0,0,0,0,0,0,
/// ...
/// ```
/// Each row of the [`Display`](fmt::Display) output is one maze row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GridVisitMap {
    counts: [[u32; SIDE]; SIDE],
}

impl GridVisitMap {
    /// Create a map with every count at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Visit count of a cell, or [`UNVISITABLE`] outside the grid.
    #[inline]
    pub fn get(&self, cell: Cell) -> u32 {
        if !cell.in_grid() {
            return UNVISITABLE;
        }
        self.counts[cell.row as usize][cell.col as usize]
    }

    /// Add one visit to an in-grid cell.
    ///
    /// Callers validate the cell first; out-of-grid cells are left
    /// untouched. Counts saturate one below the sentinel.
    #[inline]
    pub fn increment(&mut self, cell: Cell) {
        if !cell.in_grid() {
            return;
        }
        let count = &mut self.counts[cell.row as usize][cell.col as usize];
        if *count < UNVISITABLE - 1 {
            *count += 1;
        }
    }

    /// Set every count back to zero.
    pub fn reset(&mut self) {
        self.counts = [[0; SIDE]; SIDE];
    }

    /// Sum of all counts.
    pub fn total_visits(&self) -> u64 {
        self.counts
            .iter()
            .flat_map(|row| row.iter())
            .map(|&c| u64::from(c))
            .sum()
    }

    /// Cells with a non-zero count, row-major.
    pub fn visited_cells(&self) -> Vec<Cell> {
        self.iter().filter(|&(_, c)| c > 0).map(|(cell, _)| cell).collect()
    }

    /// Largest single count.
    pub fn max_count(&self) -> u32 {
        self.counts
            .iter()
            .flat_map(|row| row.iter())
            .copied()
            .max()
            .unwrap_or(0)
    }

    /// Iterate over (cell, count) pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, u32)> + '_ {
        self.counts.iter().enumerate().flat_map(|(row, counts)| {
            counts
                .iter()
                .enumerate()
                .map(move |(col, &count)| (Cell::new(col as i32, row as i32), count))
        })
    }
}

impl fmt::Display for GridVisitMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.counts {
            for count in row {
                write!(f, "{},", count)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
