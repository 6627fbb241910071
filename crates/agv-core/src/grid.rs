//! Grid geometry: cells and the fixed-size floor grid.
//!
//! # Zones
//!
//! A grid has exactly two zones, derived purely from coordinates:
//!
//! - **outer ring** — the first/last row or column.  The only cells eligible
//!   for `Station` placement.
//! - **inner area** — everything else.  Robots, shelves, and charging ports
//!   live here.
//!
//! Both queries are pure functions of `(cell, grid size)`; they hold no state
//! and are safe to call from any thread without locking.

use std::fmt;

// ── Cell ──────────────────────────────────────────────────────────────────────

/// A `(row, col)` grid coordinate.
///
/// `Copy + Ord + Hash` so cells can be used as set members and map keys
/// without ceremony.  Coordinates are unsigned: callers never construct
/// negative positions, and neighbor arithmetic uses checked operations.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: u32,
    pub col: u32,
}

impl Cell {
    #[inline]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to `other` — the step count of any obstacle-free
    /// 4-directional shortest path.
    pub fn manhattan(self, other: Cell) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

// ── GridSpec ──────────────────────────────────────────────────────────────────

/// The fixed dimensions of a floor grid.  Immutable for the life of a map.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSpec {
    pub rows: u32,
    pub cols: u32,
}

impl GridSpec {
    pub const fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    /// `true` iff `cell` lies within the grid.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// `true` iff `cell` is on the outer ring (first/last row or column).
    ///
    /// Returns `false` for out-of-bounds cells rather than panicking — the
    /// placement engine checks bounds first, but callers outside it may not.
    #[inline]
    pub fn is_outer(&self, cell: Cell) -> bool {
        if !self.contains(cell) {
            return false;
        }
        cell.row == 0 || cell.row == self.rows - 1 || cell.col == 0 || cell.col == self.cols - 1
    }

    /// Total cell count, as a capacity hint for visited sets.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }
}

impl fmt::Display for GridSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}
