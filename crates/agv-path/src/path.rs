//! The `Path` result type.

use agv_core::Cell;

/// An ordered cell sequence: first element = start, last = goal, each
/// consecutive pair one unit apart on exactly one axis.
///
/// A path of length 1 means start == goal.  An empty path means "no route"
/// and is a valid result, not an error.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Path {
    cells: Vec<Cell>,
}

impl Path {
    /// The no-route sentinel.
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn from_cells(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of cells, including the start.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Number of movement steps (`len - 1`; 0 for trivial and empty paths).
    #[inline]
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn start(&self) -> Option<Cell> {
        self.cells.first().copied()
    }

    pub fn goal(&self) -> Option<Cell> {
        self.cells.last().copied()
    }
}

impl IntoIterator for Path {
    type Item = Cell;
    type IntoIter = std::vec::IntoIter<Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}
