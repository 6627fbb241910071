//! `agv-path` — shortest-route search over the floor grid.
//!
//! # Pluggability
//!
//! `agv-sim` calls routing via the [`Pathfinder`] trait, so applications can
//! swap in custom implementations (A*, weighted cells, reservation tables)
//! without touching the simulator.  The default [`BfsPathfinder`] is correct
//! and fast for warehouse-sized grids.
//!
//! # No-route is not an error
//!
//! An unreachable goal yields an **empty** [`Path`], never an `Err` — callers
//! decide whether a missing route is fatal for their operation.  Obstacles
//! are likewise a parameter: the engine has no opinion on which component
//! kinds block traversal.

pub mod bfs;
pub mod path;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use bfs::BfsPathfinder;
pub use path::Path;

use agv_core::{Cell, GridSpec};
use rustc_hash::FxHashSet;

/// Pluggable route search.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`; a single instance is shared by the
/// simulator across run handles.
pub trait Pathfinder: Send + Sync {
    /// Shortest 4-directional route from `start` to `goal` avoiding
    /// `obstacles`.
    ///
    /// Returns `[start]` when `start == goal` and an empty path when no route
    /// exists.
    fn find_path(
        &self,
        grid: GridSpec,
        start: Cell,
        goal: Cell,
        obstacles: &FxHashSet<Cell>,
    ) -> Path;
}
