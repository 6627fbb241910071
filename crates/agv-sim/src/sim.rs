//! The `TaskSimulator` — validates a map and turns it into a run script.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use agv_core::{Cell, ComponentKind, FloorMap, SimTiming};
use agv_path::{Path, Pathfinder};
use rustc_hash::FxHashSet;

use crate::run::{RunGuard, Segment};
use crate::{RunError, RunHandle, RunResult, TaskPhase};

/// Drives one scripted robot task over a map.
///
/// # Type parameter
///
/// `P` is the route search (e.g. [`agv_path::BfsPathfinder`]).  Swap it at
/// compile time for a different algorithm with no runtime overhead.
///
/// # Obstacle policy
///
/// Which component kinds block traversal is simulator policy, not pathfinder
/// state: the default is `{Disable}` only.  Override with
/// [`obstacle_kinds`][TaskSimulator::obstacle_kinds].
pub struct TaskSimulator<P: Pathfinder> {
    pathfinder: P,
    timing: SimTiming,
    obstacle_kinds: Vec<ComponentKind>,
    // Single-run lock shared with the live RunHandle's guard.
    active: Arc<AtomicBool>,
}

impl<P: Pathfinder> TaskSimulator<P> {
    /// A simulator with default timing and the `{Disable}` obstacle policy.
    pub fn new(pathfinder: P) -> Self {
        Self {
            pathfinder,
            timing: SimTiming::default(),
            obstacle_kinds: vec![ComponentKind::Disable],
            active: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn timing(mut self, timing: SimTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Replace the set of kinds treated as impassable.
    pub fn obstacle_kinds(mut self, kinds: Vec<ComponentKind>) -> Self {
        self.obstacle_kinds = kinds;
        self
    }

    /// `true` while a [`RunHandle`] from this simulator is live.
    ///
    /// Hosts disable map edits while this holds — the run reads the
    /// component list it captured at start and the map must not shift
    /// underneath a rendered animation.
    pub fn is_running(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Start a task run against `map`.
    ///
    /// Scans for the first `Robot`, `Shelf`, and `Station` (in placement
    /// order), routes all four legs up front, and returns the snapshot
    /// generator.  Fails without side effects when a component is missing,
    /// any leg has no route, or another run is active.
    pub fn start_run(&self, map: &FloorMap) -> RunResult<RunHandle> {
        let robot = self.require(map, ComponentKind::Robot)?;
        let shelf = self.require(map, ComponentKind::Shelf)?;
        let station = self.require(map, ComponentKind::Station)?;

        let obstacles: FxHashSet<Cell> = map
            .components
            .iter()
            .filter(|c| self.obstacle_kinds.contains(&c.kind))
            .map(|c| c.cell())
            .collect();

        // Every leg's endpoints are known before the first step, so a run
        // that starts is a run that finishes.
        let to_shelf     = self.leg(map, robot, shelf, &obstacles, TaskPhase::ToShelf)?;
        let to_station   = self.leg(map, shelf, station, &obstacles, TaskPhase::ToStation)?;
        let return_shelf = self.leg(map, station, shelf, &obstacles, TaskPhase::ReturnShelf)?;
        let return_home  = self.leg(map, shelf, robot, &obstacles, TaskPhase::ReturnHome)?;

        let t = self.timing;
        let segments = vec![
            Segment::Walk { phase: TaskPhase::ToShelf, cells: to_shelf.cells().to_vec(), carrying: false },
            Segment::Dwell { phase: TaskPhase::PickUp, ticks: t.pickup_ticks, carrying: true },
            Segment::Walk { phase: TaskPhase::ToStation, cells: tail(&to_station), carrying: true },
            Segment::Dwell { phase: TaskPhase::WaitAtStation, ticks: t.wait_ticks, carrying: true },
            Segment::Walk { phase: TaskPhase::ReturnShelf, cells: tail(&return_shelf), carrying: true },
            Segment::Dwell { phase: TaskPhase::PlaceShelf, ticks: t.place_ticks, carrying: true },
            Segment::Walk { phase: TaskPhase::ReturnHome, cells: tail(&return_home), carrying: false },
        ];

        // Acquire last: everything above is read-only, so a rejected start
        // leaves no state to unwind.
        if self
            .active
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(RunError::RunInProgress);
        }

        Ok(RunHandle::new(
            segments,
            robot,
            shelf,
            RunGuard::new(Arc::clone(&self.active)),
        ))
    }

    fn require(&self, map: &FloorMap, kind: ComponentKind) -> RunResult<Cell> {
        map.first_of(kind)
            .map(|c| c.cell())
            .ok_or(RunError::MissingComponent(kind))
    }

    fn leg(
        &self,
        map: &FloorMap,
        from: Cell,
        to: Cell,
        obstacles: &FxHashSet<Cell>,
        phase: TaskPhase,
    ) -> RunResult<Path> {
        let path = self.pathfinder.find_path(map.grid, from, to, obstacles);
        if path.is_empty() {
            return Err(RunError::NoRoute { from, to, phase });
        }
        Ok(path)
    }
}

/// All cells after the first.  Consecutive legs share their join cell; the
/// follow-on leg drops it so the stream never repeats a stationary frame.
fn tail(path: &Path) -> Vec<Cell> {
    path.cells().iter().skip(1).copied().collect()
}
