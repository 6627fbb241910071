//! The `RunHandle` snapshot generator.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use agv_core::{Cell, Tick};

use crate::TaskPhase;

// ── Snapshot ──────────────────────────────────────────────────────────────────

/// One frame of a task run: where the robot and shelf are, and which phase
/// the run is in.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct RunSnapshot {
    pub tick: Tick,
    pub robot: Cell,
    pub shelf: Cell,
    pub phase: TaskPhase,
}

/// Where a run stands.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RunStatus {
    Running,
    Done,
}

// ── Script segments ───────────────────────────────────────────────────────────

/// One contiguous piece of the run script.
///
/// `carrying` is fixed per segment: true from `PickUp` through `PlaceShelf`,
/// false for the approach and the trip home.  While true, the shelf's
/// reported position is overwritten with the robot's on every snapshot.
#[derive(Debug)]
pub(crate) enum Segment {
    Walk {
        phase: TaskPhase,
        cells: Vec<Cell>,
        carrying: bool,
    },
    Dwell {
        phase: TaskPhase,
        ticks: u64,
        carrying: bool,
    },
}

// ── Guard ─────────────────────────────────────────────────────────────────────

/// Releases the simulator's single-run flag when dropped.
#[derive(Debug)]
pub(crate) struct RunGuard {
    active: Arc<AtomicBool>,
}

impl RunGuard {
    pub(crate) fn new(active: Arc<AtomicBool>) -> Self {
        Self { active }
    }
}

impl Drop for RunGuard {
    fn drop(&mut self) {
        self.active.store(false, Ordering::Release);
    }
}

// ── RunHandle ─────────────────────────────────────────────────────────────────

/// A lazy, finite, non-restartable stream of [`RunSnapshot`]s for one task
/// run.
///
/// Produced by [`TaskSimulator::start_run`][crate::TaskSimulator::start_run].
/// The final item always has phase [`TaskPhase::Done`]; after it the iterator
/// is exhausted and the simulator accepts a new run.  Dropping the handle
/// early releases the run lock without completing the task.
#[derive(Debug)]
pub struct RunHandle {
    segments: Vec<Segment>,
    seg_idx: usize,
    step_idx: u64,
    tick: Tick,
    robot: Cell,
    shelf: Cell,
    phase: TaskPhase,
    status: RunStatus,
    // Some while the run holds the simulator's single-run flag.
    guard: Option<RunGuard>,
}

impl RunHandle {
    pub(crate) fn new(
        segments: Vec<Segment>,
        robot_start: Cell,
        shelf_start: Cell,
        guard: RunGuard,
    ) -> Self {
        Self {
            segments,
            seg_idx: 0,
            step_idx: 0,
            tick: Tick::ZERO,
            robot: robot_start,
            shelf: shelf_start,
            phase: TaskPhase::Idle,
            status: RunStatus::Running,
            guard: Some(guard),
        }
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    /// The phase of the most recently emitted snapshot (`Idle` before the
    /// first).
    pub fn phase(&self) -> TaskPhase {
        self.phase
    }

    fn emit(&mut self, phase: TaskPhase, carrying: bool) -> RunSnapshot {
        if carrying {
            self.shelf = self.robot;
        }
        self.phase = phase;
        let snap = RunSnapshot {
            tick: self.tick,
            robot: self.robot,
            shelf: self.shelf,
            phase,
        };
        self.tick = self.tick + 1;
        snap
    }

    fn finish(&mut self) -> RunSnapshot {
        self.status = RunStatus::Done;
        // Release the single-run lock at the terminal state, not at drop.
        self.guard = None;
        self.emit(TaskPhase::Done, false)
    }

    /// Walk a handle to completion, feeding every snapshot to `observer`.
    ///
    /// Pacing is the caller's concern: this drains the generator without
    /// sleeping.  Use the iterator directly for a timed render loop.
    pub fn drive<O: crate::RunObserver>(mut self, observer: &mut O) {
        let mut last_phase = self.phase;
        let mut final_tick = self.tick;
        for snap in self.by_ref() {
            if snap.phase != last_phase {
                observer.on_phase_change(snap.phase, snap.tick);
                last_phase = snap.phase;
            }
            observer.on_step(&snap);
            final_tick = snap.tick;
        }
        observer.on_run_end(final_tick);
    }
}

impl Iterator for RunHandle {
    type Item = RunSnapshot;

    fn next(&mut self) -> Option<RunSnapshot> {
        loop {
            let Some(segment) = self.segments.get(self.seg_idx) else {
                return match self.status {
                    RunStatus::Running => Some(self.finish()),
                    RunStatus::Done => None,
                };
            };

            match segment {
                Segment::Walk { phase, cells, carrying } => {
                    if let Some(&cell) = cells.get(self.step_idx as usize) {
                        let (phase, carrying) = (*phase, *carrying);
                        self.step_idx += 1;
                        self.robot = cell;
                        return Some(self.emit(phase, carrying));
                    }
                }
                Segment::Dwell { phase, ticks, carrying } => {
                    if self.step_idx < *ticks {
                        let (phase, carrying) = (*phase, *carrying);
                        self.step_idx += 1;
                        return Some(self.emit(phase, carrying));
                    }
                }
            }

            // Segment exhausted — move to the next one.
            self.seg_idx += 1;
            self.step_idx = 0;
        }
    }
}
