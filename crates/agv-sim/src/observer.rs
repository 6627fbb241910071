//! Run observer trait for progress reporting and rendering hooks.

use agv_core::Tick;

use crate::{RunSnapshot, TaskPhase};

/// Callbacks invoked by [`RunHandle::drive`][crate::RunHandle::drive] as a
/// run plays out.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — phase logger
///
/// ```rust,ignore
/// struct PhaseLogger;
///
/// impl RunObserver for PhaseLogger {
///     fn on_phase_change(&mut self, phase: TaskPhase, tick: Tick) {
///         println!("{tick}: entering {phase}");
///     }
/// }
/// ```
pub trait RunObserver {
    /// Called for every emitted snapshot, in tick order.
    fn on_step(&mut self, _snapshot: &RunSnapshot) {}

    /// Called before `on_step` whenever the phase differs from the previous
    /// snapshot's (including the transition into `Done`).
    fn on_phase_change(&mut self, _phase: TaskPhase, _tick: Tick) {}

    /// Called once after the final snapshot.
    fn on_run_end(&mut self, _final_tick: Tick) {}
}

/// A [`RunObserver`] that does nothing.
pub struct NoopObserver;

impl RunObserver for NoopObserver {}
