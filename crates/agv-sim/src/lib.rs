//! `agv-sim` — the staged task simulator.
//!
//! # The run script
//!
//! ```text
//! Idle → ToShelf → PickUp → ToStation → WaitAtStation
//!      → ReturnShelf → PlaceShelf → ReturnHome → Done
//! ```
//!
//! Traversal legs walk a pathfinder route one cell per tick; `PickUp`,
//! `WaitAtStation`, and `PlaceShelf` are pure dwells.  While carrying, the
//! shelf's reported position tracks the robot's on every step.
//!
//! # Pure generator, renderer-owned pacing
//!
//! [`TaskSimulator::start_run`] validates the map, routes all four legs up
//! front, and returns a [`RunHandle`]: a lazy, finite, non-restartable
//! iterator of [`RunSnapshot`]s.  The generator never sleeps — consumers pace
//! themselves with [`SimTiming::step_interval`][agv_core::SimTiming] between
//! items.  The map is read once at start and never written back.
//!
//! # One run at a time
//!
//! A second `start_run` while a handle is live fails with
//! [`RunError::RunInProgress`]; the guard is released when the run reaches
//! `Done` or the handle is dropped.

pub mod error;
pub mod observer;
pub mod phase;
pub mod run;
pub mod sim;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{RunError, RunResult};
pub use observer::{NoopObserver, RunObserver};
pub use phase::TaskPhase;
pub use run::{RunHandle, RunSnapshot, RunStatus};
pub use sim::TaskSimulator;
