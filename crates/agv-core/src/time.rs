//! Simulation time model.
//!
//! # Design
//!
//! A task run is a sequence of discrete snapshots, one per `Tick`.  The run
//! generator is pure — it never sleeps — so the mapping from ticks to wall
//! time lives entirely in [`SimTiming`]: the renderer consuming the snapshot
//! stream sleeps `step_interval()` between items.  Dwell phases (pick up,
//! wait, place) are expressed as tick counts so the same config drives both
//! the generator and the pacing loop.

use std::fmt;
use std::time::Duration;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute snapshot counter within one task run.
///
/// Stored as `u64`; runs are short (a few hundred snapshots) but the headroom
/// is free.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimTiming ─────────────────────────────────────────────────────────────────

/// Pacing and dwell configuration for a task run.
///
/// The defaults match the reference warehouse: 500 ms per movement step and
/// 1 s per dwell (2 ticks at the default step interval).
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTiming {
    /// Wall-clock milliseconds between snapshots — the robot's "speed".
    pub step_interval_ms: u64,
    /// Ticks spent picking the shelf up.
    pub pickup_ticks: u64,
    /// Ticks spent waiting at the station.
    pub wait_ticks: u64,
    /// Ticks spent placing the shelf back.
    pub place_ticks: u64,
}

impl SimTiming {
    /// The renderer's sleep between consecutive snapshots.
    #[inline]
    pub fn step_interval(&self) -> Duration {
        Duration::from_millis(self.step_interval_ms)
    }

    /// Movement steps per second implied by the step interval.
    pub fn steps_per_sec(&self) -> f64 {
        if self.step_interval_ms == 0 {
            return f64::INFINITY;
        }
        1_000.0 / self.step_interval_ms as f64
    }
}

impl Default for SimTiming {
    fn default() -> Self {
        Self {
            step_interval_ms: 500,
            pickup_ticks: 2,
            wait_ticks: 2,
            place_ticks: 2,
        }
    }
}
