//! `agv-layout` — the placement engine.
//!
//! All map mutation flows through [`PlacementEngine`]: it validates every
//! placement against the grid bounds, the loaded capacity table, the kind's
//! zone rule, and cell occupancy, in that order, and appends on success.
//! Rejections are ordinary values ([`PlacementError`]) — a refused placement
//! is a no-op on the map, never a panic.
//!
//! The engine is deliberately stateless beyond its capacity table: placed
//! counts are re-derived from the authoritative component list on every call,
//! so a freshly loaded map can never drift from a stale cached counter.

pub mod command;
pub mod engine;
pub mod error;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use command::EditCommand;
pub use engine::{derive_placed_counts, PlacementEngine};
pub use error::{PlacementError, PlacementResult};
