//! `agv-store` — the excluded collaborators, specified at their boundary.
//!
//! The simulation core never talks to storage or dispatch directly; it is
//! handed a [`MapStore`] and a [`DispatchClient`] by the host.  This crate
//! defines those contracts plus concrete offline implementations:
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`map_store`]| `MapStore` trait, `MapSummary`, `JsonFileStore`          |
//! | [`capacity`] | CSV capacity-table loading (`load_capacity_*`)           |
//! | [`dispatch`] | `DispatchMode`, putaway payload records, `DispatchClient`|
//! | [`error`]    | `StoreError`, `StoreResult`                              |
//!
//! Failures here surface to the user as messages; nothing is retried
//! automatically and a failed save never marks local state as saved.

pub mod capacity;
pub mod dispatch;
pub mod error;
pub mod map_store;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use capacity::{load_capacity_csv, load_capacity_reader};
pub use dispatch::{DispatchClient, DispatchMode, OrderCodeGen, PutawayHeader, PutawayOrder, PutawayRequest};
pub use error::{StoreError, StoreResult};
pub use map_store::{map_to_json, JsonFileStore, MapStore, MapSummary};
