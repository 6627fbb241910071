//! `agv-core` — foundational types for the `agv_sim` warehouse framework.
//!
//! This crate is a dependency of every other `agv-*` crate.  It intentionally
//! has no `agv-*` dependencies and no required external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`grid`]      | `Cell`, `GridSpec`, outer-ring zone queries             |
//! | [`component`] | `ComponentKind`, `ZoneRule`, `Component`                |
//! | [`map`]       | `FloorMap` — the authoritative component list           |
//! | [`capacity`]  | `CapacityLimit`, `CapacityConfig`                       |
//! | [`time`]      | `Tick`, `SimTiming`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                          |
//! |---------|-----------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on all public types (`agv-store` uses it). |

pub mod capacity;
pub mod component;
pub mod grid;
pub mod map;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use capacity::{CapacityConfig, CapacityLimit};
pub use component::{Component, ComponentKind, ZoneRule};
pub use grid::{Cell, GridSpec};
pub use map::FloorMap;
pub use time::{SimTiming, Tick};
