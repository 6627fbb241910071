//! CSV capacity-table loader.
//!
//! # CSV format
//!
//! One row per component kind; the table is the stand-in for the external
//! spreadsheet the reference deployment reads its budgets from.
//!
//! ```csv
//! component,max
//! Robot,13
//! Shelf,26
//! Station,10
//! Charging,6
//! Disable,unbounded
//! ```
//!
//! **`max`** is a non-negative integer or the `unbounded` sentinel.  Kinds
//! absent from the table get a zero budget (see
//! [`CapacityConfig::limit_for`][agv_core::CapacityConfig::limit_for]);
//! `Disable` is unbounded regardless.
//!
//! The table is fetched once at startup and handed to the placement engine;
//! until then the engine refuses placements.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use agv_core::{CapacityConfig, CapacityLimit, ComponentKind};

use crate::{StoreError, StoreResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct CapacityRecord {
    component: String,
    max: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`CapacityConfig`] from a CSV file.
pub fn load_capacity_csv(path: &Path) -> StoreResult<CapacityConfig> {
    let file = std::fs::File::open(path)?;
    load_capacity_reader(file)
}

/// Like [`load_capacity_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from network
/// streams.
pub fn load_capacity_reader<R: Read>(reader: R) -> StoreResult<CapacityConfig> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut config = CapacityConfig::new();

    for result in csv_reader.deserialize::<CapacityRecord>() {
        let row = result.map_err(|e| StoreError::Parse(e.to_string()))?;
        config.set(parse_kind(&row.component)?, parse_limit(&row.max)?);
    }

    Ok(config)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_kind(s: &str) -> StoreResult<ComponentKind> {
    ComponentKind::ALL
        .into_iter()
        .find(|k| k.label() == s.trim())
        .ok_or_else(|| StoreError::Parse(format!("unknown component kind {s:?}")))
}

fn parse_limit(s: &str) -> StoreResult<CapacityLimit> {
    match s.trim() {
        "unbounded" => Ok(CapacityLimit::Unbounded),
        n => n
            .parse::<u32>()
            .map(CapacityLimit::Bounded)
            .map_err(|_| {
                StoreError::Parse(format!(
                    "invalid max {n:?}: expected \"unbounded\" or a non-negative integer"
                ))
            }),
    }
}
