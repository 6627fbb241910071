//! Dispatch boundary: putaway order payloads and the opaque server call.
//!
//! The assignment algorithm behind `generate_putaway_tasks` lives entirely
//! server-side; this module only fixes the request/response shapes and the
//! mode selector the host sends.

use std::fmt;

use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::StoreResult;

// ── DispatchMode ──────────────────────────────────────────────────────────────

/// Which server-side assignment policy to use.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchMode {
    /// Nearest idle robot takes the order.
    Proximity,
    /// Prefer robots with the most charge.
    Energy,
    /// Spread orders evenly across the fleet.
    LoadBalanced,
}

impl DispatchMode {
    /// The wire string, e.g. `"load_balanced"`.
    pub fn as_str(self) -> &'static str {
        match self {
            DispatchMode::Proximity    => "proximity",
            DispatchMode::Energy       => "energy",
            DispatchMode::LoadBalanced => "load_balanced",
        }
    }
}

impl fmt::Display for DispatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Payload records ───────────────────────────────────────────────────────────

/// Caller identification sent with every dispatch request.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PutawayHeader {
    pub warehouse_code: String,
    pub user_id: String,
}

/// One generated putaway order.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PutawayOrder {
    /// Eight-character alphanumeric order code.
    pub putaway_order_code: String,
    /// The map the order targets.
    pub map_id: String,
    pub mode: DispatchMode,
    /// 0 = normal, 1 = urgent.
    pub priority: u8,
    /// Creation timestamp, Unix milliseconds.
    pub creation_date: u64,
}

/// The full request body for `generate_putaway_tasks`.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PutawayRequest {
    pub header: PutawayHeader,
    pub orders: Vec<PutawayOrder>,
}

// ── DispatchClient ────────────────────────────────────────────────────────────

/// The opaque dispatch collaborator.
///
/// Implementations wrap whatever transport the deployment uses; failures
/// surface as [`StoreError`][crate::StoreError] messages without retry.
pub trait DispatchClient {
    /// Ask the server to generate putaway tasks for `map_id` under `mode`.
    fn generate_putaway_tasks(
        &self,
        map_id: &str,
        mode: DispatchMode,
    ) -> StoreResult<PutawayRequest>;
}

// ── Order codes ───────────────────────────────────────────────────────────────

const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const CODE_LEN: usize = 8;

/// Seeded generator for order codes — deterministic for a given seed, so
/// request payloads are reproducible in tests.
pub struct OrderCodeGen {
    rng: SmallRng,
}

impl OrderCodeGen {
    pub fn new(seed: u64) -> Self {
        Self { rng: SmallRng::seed_from_u64(seed) }
    }

    /// The next eight-character alphanumeric code.
    pub fn next_code(&mut self) -> String {
        (0..CODE_LEN)
            .map(|_| {
                let i = self.rng.gen_range(0..CODE_ALPHABET.len());
                CODE_ALPHABET[i] as char
            })
            .collect()
    }
}
