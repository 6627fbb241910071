//! Per-kind placement capacity limits.
//!
//! Limits come from an external configuration source (loaded by `agv-store`)
//! and are handed to the placement engine once at startup.  Until a config is
//! supplied, the engine refuses every placement — an unknown cap is neither
//! zero nor infinite.

use std::collections::HashMap;

use crate::ComponentKind;

/// A single kind's placement budget.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CapacityLimit {
    /// At most this many components of the kind.
    Bounded(u32),
    /// No cap.
    Unbounded,
}

impl CapacityLimit {
    /// `true` if `count` placed components leave room for one more.
    #[inline]
    pub fn admits(self, count: u32) -> bool {
        match self {
            CapacityLimit::Bounded(max) => count < max,
            CapacityLimit::Unbounded => true,
        }
    }
}

/// The full kind → limit table.
///
/// `Disable` is always unbounded regardless of the table contents; a kind
/// missing from a loaded table has a zero budget (explicitly listing every
/// placeable kind is the configuration source's job).
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CapacityConfig {
    limits: HashMap<ComponentKind, CapacityLimit>,
}

impl CapacityConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the limit for `kind`.  Overwrites any previous entry.
    pub fn set(&mut self, kind: ComponentKind, limit: CapacityLimit) -> &mut Self {
        self.limits.insert(kind, limit);
        self
    }

    /// The effective limit for `kind`.
    pub fn limit_for(&self, kind: ComponentKind) -> CapacityLimit {
        if kind == ComponentKind::Disable {
            return CapacityLimit::Unbounded;
        }
        self.limits
            .get(&kind)
            .copied()
            .unwrap_or(CapacityLimit::Bounded(0))
    }
}

impl FromIterator<(ComponentKind, CapacityLimit)> for CapacityConfig {
    fn from_iter<T: IntoIterator<Item = (ComponentKind, CapacityLimit)>>(iter: T) -> Self {
        Self {
            limits: iter.into_iter().collect(),
        }
    }
}
