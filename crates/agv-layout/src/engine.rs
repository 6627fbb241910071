//! The `PlacementEngine` — validated, append-only map mutation.

use agv_core::{CapacityConfig, CapacityLimit, Cell, Component, ComponentKind, FloorMap, ZoneRule};
use rustc_hash::FxHashMap;

use crate::{PlacementError, PlacementResult};

/// Recompute per-kind component counts from a component list.
///
/// Always derived fully from the list, never carried incrementally across a
/// load boundary.
pub fn derive_placed_counts(components: &[Component]) -> FxHashMap<ComponentKind, u32> {
    let mut counts: FxHashMap<ComponentKind, u32> = FxHashMap::default();
    for c in components {
        *counts.entry(c.kind).or_insert(0) += 1;
    }
    counts
}

/// Validates and applies component placement against zone rules, per-kind
/// capacity, and single-occupancy.
///
/// Until [`load_capacity`][PlacementEngine::load_capacity] has been called,
/// every `place` fails with [`PlacementError::CapacityConfigMissing`] —
/// fail-closed, since an unknown cap must not be treated as zero or infinite.
#[derive(Default)]
pub struct PlacementEngine {
    capacity: Option<CapacityConfig>,
}

impl PlacementEngine {
    /// An engine with no capacity table yet; refuses all placements.
    pub fn new() -> Self {
        Self::default()
    }

    /// An engine ready to place.
    pub fn with_capacity(capacity: CapacityConfig) -> Self {
        Self { capacity: Some(capacity) }
    }

    /// Supply (or replace) the capacity table fetched from the external
    /// configuration source.
    pub fn load_capacity(&mut self, capacity: CapacityConfig) {
        self.capacity = Some(capacity);
    }

    pub fn capacity_loaded(&self) -> bool {
        self.capacity.is_some()
    }

    /// Place a component of `kind` at `cell`.
    ///
    /// Preconditions, first failure wins:
    ///
    /// 1. `cell` is inside the grid;
    /// 2. a capacity table has been loaded;
    /// 3. the kind's budget is not exhausted (`Disable` has no cap);
    /// 4. the kind's zone rule holds at `cell`;
    /// 5. `cell` is unoccupied.
    ///
    /// On success the new component is appended — placement never overwrites
    /// or relocates an existing component.
    pub fn place<'m>(
        &self,
        map: &'m mut FloorMap,
        kind: ComponentKind,
        cell: Cell,
    ) -> PlacementResult<&'m Component> {
        if !map.grid.contains(cell) {
            return Err(PlacementError::OutOfBounds(cell));
        }

        let capacity = self
            .capacity
            .as_ref()
            .ok_or(PlacementError::CapacityConfigMissing)?;

        let counts = derive_placed_counts(&map.components);
        let placed = counts.get(&kind).copied().unwrap_or(0);
        if let CapacityLimit::Bounded(max) = capacity.limit_for(kind) {
            if placed >= max {
                return Err(PlacementError::CapacityExceeded { kind, max });
            }
        }

        let zone_ok = match kind.zone_rule() {
            ZoneRule::Outer => map.grid.is_outer(cell),
            ZoneRule::Inner => !map.grid.is_outer(cell),
            ZoneRule::Any => true,
        };
        if !zone_ok {
            return Err(PlacementError::ZoneViolation { kind, cell });
        }

        if map.component_at(cell).is_some() {
            return Err(PlacementError::CellOccupied(cell));
        }

        map.components.push(Component::new(kind, cell));
        Ok(map.components.last().expect("just pushed"))
    }

    /// Remaining budget for `kind` given the current map, or `None` when the
    /// kind is unbounded.  Fails when no capacity table is loaded.
    pub fn remaining_for(
        &self,
        map: &FloorMap,
        kind: ComponentKind,
    ) -> PlacementResult<Option<u32>> {
        let capacity = self
            .capacity
            .as_ref()
            .ok_or(PlacementError::CapacityConfigMissing)?;
        let placed = map.count_of(kind) as u32;
        Ok(match capacity.limit_for(kind) {
            CapacityLimit::Bounded(max) => Some(max.saturating_sub(placed)),
            CapacityLimit::Unbounded => None,
        })
    }

    /// Delete the component with `id`, returning whether one was removed.
    ///
    /// Removal lives outside the primary edit flow (the editor marks cells
    /// `Disable` instead); it exists for the explicit `Remove` command and
    /// never disturbs the append-only `place` path.
    pub fn remove(&self, map: &mut FloorMap, id: &str) -> bool {
        let before = map.components.len();
        map.components.retain(|c| c.id != id);
        map.components.len() != before
    }
}
