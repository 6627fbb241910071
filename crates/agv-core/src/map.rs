//! `FloorMap` — the authoritative component list for one warehouse layout.

use crate::{Cell, Component, ComponentKind, GridSpec};

/// One warehouse floor plan: a grid plus an ordered component list.
///
/// # Invariants (enforced by `agv-layout`, not here)
///
/// - **occupancy** — no two components share a cell;
/// - **capacity** — per-kind counts never exceed the configured caps.
///
/// `FloorMap` itself only offers read queries.  All mutation goes through the
/// placement engine; a loaded map replaces the previous one wholesale (no
/// partial merge).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloorMap {
    /// Storage id, assigned by the map store on first save.
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: Option<String>,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub grid: GridSpec,
    pub components: Vec<Component>,
}

impl FloorMap {
    /// Create an empty, unsaved map.
    pub fn new(name: impl Into<String>, grid: GridSpec) -> Self {
        Self {
            id: None,
            name: name.into(),
            grid,
            components: Vec::new(),
        }
    }

    /// The component occupying `cell`, if any.
    pub fn component_at(&self, cell: Cell) -> Option<&Component> {
        self.components.iter().find(|c| c.cell() == cell)
    }

    /// The first component of `kind` in placement order.
    ///
    /// The task simulator drives a single arbitrary instance of each kind;
    /// "first placed" is the arbitrary choice, matching a linear scan.
    pub fn first_of(&self, kind: ComponentKind) -> Option<&Component> {
        self.components.iter().find(|c| c.kind == kind)
    }

    /// Cells of every component of `kind`, in placement order.
    pub fn cells_of(&self, kind: ComponentKind) -> impl Iterator<Item = Cell> + '_ {
        self.components
            .iter()
            .filter(move |c| c.kind == kind)
            .map(|c| c.cell())
    }

    /// Number of components of `kind`.
    pub fn count_of(&self, kind: ComponentKind) -> usize {
        self.components.iter().filter(|c| c.kind == kind).count()
    }
}
