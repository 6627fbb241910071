//! Component taxonomy and placed-component records.

use std::fmt;

use crate::Cell;

// ── ComponentKind ─────────────────────────────────────────────────────────────

/// The kind of a placed floor component.
///
/// `Disable` marks a cell as unusable; it is the only kind with no capacity
/// cap and no zone restriction, and the only kind the task simulator treats
/// as an obstacle by default.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ComponentKind {
    Robot,
    Shelf,
    Station,
    Charging,
    Disable,
}

/// Which zone a component kind may occupy.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ZoneRule {
    /// Must be on the outer ring.
    Outer,
    /// Must be strictly inside the outer ring.
    Inner,
    /// No restriction.
    Any,
}

impl ComponentKind {
    /// All kinds, in palette order.
    pub const ALL: [ComponentKind; 5] = [
        ComponentKind::Robot,
        ComponentKind::Shelf,
        ComponentKind::Station,
        ComponentKind::Charging,
        ComponentKind::Disable,
    ];

    /// The zone this kind is allowed to occupy.
    ///
    /// Stations load/unload at the warehouse boundary; everything mobile or
    /// storage-related stays inside the ring.
    pub fn zone_rule(self) -> ZoneRule {
        match self {
            ComponentKind::Station => ZoneRule::Outer,
            ComponentKind::Robot | ComponentKind::Shelf | ComponentKind::Charging => {
                ZoneRule::Inner
            }
            ComponentKind::Disable => ZoneRule::Any,
        }
    }

    /// Stable label used in component ids and the JSON wire format.
    pub fn label(self) -> &'static str {
        match self {
            ComponentKind::Robot    => "Robot",
            ComponentKind::Shelf    => "Shelf",
            ComponentKind::Station  => "Station",
            ComponentKind::Charging => "Charging",
            ComponentKind::Disable  => "Disable",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── Component ─────────────────────────────────────────────────────────────────

/// One placed component.
///
/// Owned exclusively by its [`FloorMap`][crate::FloorMap] and never edited in
/// place after placement — the placement engine only appends (or, for the
/// explicit `Remove` command, deletes whole records).
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Component {
    /// Derived from `(kind, row, col)` for reproducibility.  Not required to
    /// be unique across map reloads.
    pub id: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: ComponentKind,
    pub row: u32,
    pub col: u32,
}

impl Component {
    /// Create a component with its deterministic id.
    pub fn new(kind: ComponentKind, cell: Cell) -> Self {
        Self {
            id: format!("{}-{}-{}", kind.label(), cell.row, cell.col),
            kind,
            row: cell.row,
            col: cell.col,
        }
    }

    #[inline]
    pub fn cell(&self) -> Cell {
        Cell::new(self.row, self.col)
    }
}
