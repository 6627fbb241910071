//! Placement-engine error type.

use agv_core::{Cell, ComponentKind};
use thiserror::Error;

/// Why a placement was refused.
///
/// Every variant is recoverable: the caller simply does not apply the change.
/// The variants stay distinguishable for user feedback and tests.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    #[error("cell {0} is outside the grid")]
    OutOfBounds(Cell),

    #[error("capacity configuration has not been loaded")]
    CapacityConfigMissing,

    #[error("capacity for {kind} exhausted (max {max})")]
    CapacityExceeded { kind: ComponentKind, max: u32 },

    #[error("{kind} may not occupy {cell}: wrong zone")]
    ZoneViolation { kind: ComponentKind, cell: Cell },

    #[error("cell {0} is already occupied")]
    CellOccupied(Cell),
}

pub type PlacementResult<T> = Result<T, PlacementError>;
