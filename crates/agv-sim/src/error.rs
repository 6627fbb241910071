//! Task-run error type.

use agv_core::{Cell, ComponentKind};
use thiserror::Error;

use crate::TaskPhase;

/// Why a run could not start.
///
/// All failures are detected before the first snapshot is emitted: the map is
/// validated and every leg routed up front, so a returned
/// [`RunHandle`][crate::RunHandle] always runs to completion.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RunError {
    #[error("no {0} placed on the map")]
    MissingComponent(ComponentKind),

    #[error("a run is already in progress")]
    RunInProgress,

    #[error("no route from {from} to {to} for the {phase} leg")]
    NoRoute {
        from: Cell,
        to: Cell,
        phase: TaskPhase,
    },
}

pub type RunResult<T> = Result<T, RunError>;
