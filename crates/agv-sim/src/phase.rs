//! Task-run phases.

use std::fmt;

/// The named stages of one robot task, in execution order.
///
/// No leg starts before the prior leg's path has been fully traversed, and
/// snapshots within a leg are totally ordered by path position.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum TaskPhase {
    /// No run in progress (a fresh handle before its first snapshot).
    Idle,
    /// Robot travels to the shelf.
    ToShelf,
    /// Dwell: lifting the shelf.
    PickUp,
    /// Robot carries the shelf to the station.
    ToStation,
    /// Dwell: load/unload at the station.
    WaitAtStation,
    /// Robot carries the shelf back to its original cell.
    ReturnShelf,
    /// Dwell: setting the shelf down.
    PlaceShelf,
    /// Robot travels back to its own starting cell.
    ReturnHome,
    /// Terminal — the run is complete.
    Done,
}

impl TaskPhase {
    /// `true` for the dwell phases (no position change).
    pub fn is_dwell(self) -> bool {
        matches!(
            self,
            TaskPhase::PickUp | TaskPhase::WaitAtStation | TaskPhase::PlaceShelf
        )
    }

    pub fn is_terminal(self) -> bool {
        self == TaskPhase::Done
    }
}

impl fmt::Display for TaskPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TaskPhase::Idle          => "idle",
            TaskPhase::ToShelf       => "to-shelf",
            TaskPhase::PickUp        => "pick-up",
            TaskPhase::ToStation     => "to-station",
            TaskPhase::WaitAtStation => "wait-at-station",
            TaskPhase::ReturnShelf   => "return-shelf",
            TaskPhase::PlaceShelf    => "place-shelf",
            TaskPhase::ReturnHome    => "return-home",
            TaskPhase::Done          => "done",
        };
        f.write_str(s)
    }
}
