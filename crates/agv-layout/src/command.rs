//! Tagged edit commands — the single mutation surface shared by every editor
//! view.

use agv_core::{Cell, ComponentKind, FloorMap};

use crate::{PlacementEngine, PlacementResult};

/// One editor action against a map.
///
/// Editors build commands; the engine applies them.  Consolidating edits into
/// one variant set keeps every screen's behavior identical.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum EditCommand {
    /// Place a component of `kind` at `cell`.
    Place { kind: ComponentKind, cell: Cell },
    /// Delete the component with `id`.  Unknown ids are a no-op.
    Remove { id: String },
}

impl PlacementEngine {
    /// Apply one [`EditCommand`] to `map`.
    pub fn apply(&self, map: &mut FloorMap, command: EditCommand) -> PlacementResult<()> {
        match command {
            EditCommand::Place { kind, cell } => self.place(map, kind, cell).map(|_| ()),
            EditCommand::Remove { id } => {
                self.remove(map, &id);
                Ok(())
            }
        }
    }
}
