//! Map persistence: the `MapStore` contract and a directory-backed JSON
//! implementation.
//!
//! # Wire format
//!
//! One JSON document per map, mirroring the `FloorMap`/`Component` records:
//!
//! ```json
//! {
//!   "id": "64f0c2a1…",
//!   "name": "Floor A",
//!   "rows": 20,
//!   "cols": 20,
//!   "components": [
//!     { "id": "Robot-5-5", "type": "Robot", "row": 5, "col": 5 }
//!   ]
//! }
//! ```

use std::fs;
use std::path::PathBuf;

use agv_core::FloorMap;
use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::{StoreError, StoreResult};

// ── Contract ──────────────────────────────────────────────────────────────────

/// A map's listing entry.
#[derive(Clone, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
pub struct MapSummary {
    pub id: String,
    pub name: String,
}

/// The persistence collaborator, injected by the host.
///
/// Loading replaces the working map wholesale; there is no partial merge.
/// Implementations must not commit partial state on failure.
pub trait MapStore {
    /// Fetch a map by id.
    fn load_map(&self, id: &str) -> StoreResult<FloorMap>;

    /// Persist `map`, assigning an id when it has none.  Returns the stored
    /// map (with its id) on success.
    fn save_map(&self, map: &FloorMap) -> StoreResult<FloorMap>;

    /// All stored maps, id + name only.
    fn list_maps(&self) -> StoreResult<Vec<MapSummary>>;

    /// Parse raw JSON bytes as a map and persist it.
    fn upload_map(&self, bytes: &[u8]) -> StoreResult<FloorMap>;
}

/// Serialize a map to pretty JSON bytes, the download counterpart of
/// [`MapStore::upload_map`].
pub fn map_to_json(map: &FloorMap) -> StoreResult<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(map)?)
}

// ── JsonFileStore ─────────────────────────────────────────────────────────────

/// Directory-backed store: `<root>/<id>.json` per map.
///
/// Saves go through a temp file + rename so a failed write never leaves a
/// half-written map behind.
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Open (creating if needed) a store rooted at `root`.
    pub fn open(root: impl Into<PathBuf>) -> StoreResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn map_path(&self, id: &str) -> PathBuf {
        self.root.join(format!("{id}.json"))
    }
}

impl MapStore for JsonFileStore {
    fn load_map(&self, id: &str) -> StoreResult<FloorMap> {
        let path = self.map_path(id);
        let bytes = match fs::read(&path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::MapNotFound(id.to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn save_map(&self, map: &FloorMap) -> StoreResult<FloorMap> {
        let mut stored = map.clone();
        if stored.id.is_none() {
            stored.id = Some(new_map_id());
        }
        let id = stored.id.as_deref().expect("id just assigned");

        let bytes = serde_json::to_vec_pretty(&stored)?;
        let tmp = self.root.join(format!("{id}.json.tmp"));
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, self.map_path(id))?;
        Ok(stored)
    }

    fn list_maps(&self) -> StoreResult<Vec<MapSummary>> {
        let mut out = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().is_none_or(|e| e != "json") {
                continue;
            }
            let map: FloorMap = serde_json::from_slice(&fs::read(&path)?)?;
            let Some(id) = map.id else { continue };
            out.push(MapSummary { id, name: map.name });
        }
        // Directory order is filesystem-dependent; present a stable listing.
        out.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(out)
    }

    fn upload_map(&self, bytes: &[u8]) -> StoreResult<FloorMap> {
        let mut value: serde_json::Value = serde_json::from_slice(bytes)?;
        let obj = value
            .as_object_mut()
            .ok_or_else(|| StoreError::InvalidFormat("top level is not an object".into()))?;

        // The component list is the one field with no sensible default.
        if !obj.get("components").is_some_and(|c| c.is_array()) {
            return Err(StoreError::InvalidFormat(
                "missing \"components\" array".into(),
            ));
        }
        obj.entry("name")
            .or_insert_with(|| serde_json::Value::String("Unnamed Map".into()));
        // Uploaded files carry no storage id; one is assigned on save.
        obj.remove("id");

        let map: FloorMap = serde_json::from_value(value)?;
        self.save_map(&map)
    }
}

/// A fresh 24-hex-char storage id.
fn new_map_id() -> String {
    let mut rng = SmallRng::from_entropy();
    let bytes: [u8; 12] = rng.r#gen();
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
