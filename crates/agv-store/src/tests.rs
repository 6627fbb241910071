//! Unit tests for agv-store.

#[cfg(test)]
mod capacity {
    use std::io::Cursor;

    use agv_core::{CapacityLimit, ComponentKind};

    use crate::{load_capacity_reader, StoreError};

    const TABLE: &str = "\
component,max\n\
Robot,13\n\
Shelf,26\n\
Station,10\n\
Charging,6\n\
Disable,unbounded\n\
";

    #[test]
    fn loads_reference_table() {
        let cfg = load_capacity_reader(Cursor::new(TABLE)).unwrap();
        assert_eq!(cfg.limit_for(ComponentKind::Robot), CapacityLimit::Bounded(13));
        assert_eq!(cfg.limit_for(ComponentKind::Shelf), CapacityLimit::Bounded(26));
        assert_eq!(cfg.limit_for(ComponentKind::Station), CapacityLimit::Bounded(10));
        assert_eq!(cfg.limit_for(ComponentKind::Charging), CapacityLimit::Bounded(6));
        assert_eq!(cfg.limit_for(ComponentKind::Disable), CapacityLimit::Unbounded);
    }

    #[test]
    fn unknown_kind_is_a_parse_error() {
        let err = load_capacity_reader(Cursor::new("component,max\nConveyor,5\n")).unwrap_err();
        assert!(matches!(err, StoreError::Parse(_)), "{err}");
    }

    #[test]
    fn invalid_max_is_a_parse_error() {
        let err = load_capacity_reader(Cursor::new("component,max\nRobot,lots\n")).unwrap_err();
        assert!(matches!(err, StoreError::Parse(_)), "{err}");
    }
}

#[cfg(test)]
mod wire {
    use agv_core::{Cell, Component, ComponentKind, FloorMap, GridSpec};

    #[test]
    fn component_uses_type_field() {
        let c = Component::new(ComponentKind::Robot, Cell::new(5, 5));
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["type"], "Robot");
        assert_eq!(json["row"], 5);
        assert_eq!(json["id"], "Robot-5-5");
    }

    #[test]
    fn map_flattens_grid_dimensions() {
        let map = FloorMap::new("Floor A", GridSpec::new(20, 20));
        let json = serde_json::to_value(&map).unwrap();
        // rows/cols sit at the top level, matching the historical documents.
        assert_eq!(json["rows"], 20);
        assert_eq!(json["cols"], 20);
        assert_eq!(json["name"], "Floor A");
    }

    #[test]
    fn historical_document_parses() {
        let doc = r#"{
            "id": "64f0c2a1b7e4d90012345678",
            "name": "Floor A",
            "rows": 20,
            "cols": 20,
            "components": [
                { "id": "Robot-5-5", "type": "Robot", "row": 5, "col": 5 },
                { "id": "Disable-0-0", "type": "Disable", "row": 0, "col": 0 }
            ]
        }"#;
        let map: FloorMap = serde_json::from_str(doc).unwrap();
        assert_eq!(map.grid, GridSpec::new(20, 20));
        assert_eq!(map.components.len(), 2);
        assert_eq!(map.components[0].kind, ComponentKind::Robot);
    }
}

#[cfg(test)]
mod file_store {
    use agv_core::{Cell, Component, ComponentKind, FloorMap, GridSpec};

    use crate::{map_to_json, JsonFileStore, MapStore, StoreError};

    fn sample_map(name: &str) -> FloorMap {
        let mut map = FloorMap::new(name, GridSpec::new(20, 20));
        map.components.push(Component::new(ComponentKind::Robot, Cell::new(5, 5)));
        map.components.push(Component::new(ComponentKind::Shelf, Cell::new(6, 6)));
        map
    }

    #[test]
    fn save_assigns_id_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();

        let saved = store.save_map(&sample_map("Floor A")).unwrap();
        let id = saved.id.clone().expect("save assigns an id");

        let loaded = store.load_map(&id).unwrap();
        assert_eq!(loaded.name, "Floor A");
        assert_eq!(loaded.components, saved.components);
    }

    #[test]
    fn save_preserves_existing_id() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();

        let mut map = sample_map("Floor A");
        map.id = Some("fixed-id".into());
        let saved = store.save_map(&map).unwrap();
        assert_eq!(saved.id.as_deref(), Some("fixed-id"));
        assert!(store.load_map("fixed-id").is_ok());
    }

    #[test]
    fn load_unknown_id_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();
        assert!(matches!(
            store.load_map("missing"),
            Err(StoreError::MapNotFound(_))
        ));
    }

    #[test]
    fn list_returns_all_saved_maps() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();

        store.save_map(&sample_map("B Hall")).unwrap();
        store.save_map(&sample_map("A Hall")).unwrap();

        let listing = store.list_maps().unwrap();
        let names: Vec<_> = listing.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["A Hall", "B Hall"], "sorted by name");
    }

    #[test]
    fn upload_parses_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();

        let bytes = map_to_json(&sample_map("Uploaded")).unwrap();
        let uploaded = store.upload_map(&bytes).unwrap();
        assert!(uploaded.id.is_some(), "upload assigns a fresh id");
        assert_eq!(uploaded.components.len(), 2);
        assert_eq!(store.list_maps().unwrap().len(), 1);
    }

    #[test]
    fn upload_defaults_missing_name() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();
        let uploaded = store
            .upload_map(br#"{"rows": 10, "cols": 10, "components": []}"#)
            .unwrap();
        assert_eq!(uploaded.name, "Unnamed Map");
    }

    #[test]
    fn upload_without_components_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();
        let err = store
            .upload_map(br#"{"name": "x", "rows": 10, "cols": 10}"#)
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidFormat(_)), "{err}");
        assert!(store.list_maps().unwrap().is_empty(), "nothing persisted");
    }
}

#[cfg(test)]
mod dispatch {
    use crate::{DispatchMode, OrderCodeGen};

    #[test]
    fn mode_wire_strings() {
        assert_eq!(
            serde_json::to_value(DispatchMode::LoadBalanced).unwrap(),
            "load_balanced"
        );
        assert_eq!(
            serde_json::from_str::<DispatchMode>("\"proximity\"").unwrap(),
            DispatchMode::Proximity
        );
        assert_eq!(DispatchMode::Energy.as_str(), "energy");
    }

    #[test]
    fn order_codes_are_eight_alphanumerics() {
        let mut codegen = OrderCodeGen::new(7);
        for _ in 0..32 {
            let code = codegen.next_code();
            assert_eq!(code.len(), 8);
            assert!(code.bytes().all(|b| b.is_ascii_uppercase() || b.is_ascii_digit()));
        }
    }

    #[test]
    fn order_codes_deterministic_per_seed() {
        let a: Vec<_> = {
            let mut g = OrderCodeGen::new(42);
            (0..4).map(|_| g.next_code()).collect()
        };
        let b: Vec<_> = {
            let mut g = OrderCodeGen::new(42);
            (0..4).map(|_| g.next_code()).collect()
        };
        assert_eq!(a, b);
    }
}
