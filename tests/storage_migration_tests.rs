use approx::assert_relative_eq;
use bitcraft_map_editor::storage::{decode_record, detect_shape, RecordShape, RECORD_VERSION};
use bitcraft_map_editor::{
    world_from_yx, Category, CategoryScheme, FileStore, IconType, KeyValueStore, Marker,
    MarkerColor, MarkerId, MarkerStore, MemoryStore,
};
use std::collections::HashSet;
use std::path::PathBuf;

const KEY: &str = "bitcraftMarkers";

fn store_with(payload: &str, scheme: CategoryScheme) -> MarkerStore {
    MarkerStore::new(MemoryStore::with_entry(KEY, payload), KEY, scheme)
}

fn positions_yx(markers: &[Marker]) -> Vec<[f64; 2]> {
    markers.iter().map(Marker::position_yx).collect()
}

#[test]
fn test_scenario_b_legacy_pairs_migrate_with_default_category() {
    let store = store_with("[[10,20],[30,40]]", CategoryScheme::Color);

    let markers = store.load();

    assert_eq!(markers.len(), 2);
    assert_eq!(positions_yx(&markers), vec![[10.0, 20.0], [30.0, 40.0]]);
    assert!(markers
        .iter()
        .all(|m| m.category == Category::Color(MarkerColor::Blue)));
}

#[test]
fn test_scenario_b_in_icon_scheme_defaults_to_cave() {
    let store = store_with("[[10,20],[30,40]]", CategoryScheme::Icon);

    let markers = store.load();

    assert!(markers
        .iter()
        .all(|m| m.category == Category::Icon(IconType::Cave)));
}

#[test]
fn test_migration_keeps_every_legacy_position() {
    let samples = [
        (
            "[[1.5,2.25],[-3,4],[0,0]]",
            vec![[1.5, 2.25], [-3.0, 4.0], [0.0, 0.0]],
        ),
        (
            r##"[{"position":[5,6],"color":"#FF0000"},{"position":[7.5,8.5],"color":"#00FF00"}]"##,
            vec![[5.0, 6.0], [7.5, 8.5]],
        ),
        (
            r#"[{"lat":100,"lng":200,"type":"cave"},{"lat":0.5,"lng":7676,"type":"claim"}]"#,
            vec![[100.0, 200.0], [0.5, 7676.0]],
        ),
    ];

    for scheme in [CategoryScheme::Color, CategoryScheme::Icon] {
        for (payload, expected) in &samples {
            let markers = store_with(payload, scheme).load();
            assert_eq!(&positions_yx(&markers), expected, "Payload: {payload}");
        }
    }
}

#[test]
fn test_color_entries_keep_their_color() {
    let store = store_with(
        r##"[{"position":[5,6],"color":"#ffa500"},{"position":[7,8],"color":"purple"}]"##,
        CategoryScheme::Color,
    );

    let categories: Vec<Category> = store.load().iter().map(|m| m.category).collect();

    assert_eq!(
        categories,
        vec![
            Category::Color(MarkerColor::Orange),
            Category::Color(MarkerColor::Purple)
        ]
    );
}

#[test]
fn test_unknown_category_is_coerced_not_dropped() {
    let store = store_with(
        r#"[{"lat":1,"lng":2,"type":"dragon"},{"lat":3,"lng":4}]"#,
        CategoryScheme::Icon,
    );

    let markers = store.load();

    assert_eq!(markers.len(), 2);
    assert!(markers
        .iter()
        .all(|m| m.category == Category::Icon(IconType::Cave)));
}

#[test]
fn test_corrupt_records_load_as_empty() {
    for payload in ["{broken", "\"text\"", "42", r#"[{"foo":1}]"#, r#"{"version":7,"markers":[]}"#] {
        assert!(
            store_with(payload, CategoryScheme::Color).load().is_empty(),
            "Payload: {payload}"
        );
    }
}

#[test]
fn test_detect_shape_reads_first_element() {
    let value: serde_json::Value =
        serde_json::from_str(r#"[{"lat":1,"lng":2}]"#).expect("gültiges JSON");

    assert_eq!(detect_shape(&value[0]), Some(RecordShape::IconEntry));
}

#[test]
fn test_save_load_roundtrip_is_set_equal() {
    let markers = vec![
        Marker::new(
            MarkerId(4),
            world_from_yx(1.0, 2.0),
            Category::Icon(IconType::Claim),
        ),
        Marker::new(
            MarkerId(9),
            world_from_yx(1.0, 2.0),
            Category::Icon(IconType::Resource),
        ),
        Marker::new(
            MarkerId(1),
            world_from_yx(7675.5, 0.25),
            Category::Icon(IconType::Cave),
        ),
    ];
    let mut store = MarkerStore::new(MemoryStore::new(), KEY, CategoryScheme::Icon);

    store.save(&markers).expect("Speichern sollte klappen");
    let loaded = store.load();

    let ids = |ms: &[Marker]| ms.iter().map(|m| m.id).collect::<HashSet<_>>();
    assert_eq!(ids(&loaded), ids(&markers));
    for marker in &markers {
        let found = loaded
            .iter()
            .find(|m| m.id == marker.id)
            .expect("Marker sollte geladen werden");
        assert_relative_eq!(found.position.x, marker.position.x);
        assert_relative_eq!(found.position.y, marker.position.y);
        assert_eq!(found.category, marker.category);
    }
}

#[test]
fn test_written_record_is_versioned() {
    let backend = MemoryStore::new();
    let mut store = MarkerStore::new(backend.clone(), KEY, CategoryScheme::Color);

    store
        .save(&[Marker::new(
            MarkerId(1),
            world_from_yx(3.0, 4.0),
            Category::Color(MarkerColor::Yellow),
        )])
        .expect("Speichern sollte klappen");

    let raw = backend.raw(KEY).expect("Datensatz sollte existieren");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("gültiges JSON");
    assert_eq!(value["version"], RECORD_VERSION);
    assert_eq!(value["scheme"], "color");
    assert_eq!(value["markers"][0]["color"], "#FFFF00");
    assert_eq!(value["markers"][0]["position"][0].as_f64(), Some(3.0));

    assert_eq!(
        decode_record(&raw, CategoryScheme::Color)
            .expect("Decode")
            .len(),
        1
    );
}

#[test]
fn test_record_of_other_scheme_keeps_positions() {
    let backend = MemoryStore::new();
    let mut icon_store = MarkerStore::new(backend.clone(), KEY, CategoryScheme::Icon);
    icon_store
        .save(&[Marker::new(
            MarkerId(2),
            world_from_yx(11.0, 22.0),
            Category::Icon(IconType::Resource),
        )])
        .expect("Speichern sollte klappen");

    let color_store = MarkerStore::new(backend, KEY, CategoryScheme::Color);
    let markers = color_store.load();

    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].id, MarkerId(2));
    assert_eq!(markers[0].position_yx(), [11.0, 22.0]);
    assert_eq!(markers[0].category, Category::Color(MarkerColor::Blue));
}

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "bitcraft_map_editor_it_{}_{}",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn test_file_store_persists_across_instances() {
    let dir = temp_dir("persist");
    let markers = vec![Marker::new(
        MarkerId(1),
        world_from_yx(100.0, 200.0),
        Category::Icon(IconType::Cave),
    )];

    let mut writer = MarkerStore::new(FileStore::new(&dir), KEY, CategoryScheme::Icon);
    writer.save(&markers).expect("Speichern sollte klappen");
    assert!(dir.join(format!("{KEY}.json")).exists());

    let reader = MarkerStore::new(FileStore::new(&dir), KEY, CategoryScheme::Icon);
    assert_eq!(reader.load(), markers);

    writer.clear().expect("Löschen sollte klappen");
    assert!(!dir.join(format!("{KEY}.json")).exists());
    assert!(reader.load().is_empty());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_file_store_reads_legacy_file() {
    let dir = temp_dir("legacy");
    let mut backend = FileStore::new(&dir);
    backend
        .set(KEY, "[[10,20],[30,40]]")
        .expect("Schreiben sollte klappen");

    let store = MarkerStore::new(backend, KEY, CategoryScheme::Color);

    assert_eq!(
        positions_yx(&store.load()),
        vec![[10.0, 20.0], [30.0, 40.0]]
    );
    let _ = std::fs::remove_dir_all(&dir);
}
