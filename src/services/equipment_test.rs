use std::collections::HashSet;
use std::path::PathBuf;

use super::*;

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("equipment-lab-{}-{name}", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn builtin_has_four_unique_blocks() {
    let items = builtin();
    assert_eq!(items.len(), 4);
    let ids: HashSet<&str> = items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids.len(), 4);
    assert!(items.iter().all(|i| !i.id.is_empty() && !i.name.is_empty()));
}

#[test]
fn builtin_order_is_stable() {
    let ids: Vec<String> = builtin().into_iter().map(|i| i.id).collect();
    assert_eq!(ids, vec!["cogenerator", "turbo", "heat_pump", "tower_niro"]);
}

#[test]
fn load_without_file_uses_builtin() {
    assert_eq!(load(None).unwrap(), builtin());
}

#[test]
fn load_reads_equipment_file() {
    let path = temp_file(
        "valid.json",
        r#"{"equipment":[{"id":"p1","name":"Pump","description":"Moves fluid","category":"Mechanical"}]}"#,
    );
    let items = load(Some(&path)).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Pump");
    std::fs::remove_file(path).unwrap();
}

#[test]
fn missing_file_is_a_read_error() {
    let path = std::env::temp_dir().join("equipment-lab-does-not-exist.json");
    let err = load(Some(&path)).unwrap_err();
    assert!(matches!(err, ConfigError::EquipmentFileRead { .. }));
}

#[test]
fn malformed_file_is_rejected() {
    let path = temp_file("malformed.json", r#"{"blocks":[]}"#);
    let err = load(Some(&path)).unwrap_err();
    assert!(matches!(err, ConfigError::EquipmentFileInvalid { .. }));
    std::fs::remove_file(path).unwrap();
}

#[test]
fn duplicate_ids_in_file_are_rejected() {
    let path = temp_file(
        "dupes.json",
        r#"{"equipment":[
            {"id":"p1","name":"Pump","description":"","category":"M"},
            {"id":"p1","name":"Pump","description":"","category":"M"}
        ]}"#,
    );
    let err = load(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("duplicate id"));
    std::fs::remove_file(path).unwrap();
}
