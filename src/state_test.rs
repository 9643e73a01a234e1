use super::*;

#[test]
fn new_keeps_catalog_order() {
    let state = test_helpers::test_app_state();
    let ids: Vec<&str> = state.catalog.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["cogenerator", "turbo", "heat_pump", "tower_niro"]);
}

#[test]
fn clones_share_the_catalog() {
    let state = test_helpers::test_app_state();
    let clone = state.clone();
    assert!(Arc::ptr_eq(&state.catalog, &clone.catalog));
}

#[test]
fn empty_catalog_is_allowed() {
    let state = AppState::new(Vec::new(), PathBuf::from("web"));
    assert!(state.catalog.is_empty());
}
