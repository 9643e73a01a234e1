use super::*;

fn item(id: &str, name: &str) -> Item {
    Item { id: id.into(), name: name.into(), description: String::new(), category: "Misc".into() }
}

#[test]
fn node_ids_are_unique_across_regions() {
    let mut r = RecordingRenderer::new();
    let a = r.create_library_card(&item("a", "A"));
    let b = r.create_sandbox_entry(&item("a", "A"));
    let c = r.create_sandbox_entry(&item("a", "A"));
    assert_ne!(a, b);
    assert_ne!(b, c);
}

#[test]
fn created_nodes_appear_in_their_region() {
    let mut r = RecordingRenderer::new();
    r.create_library_card(&item("p1", "Pump"));
    r.create_sandbox_entry(&item("t1", "Turbo"));
    assert_eq!(r.library_titles(), vec!["Pump"]);
    assert_eq!(r.sandbox_titles(), vec!["Turbo"]);
}

#[test]
fn remove_node_detaches_only_that_node() {
    let mut r = RecordingRenderer::new();
    let first = r.create_sandbox_entry(&item("p1", "Pump"));
    r.create_sandbox_entry(&item("p1", "Pump"));
    r.remove_node(first);
    assert_eq!(r.sandbox.len(), 1);
    assert_ne!(r.sandbox[0].id, first);
}

#[test]
fn remove_unknown_node_is_harmless() {
    let mut r = RecordingRenderer::new();
    r.create_sandbox_entry(&item("p1", "Pump"));
    r.remove_node(NodeId(999));
    assert_eq!(r.sandbox.len(), 1);
}

#[test]
fn placeholder_count_tracks_show_and_hide() {
    let mut r = RecordingRenderer::new();
    r.show_placeholder();
    assert_eq!(r.placeholders, 1);
    r.hide_placeholder();
    r.hide_placeholder();
    assert_eq!(r.placeholders, 0);
}

#[test]
fn dragging_mark_defaults_to_false() {
    let mut r = RecordingRenderer::new();
    let node = r.create_library_card(&item("p1", "Pump"));
    assert!(!r.is_dragging(node));
    r.set_card_dragging(node, true);
    assert!(r.is_dragging(node));
}

#[test]
fn clear_ops_keeps_page_model() {
    let mut r = RecordingRenderer::new();
    r.create_library_card(&item("p1", "Pump"));
    r.set_highlight(true);
    r.clear_ops();
    assert!(r.ops.is_empty());
    assert_eq!(r.library.len(), 1);
    assert!(r.highlighted);
}
