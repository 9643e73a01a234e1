use super::*;
use crate::render::{RecordingRenderer, RenderOp};

fn pump() -> Item {
    Item {
        id: "p1".into(),
        name: "Pump".into(),
        description: "Moves fluid".into(),
        category: "Mechanical".into(),
    }
}

fn built() -> (CardFactory, SandboxController, RecordingRenderer) {
    let mut cards = CardFactory::new();
    let mut renderer = RecordingRenderer::new();
    cards.build_library_card(&pump(), &mut renderer);
    (cards, SandboxController::new(), renderer)
}

// =============================================================
// build_library_card
// =============================================================

#[test]
fn build_renders_card_and_returns_index() {
    let mut cards = CardFactory::new();
    let mut r = RecordingRenderer::new();
    assert_eq!(cards.build_library_card(&pump(), &mut r), 0);
    assert_eq!(cards.len(), 1);
    assert_eq!(r.library_titles(), vec!["Pump"]);
    assert_eq!(cards.card(0).map(LibraryCard::item), Some(&pump()));
}

#[test]
fn build_does_not_touch_sandbox() {
    let (_, sandbox, r) = built();
    assert!(sandbox.is_empty());
    assert!(r.sandbox.is_empty());
    assert_eq!(r.placeholders, 0);
}

#[test]
fn card_node_matches_rendered_node() {
    let (cards, _, r) = built();
    assert_eq!(cards.card(0).map(LibraryCard::node), Some(r.library[0].id));
}

#[test]
fn unknown_card_index_is_none() {
    let (cards, _, _) = built();
    assert!(cards.card(1).is_none());
    assert!(cards.card(7).is_none());
}

// =============================================================
// Activation
// =============================================================

#[test]
fn activate_adds_exactly_one_entry() {
    let (cards, mut sandbox, mut r) = built();
    let card = cards.card(0).unwrap();
    card.activate(&mut sandbox, &mut r);
    assert_eq!(sandbox.len(), 1);
    assert_eq!(sandbox.entries()[0].item, pump());
}

#[test]
fn each_activation_adds_again() {
    let (cards, mut sandbox, mut r) = built();
    let card = cards.card(0).unwrap();
    card.activate(&mut sandbox, &mut r);
    card.activate(&mut sandbox, &mut r);
    card.activate(&mut sandbox, &mut r);
    assert_eq!(sandbox.len(), 3);
}

#[test]
fn enter_and_space_activate() {
    let (cards, mut sandbox, mut r) = built();
    let card = cards.card(0).unwrap();
    assert!(card.key_down(&Key("Enter".into()), &mut sandbox, &mut r).is_some());
    assert!(card.key_down(&Key(" ".into()), &mut sandbox, &mut r).is_some());
    assert_eq!(sandbox.len(), 2);
}

#[test]
fn other_keys_are_ignored() {
    let (cards, mut sandbox, mut r) = built();
    let card = cards.card(0).unwrap();
    assert!(card.key_down(&Key("Tab".into()), &mut sandbox, &mut r).is_none());
    assert!(card.key_down(&Key("Escape".into()), &mut sandbox, &mut r).is_none());
    assert!(sandbox.is_empty());
}

// =============================================================
// Drag
// =============================================================

#[test]
fn drag_start_exports_item_id_as_plain_text() {
    let (cards, _, mut r) = built();
    let start = cards.card(0).map(|c| c.drag_start(&mut r));
    let start = start.unwrap();
    assert_eq!(start.format, "text/plain");
    assert_eq!(start.data, "p1");
    assert_eq!(start.effect_allowed, DropEffect::Copy);
}

#[test]
fn drag_start_marks_card_dragging() {
    let (cards, _, mut r) = built();
    let card = cards.card(0).unwrap();
    card.drag_start(&mut r);
    assert!(r.is_dragging(card.node()));
}

#[test]
fn drag_end_clears_mark_regardless_of_outcome() {
    let (cards, _, mut r) = built();
    let card = cards.card(0).unwrap();
    card.drag_start(&mut r);
    card.drag_end(&mut r);
    assert!(!r.is_dragging(card.node()));
}

#[test]
fn drag_end_without_start_still_clears() {
    let (cards, _, mut r) = built();
    let card = cards.card(0).unwrap();
    card.drag_end(&mut r);
    let node = card.node();
    assert_eq!(r.ops.last(), Some(&RenderOp::SetCardDragging { node, dragging: false }));
}

#[test]
fn drag_does_not_add_to_sandbox() {
    let (cards, sandbox, mut r) = built();
    let card = cards.card(0).unwrap();
    card.drag_start(&mut r);
    card.drag_end(&mut r);
    assert!(sandbox.is_empty());
    assert!(r.sandbox.is_empty());
}
