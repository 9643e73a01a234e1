//! Library cards: the interactive representation of catalog items.
//!
//! A card adds its item to the sandbox when activated (click, or `Enter` /
//! `Space` while focused), exports the item id as the drag payload, and
//! asks the renderer for a dragging mark between drag-start and drag-end. Cards never
//! touch the catalog and reach the sandbox only through
//! [`SandboxController::add_block`].

#[cfg(test)]
#[path = "card_test.rs"]
mod card_test;

use crate::catalog::Item;
use crate::consts::DRAG_FORMAT;
use crate::input::{DropEffect, Key};
use crate::render::{NodeId, Renderer};
use crate::sandbox::{EntryId, SandboxController};

/// What a drag source hands to the browser when a drag begins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragStart {
    pub format: &'static str,
    /// The dragged item's id.
    pub data: String,
    pub effect_allowed: DropEffect,
}

/// A rendered, focusable, draggable card for one item.
#[derive(Debug, Clone)]
pub struct LibraryCard {
    node: NodeId,
    item: Item,
}

impl LibraryCard {
    #[must_use]
    pub fn node(&self) -> NodeId {
        self.node
    }

    #[must_use]
    pub fn item(&self) -> &Item {
        &self.item
    }

    /// Add this card's item to the sandbox, once.
    pub fn activate<R: Renderer>(&self, sandbox: &mut SandboxController, renderer: &mut R) -> EntryId {
        sandbox.add_block(&self.item, renderer)
    }

    /// Activate on `Enter` or `Space`; ignore every other key.
    pub fn key_down<R: Renderer>(
        &self,
        key: &Key,
        sandbox: &mut SandboxController,
        renderer: &mut R,
    ) -> Option<EntryId> {
        key.activates().then(|| self.activate(sandbox, renderer))
    }

    /// Begin dragging: mark the card and return the payload to publish.
    pub fn drag_start<R: Renderer>(&self, renderer: &mut R) -> DragStart {
        renderer.set_card_dragging(self.node, true);
        DragStart { format: DRAG_FORMAT, data: self.item.id.clone(), effect_allowed: DropEffect::Copy }
    }

    /// End dragging, whether or not the drop landed.
    pub fn drag_end<R: Renderer>(&self, renderer: &mut R) {
        renderer.set_card_dragging(self.node, false);
    }
}

/// Builds library cards and keeps them in display order.
#[derive(Debug, Default)]
pub struct CardFactory {
    cards: Vec<LibraryCard>,
}

impl CardFactory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Render a card for `item` and return its display index.
    pub fn build_library_card<R: Renderer>(&mut self, item: &Item, renderer: &mut R) -> usize {
        let node = renderer.create_library_card(item);
        self.cards.push(LibraryCard { node, item: item.clone() });
        self.cards.len() - 1
    }

    #[must_use]
    pub fn card(&self, index: usize) -> Option<&LibraryCard> {
        self.cards.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
