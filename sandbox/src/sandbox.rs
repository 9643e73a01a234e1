//! The sandbox: the user's ordered working set of placed entries.
//!
//! Entries are not deduplicated. Adding the same item twice yields two
//! independent entries, each removable on its own through its [`EntryId`].
//! The empty-state placeholder is visible exactly when there are no entries.

#[cfg(test)]
#[path = "sandbox_test.rs"]
mod sandbox_test;

use crate::catalog::Item;
use crate::render::{NodeId, Renderer};

/// Handle to one placed entry. Never reused within a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub u64);

/// One placed occurrence of an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SandboxEntry {
    pub id: EntryId,
    /// Visual node created for this entry.
    pub node: NodeId,
    pub item: Item,
}

/// Owns the placed entries and keeps the placeholder in step with them.
#[derive(Debug, Default)]
pub struct SandboxController {
    entries: Vec<SandboxEntry>,
    placeholder_visible: bool,
    next_entry: u64,
}

impl SandboxController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new entry for `item` and render it.
    pub fn add_block<R: Renderer>(&mut self, item: &Item, renderer: &mut R) -> EntryId {
        self.hide_empty_placeholder(renderer);

        self.next_entry += 1;
        let id = EntryId(self.next_entry);
        let node = renderer.create_sandbox_entry(item);
        self.entries.push(SandboxEntry { id, node, item: item.clone() });
        log::debug!("added {} as entry {} ({} placed)", item.id, id.0, self.entries.len());
        id
    }

    /// Remove exactly the referenced entry.
    ///
    /// Returns `false` if the entry is not (or no longer) in the sandbox.
    pub fn remove_entry<R: Renderer>(&mut self, entry: EntryId, renderer: &mut R) -> bool {
        let Some(pos) = self.entries.iter().position(|e| e.id == entry) else {
            log::debug!("entry {} already gone", entry.0);
            return false;
        };
        let removed = self.entries.remove(pos);
        renderer.remove_node(removed.node);

        if self.entries.is_empty() {
            self.show_empty_placeholder(renderer);
        }
        true
    }

    /// Drop every entry and show the placeholder, even if already empty.
    pub fn reset<R: Renderer>(&mut self, renderer: &mut R) {
        for entry in self.entries.drain(..) {
            renderer.remove_node(entry.node);
        }
        self.show_empty_placeholder(renderer);
    }

    /// Show the placeholder unless it is already showing.
    pub fn show_empty_placeholder<R: Renderer>(&mut self, renderer: &mut R) {
        if self.placeholder_visible {
            return;
        }
        renderer.show_placeholder();
        self.placeholder_visible = true;
    }

    /// Hide the placeholder if it is showing.
    pub fn hide_empty_placeholder<R: Renderer>(&mut self, renderer: &mut R) {
        if !self.placeholder_visible {
            return;
        }
        renderer.hide_placeholder();
        self.placeholder_visible = false;
    }

    // --- Queries ---

    /// Placed entries in display order.
    #[must_use]
    pub fn entries(&self) -> &[SandboxEntry] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, entry: EntryId) -> Option<&SandboxEntry> {
        self.entries.iter().find(|e| e.id == entry)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn placeholder_visible(&self) -> bool {
        self.placeholder_visible
    }
}
