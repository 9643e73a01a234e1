//! Renderer capability.
//!
//! The controller, coordinator, and card factory describe visual changes in
//! terms of this trait and never hold DOM handles themselves. The browser
//! implementation lives in `dom`; [`RecordingRenderer`] keeps an in-memory
//! model of the page plus a log of every call, which is what the tests read.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::collections::HashMap;

use crate::catalog::Item;
use crate::error::ErrorNotice;

/// Opaque handle to a visual node owned by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

/// Visual operations the interaction core needs.
pub trait Renderer {
    /// Append a card for `item` to the library region.
    fn create_library_card(&mut self, item: &Item) -> NodeId;
    /// Append an entry for `item`, with its remove control, to the sandbox region.
    fn create_sandbox_entry(&mut self, item: &Item) -> NodeId;
    /// Detach a node previously returned by this renderer. Unknown ids are ignored.
    fn remove_node(&mut self, node: NodeId);
    /// Turn the drop-zone highlight on or off.
    fn set_highlight(&mut self, active: bool);
    /// Mark or unmark a library card as being dragged.
    fn set_card_dragging(&mut self, node: NodeId, dragging: bool);
    /// Insert the empty-state placeholder into the sandbox region.
    fn show_placeholder(&mut self);
    /// Remove the empty-state placeholder from the sandbox region.
    fn hide_placeholder(&mut self);
    /// Append a failure artifact to the library region.
    fn render_error(&mut self, notice: &ErrorNotice);
}

/// One call made against a [`RecordingRenderer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOp {
    CreateLibraryCard { node: NodeId, item_id: String },
    CreateSandboxEntry { node: NodeId, item_id: String },
    RemoveNode(NodeId),
    SetHighlight(bool),
    SetCardDragging { node: NodeId, dragging: bool },
    ShowPlaceholder,
    HidePlaceholder,
    RenderError(ErrorNotice),
}

/// A visual node in the recorded page model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedNode {
    pub id: NodeId,
    /// Item id the node was created for.
    pub item_id: String,
    /// Text shown as the node's title.
    pub title: String,
}

/// Renderer that records calls and mirrors the page structure in memory.
///
/// The placeholder is modelled as a count so that a double insert would be
/// visible to assertions instead of silently collapsing.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub ops: Vec<RenderOp>,
    pub library: Vec<RecordedNode>,
    pub sandbox: Vec<RecordedNode>,
    pub placeholders: usize,
    pub highlighted: bool,
    pub dragging: HashMap<NodeId, bool>,
    pub errors: Vec<ErrorNotice>,
    next_node: u64,
}

impl RecordingRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate(&mut self) -> NodeId {
        self.next_node += 1;
        NodeId(self.next_node)
    }

    /// Titles of the sandbox entries, in display order.
    #[must_use]
    pub fn sandbox_titles(&self) -> Vec<&str> {
        self.sandbox.iter().map(|n| n.title.as_str()).collect()
    }

    /// Titles of the library cards, in display order.
    #[must_use]
    pub fn library_titles(&self) -> Vec<&str> {
        self.library.iter().map(|n| n.title.as_str()).collect()
    }

    /// Whether `node` currently carries the dragging mark.
    #[must_use]
    pub fn is_dragging(&self, node: NodeId) -> bool {
        self.dragging.get(&node).copied().unwrap_or(false)
    }

    /// Forget the call log while keeping the page model.
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }
}

impl Renderer for RecordingRenderer {
    fn create_library_card(&mut self, item: &Item) -> NodeId {
        let id = self.allocate();
        self.library.push(RecordedNode { id, item_id: item.id.clone(), title: item.name.clone() });
        self.ops.push(RenderOp::CreateLibraryCard { node: id, item_id: item.id.clone() });
        id
    }

    fn create_sandbox_entry(&mut self, item: &Item) -> NodeId {
        let id = self.allocate();
        self.sandbox.push(RecordedNode { id, item_id: item.id.clone(), title: item.name.clone() });
        self.ops.push(RenderOp::CreateSandboxEntry { node: id, item_id: item.id.clone() });
        id
    }

    fn remove_node(&mut self, node: NodeId) {
        self.library.retain(|n| n.id != node);
        self.sandbox.retain(|n| n.id != node);
        self.dragging.remove(&node);
        self.ops.push(RenderOp::RemoveNode(node));
    }

    fn set_highlight(&mut self, active: bool) {
        self.highlighted = active;
        self.ops.push(RenderOp::SetHighlight(active));
    }

    fn set_card_dragging(&mut self, node: NodeId, dragging: bool) {
        self.dragging.insert(node, dragging);
        self.ops.push(RenderOp::SetCardDragging { node, dragging });
    }

    fn show_placeholder(&mut self) {
        self.placeholders += 1;
        self.ops.push(RenderOp::ShowPlaceholder);
    }

    fn hide_placeholder(&mut self) {
        self.placeholders = self.placeholders.saturating_sub(1);
        self.ops.push(RenderOp::HidePlaceholder);
    }

    fn render_error(&mut self, notice: &ErrorNotice) {
        self.errors.push(notice.clone());
        self.ops.push(RenderOp::RenderError(notice.clone()));
    }
}
