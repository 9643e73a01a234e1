//! Drop-zone hover tracking.
//!
//! Moving a drag across the sandbox's own children fires `dragenter` on the
//! child before `dragleave` on the parent, so enter/leave do not arrive in
//! balanced pairs. The coordinator counts nesting depth instead of tracking
//! per-node state: the highlight is on while `depth > 0`. The counter is
//! clamped at zero, and a drop forces it back to zero because the matching
//! `dragleave` events may never be delivered.

#[cfg(test)]
#[path = "dragdrop_test.rs"]
mod dragdrop_test;

use crate::catalog::Catalog;
use crate::input::DropEffect;
use crate::render::Renderer;
use crate::sandbox::{EntryId, SandboxController};

/// Result of a drop on the sandbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The payload resolved and a new entry was placed.
    Added(EntryId),
    /// The drop carried no payload.
    EmptyPayload,
    /// The payload named no catalog item.
    UnknownReference,
}

impl DropOutcome {
    #[must_use]
    pub fn entry(self) -> Option<EntryId> {
        match self {
            Self::Added(entry) => Some(entry),
            Self::EmptyPayload | Self::UnknownReference => None,
        }
    }
}

/// Saturating hover counter driving a single highlight flag.
#[derive(Debug, Default)]
pub struct DragDropCoordinator {
    depth: u32,
    highlighted: bool,
}

impl DragDropCoordinator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A drag entered the zone or one of its children.
    pub fn enter<R: Renderer>(&mut self, renderer: &mut R) {
        self.depth = self.depth.saturating_add(1);
        if self.depth == 1 {
            self.set_highlight(true, renderer);
        }
    }

    /// A drag left the zone or one of its children.
    pub fn leave<R: Renderer>(&mut self, renderer: &mut R) {
        if self.depth == 0 {
            return;
        }
        self.depth -= 1;
        if self.depth == 0 {
            self.set_highlight(false, renderer);
        }
    }

    /// A drag is hovering; the zone accepts copies.
    #[must_use]
    pub fn over(&self) -> DropEffect {
        DropEffect::Copy
    }

    /// Handle a drop carrying `payload`, adding the referenced item if known.
    ///
    /// The payload is looked up exactly as published by the drag source.
    pub fn drop<R: Renderer>(
        &mut self,
        payload: &str,
        catalog: &Catalog,
        sandbox: &mut SandboxController,
        renderer: &mut R,
    ) -> DropOutcome {
        self.depth = 0;
        self.set_highlight(false, renderer);

        if payload.is_empty() {
            log::debug!("drop ignored: empty payload");
            return DropOutcome::EmptyPayload;
        }
        let Some(item) = catalog.get_by_id(payload) else {
            log::debug!("drop ignored: unknown item `{payload}`");
            return DropOutcome::UnknownReference;
        };
        DropOutcome::Added(sandbox.add_block(item, renderer))
    }

    fn set_highlight<R: Renderer>(&mut self, active: bool, renderer: &mut R) {
        self.highlighted = active;
        renderer.set_highlight(active);
    }

    // --- Queries ---

    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }
}
