//! Input model: raw UI events the host forwards, and the actions it must
//! perform in return.
//!
//! The host translates each DOM event into one [`UiEvent`] and hands it to
//! [`crate::engine::EngineCore::handle`]. Events are applied strictly in
//! delivery order. Anything the core cannot do through the renderer (calling
//! `preventDefault`, touching the drag `DataTransfer`, wiring listeners for a
//! new entry) comes back as an [`Action`].

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::sandbox::EntryId;

/// A keyboard key as reported by the browser (e.g. `"Enter"`, `" "`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    /// Whether this key activates a focused card.
    #[must_use]
    pub fn activates(&self) -> bool {
        matches!(self.0.as_str(), "Enter" | " ")
    }
}

/// Drag operation advertised to the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropEffect {
    #[default]
    Copy,
}

impl DropEffect {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Copy => "copy",
        }
    }
}

/// A UI event, addressed to a library card (by display index), an entry, or
/// the sandbox drop zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    CardClick { card: usize },
    CardKeyDown { card: usize, key: Key },
    CardDragStart { card: usize },
    CardDragEnd { card: usize },
    EntryRemove { entry: EntryId },
    ResetClick,
    SandboxDragEnter,
    SandboxDragOver,
    SandboxDragLeave,
    /// The sandbox received a drop carrying `payload` as plain text.
    SandboxDrop { payload: String },
}

/// Side effects for the host to perform after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Call `preventDefault()` on the triggering event.
    PreventDefault,
    /// Store `data` on the drag under `format`.
    SetDragData { format: &'static str, data: String },
    SetEffectAllowed(DropEffect),
    SetDropEffect(DropEffect),
    /// Clear the drag data after a consumed drop.
    ClearDragData,
    /// A new entry was rendered; its remove control needs wiring.
    EntryAdded { entry: EntryId },
}
