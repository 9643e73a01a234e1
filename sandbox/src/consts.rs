//! Shared constants for the sandbox crate.

// ── Catalog ─────────────────────────────────────────────────────

/// Catalog endpoint used when the page does not configure one.
pub const DEFAULT_CATALOG_ENDPOINT: &str = "/equipment";

/// Address of a locally running catalog server.
pub const LOCAL_CATALOG_ENDPOINT: &str = "http://127.0.0.1:8000/equipment";

// ── Drag and drop ───────────────────────────────────────────────

/// Data format the dragged item id travels under.
pub const DRAG_FORMAT: &str = "text/plain";

// ── DOM ─────────────────────────────────────────────────────────

pub const LIBRARY_ID: &str = "equipment-list";
pub const SANDBOX_ID: &str = "sandbox-area";
pub const RESET_BUTTON_ID: &str = "reset-sandbox";
pub const PLACEHOLDER_ID: &str = "sandbox-empty-message";

/// Attribute on the library element that overrides the catalog endpoint.
pub const ENDPOINT_ATTRIBUTE: &str = "data-catalog-endpoint";

/// Attribute carrying the item id on cards and entries.
pub const BLOCK_ID_ATTRIBUTE: &str = "data-block-id";

pub const CARD_CLASS: &str = "equipment-card";
pub const CATEGORY_CLASS: &str = "equipment-category";
pub const ENTRY_CLASS: &str = "sandbox-block";
pub const PLACEHOLDER_CLASS: &str = "sandbox-empty";
pub const ERROR_CLASS: &str = "equipment-card error-card";
pub const DRAGGING_CLASS: &str = "dragging";
pub const DRAG_OVER_CLASS: &str = "drag-over";

// ── Copy ────────────────────────────────────────────────────────

pub const PLACEHOLDER_TEXT: &str =
    "No blocks yet. Drag an item from the library (or click it) to get started.";
pub const REMOVE_LABEL: &str = "Remove";
pub const ERROR_TITLE: &str = "Failed to load equipment";
