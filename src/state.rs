//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! catalog is resolved once at startup and never changes, so it is shared
//! read-only behind an `Arc` without locking.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::path::PathBuf;
use std::sync::Arc;

use sandbox::catalog::Item;

/// Shared application state. Clone is required by Axum; fields are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// Equipment served by `GET /equipment`, in display order.
    pub catalog: Arc<[Item]>,
    /// Static site root.
    pub web_dir: PathBuf,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: Vec<Item>, web_dir: PathBuf) -> Self {
        Self { catalog: catalog.into(), web_dir }
    }
}
