//! Catalog failures and how they are shown on the page.
//!
//! Only catalog retrieval can fail in a way the user needs to see. Drop
//! misses (empty or unknown payloads) are not errors; see
//! [`crate::dragdrop::DropOutcome`].

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::consts::ERROR_TITLE;
use crate::render::Renderer;

/// Why the catalog could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// The provider answered with a non-success status.
    #[error("catalog request failed with status {status}")]
    ProviderUnavailable { status: u16 },
    /// The request never produced a response.
    #[error("catalog request failed: {0}")]
    Transport(String),
    /// The response body is not an `equipment` list of valid items.
    #[error("malformed catalog response: {0}")]
    MalformedResponse(String),
}

/// A failure artifact ready to be drawn by a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorNotice {
    pub title: String,
    pub message: String,
    pub hint: String,
}

impl ErrorNotice {
    /// Build the notice for `error`, pointing the user at `endpoint`.
    #[must_use]
    pub fn for_catalog(error: &CatalogError, endpoint: &str) -> Self {
        Self {
            title: ERROR_TITLE.to_owned(),
            message: error.to_string(),
            hint: remediation_hint(endpoint),
        }
    }
}

fn remediation_hint(endpoint: &str) -> String {
    format!("Check that the equipment server is running and reachable at {endpoint}.")
}

/// Show `error` on the page. Touches nothing but the renderer.
pub fn render_error<R: Renderer>(error: &CatalogError, endpoint: &str, renderer: &mut R) {
    log::error!("catalog load failed: {error}");
    renderer.render_error(&ErrorNotice::for_catalog(error, endpoint));
}
