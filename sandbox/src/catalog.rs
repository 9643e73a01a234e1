//! Equipment items and the catalog they are loaded into.
//!
//! The catalog is filled exactly once per page lifetime from a
//! [`CatalogProvider`] and is read-only afterwards. Cards and the drop handler
//! resolve item ids through [`Catalog::get_by_id`].

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, render_error};
use crate::provider::CatalogProvider;
use crate::render::Renderer;

/// A piece of equipment that can be placed in the sandbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Stable, unique, non-empty identifier. Also the drag payload.
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
}

/// Body returned by the catalog endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentResponse {
    pub equipment: Vec<Item>,
}

/// Decode and validate a catalog response body.
///
/// # Errors
///
/// Returns [`CatalogError::MalformedResponse`] if the body is not JSON, has
/// no `equipment` list, or contains an empty or repeated id.
pub fn parse_equipment(body: &str) -> Result<Vec<Item>, CatalogError> {
    let response: EquipmentResponse =
        serde_json::from_str(body).map_err(|e| CatalogError::MalformedResponse(e.to_string()))?;
    validate(&response.equipment)?;
    Ok(response.equipment)
}

fn validate(items: &[Item]) -> Result<(), CatalogError> {
    let mut seen = HashMap::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        if item.id.is_empty() {
            return Err(CatalogError::MalformedResponse(format!("item {index} has an empty id")));
        }
        if let Some(first) = seen.insert(item.id.as_str(), index) {
            return Err(CatalogError::MalformedResponse(format!(
                "duplicate id `{}` at items {first} and {index}",
                item.id
            )));
        }
    }
    Ok(())
}

/// Where the catalog is in its one-shot lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogStatus {
    #[default]
    Unloaded,
    Loaded,
    /// Terminal: the load failed and the catalog stays empty.
    Failed,
}

/// The loaded, read-only set of available items.
#[derive(Debug, Default)]
pub struct Catalog {
    items: Vec<Item>,
    index: HashMap<String, usize>,
    status: CatalogStatus,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the item list from `provider` and install it.
    ///
    /// Returns the number of items loaded; zero means the caller must not
    /// render a library. On failure the error is shown through `renderer`.
    pub async fn load<P, R>(&mut self, provider: &P, renderer: &mut R) -> usize
    where
        P: CatalogProvider,
        R: Renderer,
    {
        if self.status != CatalogStatus::Unloaded {
            log::warn!("catalog already {:?}; ignoring reload", self.status);
            return self.len();
        }
        let result = provider.fetch().await;
        self.install(result, provider.endpoint(), renderer)
    }

    /// Install the outcome of a retrieval performed by the caller.
    ///
    /// Same contract as [`Catalog::load`]; used by hosts that must not keep
    /// the catalog borrowed while the request is in flight.
    pub fn install<R: Renderer>(
        &mut self,
        result: Result<Vec<Item>, CatalogError>,
        endpoint: &str,
        renderer: &mut R,
    ) -> usize {
        if self.status != CatalogStatus::Unloaded {
            log::warn!("catalog already {:?}; ignoring reload", self.status);
            return self.len();
        }
        match result.and_then(|items| validate(&items).map(|()| items)) {
            Ok(items) => {
                self.index = items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| (item.id.clone(), i))
                    .collect();
                self.items = items;
                self.status = CatalogStatus::Loaded;
                log::info!("catalog loaded with {} items", self.items.len());
                self.items.len()
            }
            Err(error) => {
                self.status = CatalogStatus::Failed;
                render_error(&error, endpoint, renderer);
                0
            }
        }
    }

    /// Look up an item by id. Unknown and empty ids yield `None`.
    #[must_use]
    pub fn get_by_id(&self, id: &str) -> Option<&Item> {
        self.index.get(id).and_then(|&i| self.items.get(i))
    }

    /// Items in the order the provider returned them.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn status(&self) -> CatalogStatus {
        self.status
    }
}
