//! Equipment catalog source.
//!
//! The catalog is fixed for the lifetime of the process: either the built-in
//! list or the contents of `EQUIPMENT_FILE`, validated with the same rules the
//! browser applies when it loads the list.

#[cfg(test)]
#[path = "equipment_test.rs"]
mod equipment_test;

use std::path::Path;

use sandbox::catalog::{Item, parse_equipment};

use crate::config::ConfigError;

/// Resolve the catalog to serve.
///
/// # Errors
///
/// Returns an error if `file` is set but cannot be read or is not a valid
/// `{"equipment": [...]}` document.
pub fn load(file: Option<&Path>) -> Result<Vec<Item>, ConfigError> {
    match file {
        Some(path) => from_file(path),
        None => Ok(builtin()),
    }
}

/// Read and validate an equipment file.
///
/// # Errors
///
/// See [`load`].
pub fn from_file(path: &Path) -> Result<Vec<Item>, ConfigError> {
    let body = std::fs::read_to_string(path)
        .map_err(|source| ConfigError::EquipmentFileRead { path: path.to_path_buf(), source })?;
    parse_equipment(&body).map_err(|source| ConfigError::EquipmentFileInvalid { path: path.to_path_buf(), source })
}

/// The built-in equipment blocks.
#[must_use]
pub fn builtin() -> Vec<Item> {
    [
        (
            "cogenerator",
            "Cogenerator",
            "Produces heat and electricity at the same time to improve energy efficiency.",
            "Thermal",
        ),
        (
            "turbo",
            "Turbo",
            "Raises the pressure of a fluid to improve machine performance.",
            "Mechanical",
        ),
        (
            "heat_pump",
            "Heat pump",
            "Transfers thermal energy from one medium to another to heat or cool the installation.",
            "Thermal",
        ),
        (
            "tower_niro",
            "Niro tower",
            "Cools process fluids through exchange with outside air.",
            "Cooling",
        ),
    ]
    .into_iter()
    .map(|(id, name, description, category)| Item {
        id: id.to_owned(),
        name: name.to_owned(),
        description: description.to_owned(),
        category: category.to_owned(),
    })
    .collect()
}
