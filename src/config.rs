//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

use sandbox::error::CatalogError;

pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT `{0}`")]
    InvalidPort(String),
    #[error("cannot read equipment file {path}: {source}")]
    EquipmentFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid equipment file {path}: {source}")]
    EquipmentFileInvalid {
        path: PathBuf,
        #[source]
        source: CatalogError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory holding `index.html` and the compiled `pkg/` bundle.
    pub web_dir: PathBuf,
    /// Optional JSON file replacing the built-in equipment list.
    pub equipment_file: Option<PathBuf>,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 8000
    /// - `WEB_DIR`: default `<crate>/web`
    /// - `EQUIPMENT_FILE`: built-in equipment list when absent
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is not a port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`], reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is not a port number.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_port(lookup("PORT").as_deref())?;
        let web_dir = non_empty(lookup("WEB_DIR"))
            .map_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("web"), PathBuf::from);
        let equipment_file = non_empty(lookup("EQUIPMENT_FILE")).map(PathBuf::from);
        Ok(Self { port, web_dir, equipment_file })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(v) => v.parse::<u16>().map_err(|_| ConfigError::InvalidPort(v.to_owned())),
    }
}
