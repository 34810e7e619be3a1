//! Application configuration.
//!
//! Loaded once from a JSON file and passed by reference into every
//! function that needs it; there is no ambient configuration state.

use std::path::Path;

use serde::Deserialize;

/// Errors from configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Could not read the configuration file
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// The file is not valid configuration JSON
    #[error("cannot parse config file {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}

/// The full application configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub open_data: OpenDataSection,
    pub stop: StopSection,
    pub bus: BusSection,
    pub user: UserSection,
}

/// Open-data server coordinates.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenDataSection {
    /// Base URL of the GeoJSON server.
    pub geojson_server: String,
    /// Static API key, appended to every request URL.
    pub api_key: String,
}

/// The stop to watch.
#[derive(Debug, Clone, Deserialize)]
pub struct StopSection {
    /// Display name, used for resolution and in notification titles.
    pub name: String,
    /// Pre-resolved stop identifier. Empty means "resolve by name"; pin it
    /// here when the name is ambiguous.
    #[serde(default)]
    pub id: String,
}

/// The bus line and direction to filter to.
#[derive(Debug, Clone, Deserialize)]
pub struct BusSection {
    /// Line display name (`libelle` in the passages feed).
    pub name: String,
    /// Direction, as the terminus display name.
    pub direction: String,
}

/// Per-user tuning.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSection {
    /// Minutes of walking needed to reach the stop. The notification
    /// window starts exactly at this value.
    pub walk_time_min: i64,
}

impl AppConfig {
    /// Load the configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        serde_json::from_str(&contents).map_err(|source| ConfigError::Json {
            path: path.display().to_string(),
            source,
        })
    }
}
