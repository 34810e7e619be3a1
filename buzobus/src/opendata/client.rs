//! Open-data HTTP client.
//!
//! Queries the Bordeaux Métropole GeoJSON server for the stop list and for
//! the estimated passages at one stop. Two endpoints, both authenticated by
//! a key in the query string; no retries and no caching — each invocation
//! of the program fetches fresh data.

use std::path::PathBuf;

use tracing::{debug, info};

use super::dump::dump_response;
use super::error::OpenDataError;
use super::types::{PassageCollection, StopCollection};

/// Dump file name for the raw stop-list response.
const STOPS_DUMP_FILE: &str = "stops.json";

/// Dump file name for the raw passages response.
const PASSAGES_DUMP_FILE: &str = "bus_times.json";

/// Configuration for the open-data client.
#[derive(Debug, Clone)]
pub struct OpenDataConfig {
    /// Base URL of the GeoJSON server
    pub geojson_server: String,
    /// API key, passed as a `key` query parameter
    pub api_key: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Directory for raw-response debug dumps, if any
    pub dump_dir: Option<PathBuf>,
}

impl OpenDataConfig {
    /// Create a new config for the given server and key.
    pub fn new(geojson_server: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            geojson_server: geojson_server.into(),
            api_key: api_key.into(),
            timeout_secs: 30,
            dump_dir: None,
        }
    }

    /// Set a custom request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Enable raw-response dumps into the given directory.
    pub fn with_dump_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dump_dir = Some(dir.into());
        self
    }
}

/// Client for the open-data GeoJSON API.
#[derive(Debug, Clone)]
pub struct OpenDataClient {
    http: reqwest::Client,
    geojson_server: String,
    api_key: String,
    dump_dir: Option<PathBuf>,
}

impl OpenDataClient {
    /// Create a new open-data client.
    pub fn new(config: OpenDataConfig) -> Result<Self, OpenDataError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            geojson_server: config.geojson_server,
            api_key: config.api_key,
            dump_dir: config.dump_dir,
        })
    }

    /// Fetch the full stop list (`SV_ARRET_P` feature layer).
    ///
    /// Only the `ident` and `libelle` attributes are requested; that is all
    /// stop resolution needs.
    pub async fn fetch_stops(&self) -> Result<StopCollection, OpenDataError> {
        let url = format!(
            "{}/features/SV_ARRET_P?key={}&attributes=[\"IDENT\",\"LIBELLE\"]",
            self.geojson_server, self.api_key
        );

        info!("Getting stops");
        self.fetch_collection(&url, STOPS_DUMP_FILE).await
    }

    /// Fetch the estimated passages for one stop.
    pub async fn fetch_passages(&self, stop_id: &str) -> Result<PassageCollection, OpenDataError> {
        let url = format!(
            "{}/process/saeiv_arret_passages?key={}&datainputs={{\"arret_id\":\"{}\"}}&attributes=[\"libelle\",\"hor_estime\",\"terminus\"]",
            self.geojson_server, self.api_key, stop_id
        );

        info!("Getting bus times");
        self.fetch_collection(&url, PASSAGES_DUMP_FILE).await
    }

    /// Fetch a URL and parse the body as a feature collection.
    async fn fetch_collection<P>(
        &self,
        url: &str,
        dump_file: &str,
    ) -> Result<super::types::FeatureCollection<P>, OpenDataError>
    where
        P: serde::de::DeserializeOwned,
    {
        debug!("Reading {url}");

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OpenDataError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        if let Some(dir) = &self.dump_dir {
            dump_response(dir, dump_file, &body);
        }

        serde_json::from_str(&body).map_err(|e| OpenDataError::Json {
            message: e.to_string(),
        })
    }
}
