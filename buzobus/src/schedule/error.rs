//! Arrival pipeline error types.

/// Errors from the arrival pipeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// The passages payload has no `features` field
    #[error("bad passages payload: missing \"features\"")]
    MissingFeatures,

    /// Passages exist at this stop, but none match the configured line and
    /// direction. `seen` lists the distinct `(libelle, terminus)` pairs
    /// present in the payload, for the operator to correct the config.
    #[error("bus \"{bus}\" towards \"{direction}\" not found, check the configured bus name and direction")]
    RouteNotFound {
        bus: String,
        direction: String,
        seen: Vec<(String, String)>,
    },

    /// Neither the bus name nor the direction is configured.
    #[error("no bus name or direction configured, nothing to match passages against")]
    RouteNotConfigured { seen: Vec<(String, String)> },

    /// An estimate could not be parsed as "YYYY-MM-DDTHH:MM:SS"
    #[error("invalid estimated time \"{raw}\": {message}")]
    InvalidTimestamp { raw: String, message: String },
}

impl ScheduleError {
    /// The diagnostic `(libelle, terminus)` listing, when the error
    /// carries one.
    pub fn seen_routes(&self) -> Option<&[(String, String)]> {
        match self {
            Self::RouteNotFound { seen, .. } | Self::RouteNotConfigured { seen } => Some(seen),
            _ => None,
        }
    }
}
