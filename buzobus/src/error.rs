//! Top-level error type and process exit codes.
//!
//! Every error kind ends the invocation; none are retried. Each kind maps
//! to a distinct exit code so an external scheduler can alert on the
//! difference between "the API is down" and "the configuration is wrong".

use crate::config::ConfigError;
use crate::opendata::OpenDataError;
use crate::schedule::ScheduleError;
use crate::stops::StopError;

/// Exit code for configuration problems and anything unclassified.
pub const EXIT_FAILURE: i32 = 1;
/// Exit code for transport failures (network, non-200 responses).
pub const EXIT_TRANSPORT: i32 = 2;
/// Exit code for structurally malformed API payloads.
pub const EXIT_MISSING_FEATURES: i32 = 3;
/// Exit code when the configured stop name matches nothing.
pub const EXIT_STOP_NOT_FOUND: i32 = 4;
/// Exit code when the configured stop name matches several stops.
pub const EXIT_AMBIGUOUS_STOP: i32 = 5;
/// Exit code when no passage matches the configured line and direction.
pub const EXIT_ROUTE_NOT_FOUND: i32 = 6;

/// Any error that can end an invocation.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    OpenData(#[from] OpenDataError),

    #[error(transparent)]
    Stop(#[from] StopError),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

impl AppError {
    /// The process exit code for this error kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => EXIT_FAILURE,
            Self::OpenData(OpenDataError::Http(_) | OpenDataError::Api { .. }) => EXIT_TRANSPORT,
            Self::OpenData(OpenDataError::Json { .. }) => EXIT_MISSING_FEATURES,
            Self::Stop(StopError::MissingFeatures)
            | Self::Schedule(ScheduleError::MissingFeatures) => EXIT_MISSING_FEATURES,
            Self::Stop(StopError::NotFound { .. }) => EXIT_STOP_NOT_FOUND,
            Self::Stop(StopError::Ambiguous { .. }) => EXIT_AMBIGUOUS_STOP,
            Self::Schedule(
                ScheduleError::RouteNotFound { .. } | ScheduleError::RouteNotConfigured { .. },
            ) => EXIT_ROUTE_NOT_FOUND,
            Self::Schedule(ScheduleError::InvalidTimestamp { .. }) => EXIT_FAILURE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_kind_maps_to_its_exit_code() {
        let err = AppError::Stop(StopError::NotFound {
            name: "Peixotto".to_string(),
        });
        assert_eq!(err.exit_code(), EXIT_STOP_NOT_FOUND);

        let err = AppError::Stop(StopError::Ambiguous {
            name: "Peixotto".to_string(),
            idents: vec!["3001".to_string(), "3099".to_string()],
        });
        assert_eq!(err.exit_code(), EXIT_AMBIGUOUS_STOP);

        let err = AppError::Stop(StopError::MissingFeatures);
        assert_eq!(err.exit_code(), EXIT_MISSING_FEATURES);

        let err = AppError::Schedule(ScheduleError::MissingFeatures);
        assert_eq!(err.exit_code(), EXIT_MISSING_FEATURES);

        let err = AppError::Schedule(ScheduleError::RouteNotFound {
            bus: "Lianes 9".to_string(),
            direction: "Gradignan Beausoleil".to_string(),
            seen: vec![],
        });
        assert_eq!(err.exit_code(), EXIT_ROUTE_NOT_FOUND);

        let err = AppError::Schedule(ScheduleError::RouteNotConfigured { seen: vec![] });
        assert_eq!(err.exit_code(), EXIT_ROUTE_NOT_FOUND);

        let err = AppError::OpenData(OpenDataError::Api {
            status: 503,
            message: String::new(),
        });
        assert_eq!(err.exit_code(), EXIT_TRANSPORT);

        let err = AppError::Schedule(ScheduleError::InvalidTimestamp {
            raw: "10h05".to_string(),
            message: "bad format".to_string(),
        });
        assert_eq!(err.exit_code(), EXIT_FAILURE);
    }
}
