//! Stop name resolution over the `SV_ARRET_P` feature list.

use tracing::info;

use crate::opendata::StopCollection;

/// Errors from stop resolution. All of them mean the configured stop name
/// cannot be turned into exactly one identifier, so the invocation stops.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StopError {
    /// The stop payload has no `features` field
    #[error("bad stop payload: missing \"features\"")]
    MissingFeatures,

    /// No stop carries the configured display name
    #[error("stop \"{name}\" not found, check the configured stop name")]
    NotFound { name: String },

    /// Several stops carry the configured display name. The data source
    /// has no tie-break rule; the operator must pin one of the listed
    /// identifiers in the configuration.
    #[error("stop \"{name}\" is ambiguous ({} candidates), pin one of the listed identifiers in the configuration", idents.len())]
    Ambiguous { name: String, idents: Vec<String> },
}

/// Resolve a stop display name to its stable identifier.
///
/// Matching is exact and case-sensitive on `libelle`. Features missing
/// `properties`, `ident` or `libelle` are skipped silently; the open data
/// routinely contains such entries. Exactly one match is required: zero
/// and several are both configuration errors, and the ambiguous case
/// carries every candidate identifier in its payload.
pub fn resolve_stop(stops: &StopCollection, target_name: &str) -> Result<String, StopError> {
    let features = stops.features().ok_or(StopError::MissingFeatures)?;

    info!("Found {} stops", features.len());

    let mut idents: Vec<String> = Vec::new();

    for feature in features {
        let Some(properties) = &feature.properties else {
            continue;
        };
        let (Some(ident), Some(libelle)) = (&properties.ident, &properties.libelle) else {
            continue;
        };

        if libelle == target_name {
            idents.push(ident.clone());
        }
    }

    match idents.len() {
        1 => {
            let ident = idents.remove(0);
            info!("Found stop id = {ident}");
            Ok(ident)
        }
        0 => Err(StopError::NotFound {
            name: target_name.to_string(),
        }),
        _ => Err(StopError::Ambiguous {
            name: target_name.to_string(),
            idents,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opendata::{Feature, FeatureCollection, StopProperties};

    fn stop(ident: &str, libelle: &str) -> Feature<StopProperties> {
        Feature::new(StopProperties {
            ident: Some(ident.to_string()),
            libelle: Some(libelle.to_string()),
        })
    }

    #[test]
    fn resolves_single_match() {
        let stops = FeatureCollection::from_features(vec![
            stop("3001", "Peixotto"),
            stop("3002", "Forum"),
        ]);

        assert_eq!(resolve_stop(&stops, "Peixotto").unwrap(), "3001");
    }

    #[test]
    fn matching_is_exact_and_case_sensitive() {
        let stops = FeatureCollection::from_features(vec![stop("3001", "Peixotto")]);

        assert!(matches!(
            resolve_stop(&stops, "peixotto"),
            Err(StopError::NotFound { .. })
        ));
        assert!(matches!(
            resolve_stop(&stops, "Peix"),
            Err(StopError::NotFound { .. })
        ));
    }

    #[test]
    fn unknown_name_is_not_found() {
        let stops = FeatureCollection::from_features(vec![stop("3001", "Peixotto")]);

        let err = resolve_stop(&stops, "Victoire").unwrap_err();
        assert_eq!(
            err,
            StopError::NotFound {
                name: "Victoire".to_string()
            }
        );
    }

    #[test]
    fn duplicate_names_are_ambiguous_with_all_candidates() {
        // The same display name appears once per direction of travel.
        let stops = FeatureCollection::from_features(vec![
            stop("3001", "Peixotto"),
            stop("3002", "Forum"),
            stop("3099", "Peixotto"),
        ]);

        let err = resolve_stop(&stops, "Peixotto").unwrap_err();
        match err {
            StopError::Ambiguous { name, idents } => {
                assert_eq!(name, "Peixotto");
                assert_eq!(idents, vec!["3001".to_string(), "3099".to_string()]);
            }
            other => panic!("expected Ambiguous, got {other:?}"),
        }
    }

    #[test]
    fn malformed_features_are_skipped() {
        let stops = FeatureCollection::from_features(vec![
            Feature::empty(),
            Feature::new(StopProperties {
                ident: None,
                libelle: Some("Peixotto".to_string()),
            }),
            Feature::new(StopProperties {
                ident: Some("3050".to_string()),
                libelle: None,
            }),
            stop("3001", "Peixotto"),
        ]);

        assert_eq!(resolve_stop(&stops, "Peixotto").unwrap(), "3001");
    }

    #[test]
    fn missing_features_field_is_fatal() {
        let stops: FeatureCollection<StopProperties> = FeatureCollection::without_features();

        assert_eq!(
            resolve_stop(&stops, "Peixotto").unwrap_err(),
            StopError::MissingFeatures
        );
    }

    #[test]
    fn resolution_is_deterministic() {
        let stops = FeatureCollection::from_features(vec![
            stop("3001", "Peixotto"),
            stop("3099", "Peixotto"),
        ]);

        let first = resolve_stop(&stops, "Peixotto").unwrap_err();
        let second = resolve_stop(&stops, "Peixotto").unwrap_err();
        assert_eq!(first, second);
    }
}
