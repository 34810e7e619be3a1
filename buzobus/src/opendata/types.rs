//! DTOs for the open-data GeoJSON responses.
//!
//! The API wraps everything in a feature collection. Individual features
//! are frequently incomplete (missing `properties`, or missing keys inside
//! them), so every field below is optional; callers decide which absences
//! are fatal and which are skipped.

use serde::{Deserialize, Deserializer};

/// A GeoJSON-style feature collection.
///
/// `features` is kept optional so that a payload lacking the field can be
/// reported as a structural error rather than a serde failure. Absence of
/// the field is always fatal; each consumer raises its own error kind.
#[derive(Debug, Deserialize)]
pub struct FeatureCollection<P> {
    features: Option<Vec<Feature<P>>>,
}

impl<P> FeatureCollection<P> {
    /// Access the feature list, or `None` when the field was absent.
    pub fn features(&self) -> Option<&[Feature<P>]> {
        self.features.as_deref()
    }

    #[cfg(test)]
    pub fn from_features(features: Vec<Feature<P>>) -> Self {
        Self {
            features: Some(features),
        }
    }

    #[cfg(test)]
    pub fn without_features() -> Self {
        Self { features: None }
    }
}

/// One record of a feature collection.
#[derive(Debug, Deserialize)]
pub struct Feature<P> {
    /// Absent on malformed entries; such features are skipped, not errors.
    pub properties: Option<P>,
}

#[cfg(test)]
impl<P> Feature<P> {
    pub fn new(properties: P) -> Self {
        Self {
            properties: Some(properties),
        }
    }

    pub fn empty() -> Self {
        Self { properties: None }
    }
}

/// Properties of a stop feature from `SV_ARRET_P`.
#[derive(Debug, Clone, Deserialize)]
pub struct StopProperties {
    /// Stable stop identifier.
    pub ident: Option<String>,
    /// Display name of the stop.
    pub libelle: Option<String>,
}

/// Properties of a passage feature from `saeiv_arret_passages`.
#[derive(Debug, Clone, Deserialize)]
pub struct PassageProperties {
    /// Bus line display name.
    pub libelle: Option<String>,
    /// Direction, named after the terminus stop.
    pub terminus: Option<String>,
    /// Estimated passage time, ISO-8601 local civil time with seconds.
    ///
    /// Outer `None`: the key is absent and the feature is skipped.
    /// Inner `None`: the API sent an explicit `null`, meaning the bus is
    /// imminent but the exact time is unknown.
    #[serde(default, deserialize_with = "null_is_some_none")]
    pub hor_estime: Option<Option<String>>,
}

/// Deserialize a present-but-possibly-null field into `Some(Option<T>)`,
/// leaving `#[serde(default)]` to produce `None` when the key is absent.
fn null_is_some_none<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Response of the stop-list endpoint.
pub type StopCollection = FeatureCollection<StopProperties>;

/// Response of the passages endpoint.
pub type PassageCollection = FeatureCollection<PassageProperties>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_features_field_is_detectable() {
        let collection: StopCollection =
            serde_json::from_str(r#"{"type":"FeatureCollection"}"#).unwrap();
        assert!(collection.features().is_none());
    }

    #[test]
    fn empty_features_list_is_valid() {
        let collection: PassageCollection = serde_json::from_str(r#"{"features":[]}"#).unwrap();
        assert!(collection.features().unwrap().is_empty());
    }

    #[test]
    fn feature_without_properties_deserializes() {
        let collection: StopCollection =
            serde_json::from_str(r#"{"features":[{"type":"Feature"}]}"#).unwrap();
        let features = collection.features().unwrap();
        assert_eq!(features.len(), 1);
        assert!(features[0].properties.is_none());
    }

    #[test]
    fn hor_estime_null_differs_from_missing() {
        let collection: PassageCollection = serde_json::from_str(
            r#"{"features":[
                {"properties":{"libelle":"Lianes 9","terminus":"Gradignan","hor_estime":null}},
                {"properties":{"libelle":"Lianes 9","terminus":"Gradignan"}}
            ]}"#,
        )
        .unwrap();

        let features = collection.features().unwrap();
        let with_null = features[0].properties.as_ref().unwrap();
        let without_key = features[1].properties.as_ref().unwrap();

        assert_eq!(with_null.hor_estime, Some(None));
        assert_eq!(without_key.hor_estime, None);
    }

    #[test]
    fn hor_estime_value_round_trips() {
        let collection: PassageCollection = serde_json::from_str(
            r#"{"features":[{"properties":{
                "libelle":"Lianes 9",
                "terminus":"Gradignan",
                "hor_estime":"2021-06-04T10:05:00"
            }}]}"#,
        )
        .unwrap();

        let props = collection.features().unwrap()[0].properties.as_ref().unwrap().clone();
        assert_eq!(
            props.hor_estime,
            Some(Some("2021-06-04T10:05:00".to_string()))
        );
    }
}
