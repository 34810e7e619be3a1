//! Passage filtering and schedule computation.

use chrono::NaiveDateTime;
use tracing::info;

use crate::opendata::PassageCollection;

use super::error::ScheduleError;
use super::minutes::RelativeMinutes;

/// Compute the relative-minute schedule for one line and direction.
///
/// Filters the passage features to those whose `libelle` matches
/// `bus_name` and `terminus` matches `direction` (exact, case-sensitive),
/// preserving input order, then converts each estimate into minutes from
/// `now`.
///
/// An empty payload is a valid "no data yet" state and yields an empty
/// schedule. A non-empty payload with no match is a configuration error
/// and carries the distinct routes that were seen.
pub fn compute_schedule(
    passages: &PassageCollection,
    bus_name: &str,
    direction: &str,
    now: NaiveDateTime,
) -> Result<Vec<RelativeMinutes>, ScheduleError> {
    let features = passages.features().ok_or(ScheduleError::MissingFeatures)?;

    info!("Found {} bus times", features.len());

    if features.is_empty() {
        return Ok(Vec::new());
    }

    let mut estimates: Vec<Option<&str>> = Vec::new();
    let mut seen: Vec<(String, String)> = Vec::new();

    for feature in features {
        let Some(properties) = &feature.properties else {
            continue;
        };
        let (Some(libelle), Some(terminus), Some(estimate)) = (
            &properties.libelle,
            &properties.terminus,
            &properties.hor_estime,
        ) else {
            continue;
        };

        let pair = (libelle.clone(), terminus.clone());
        if !seen.contains(&pair) {
            seen.push(pair);
        }

        if libelle != bus_name || terminus != direction {
            continue;
        }

        estimates.push(estimate.as_deref());
    }

    if estimates.is_empty() {
        return Err(if bus_name.is_empty() && direction.is_empty() {
            ScheduleError::RouteNotConfigured { seen }
        } else {
            ScheduleError::RouteNotFound {
                bus: bus_name.to_string(),
                direction: direction.to_string(),
                seen,
            }
        });
    }

    estimates
        .into_iter()
        .map(|estimate| RelativeMinutes::from_estimate(estimate, now))
        .collect()
}
