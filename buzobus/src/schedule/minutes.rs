//! Relative-minute arithmetic and user-facing time buckets.
//!
//! The passages endpoint provides estimates as "YYYY-MM-DDTHH:MM:SS"
//! strings in local civil time, or an explicit `null` when the bus is
//! imminent. Everything here takes "now" as a parameter so that results
//! are deterministic under test.

use std::fmt;

use chrono::NaiveDateTime;

use super::error::ScheduleError;

/// Format of the `hor_estime` timestamps.
const ESTIMATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Whole minutes between "now" and an estimated passage.
///
/// Never negative: an estimate at or before "now" clamps to zero, since an
/// already-passed scheduled time signals imminent arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RelativeMinutes(i64);

impl RelativeMinutes {
    /// Whole minutes from `now` until `at`, floored, clamped to zero.
    pub fn between(at: NaiveDateTime, now: NaiveDateTime) -> Self {
        let seconds = at.signed_duration_since(now).num_seconds().max(0);
        Self(seconds / 60)
    }

    /// Convert an optional raw estimate into relative minutes.
    ///
    /// A `null` estimate means "imminent, exact time unknown" and maps to
    /// zero without a parse attempt.
    pub fn from_estimate(
        estimate: Option<&str>,
        now: NaiveDateTime,
    ) -> Result<Self, ScheduleError> {
        match estimate {
            None => Ok(Self(0)),
            Some(raw) => {
                let at = NaiveDateTime::parse_from_str(raw, ESTIMATE_FORMAT).map_err(|e| {
                    ScheduleError::InvalidTimestamp {
                        raw: raw.to_string(),
                        message: e.to_string(),
                    }
                })?;
                Ok(Self::between(at, now))
            }
        }
    }

    /// The minute count.
    pub fn get(self) -> i64 {
        self.0
    }

    /// Classify into the user-facing bucket.
    pub fn bucket(self) -> TimeBucket {
        match self.0 {
            0 => TimeBucket::Imminent,
            m if m >= 60 => TimeBucket::BeyondHour,
            m => TimeBucket::WithinHour(m),
        }
    }
}

/// User-facing classification of a relative minute count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeBucket {
    /// The bus is due now (or the estimate has already passed).
    Imminent,
    /// Due within the hour, with the minute count.
    WithinHour(i64),
    /// An hour or more away.
    BeyondHour,
}

impl fmt::Display for TimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Imminent => write!(f, "Proche"),
            Self::WithinHour(minutes) => write!(f, "{minutes:>2} min"),
            Self::BeyondHour => write!(f, "Plus d'une heure"),
        }
    }
}
