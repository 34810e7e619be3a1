//! The notification decision: is it time to leave for the stop?

use super::minutes::RelativeMinutes;

/// Width of the departure window, in minutes.
///
/// Notification fires when the next bus is between `walk_time_min` and
/// `walk_time_min + 5` minutes away: leave now and arrive just as the bus
/// does.
pub const DEPARTURE_WINDOW_MINS: i64 = 5;

/// How the CLI flags constrain the decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotifyMode {
    /// Fire when the next bus is inside the walking window.
    #[default]
    Auto,
    /// Fire unconditionally (as long as a next bus exists).
    Force,
    /// Never fire. Takes priority over everything.
    Suppress,
}

/// A notification ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
}

/// Decide whether to notify, based on the earliest arrival only.
///
/// An empty schedule never notifies, whatever the mode: with no arrival
/// there is nothing to announce.
pub fn decide_notification(
    schedule: &[RelativeMinutes],
    stop_name: &str,
    bus_name: &str,
    direction: &str,
    walk_time_min: i64,
    mode: NotifyMode,
) -> Option<Notification> {
    let first = *schedule.first()?;

    let in_window =
        walk_time_min <= first.get() && first.get() < walk_time_min + DEPARTURE_WINDOW_MINS;

    let fire = match mode {
        NotifyMode::Suppress => false,
        NotifyMode::Force => true,
        NotifyMode::Auto => in_window,
    };

    fire.then(|| Notification {
        title: format!("{bus_name} vers {direction} à {stop_name}"),
        message: format!("Prochain bus : {}", first.bucket()),
    })
}
