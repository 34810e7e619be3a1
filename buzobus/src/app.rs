//! One invocation of the notifier.
//!
//! Resolve the stop, fetch the passages, compute the schedule, log the
//! timetable, and fire the notification if the decision says so. The
//! process runs exactly one cycle; an external scheduler provides
//! periodicity.

use chrono::Local;
use tracing::info;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::notify::Notifier;
use crate::opendata::OpenDataClient;
use crate::schedule::{NotifyMode, RelativeMinutes, compute_schedule, decide_notification};
use crate::stops::resolve_stop;

/// Run one fetch-filter-notify cycle.
pub async fn run(
    config: &AppConfig,
    mode: NotifyMode,
    client: &OpenDataClient,
    notifier: &dyn Notifier,
) -> Result<(), AppError> {
    let stop_id = if config.stop.id.is_empty() {
        let stops = client.fetch_stops().await?;
        resolve_stop(&stops, &config.stop.name)?
    } else {
        config.stop.id.clone()
    };

    let passages = client.fetch_passages(&stop_id).await?;

    let now = Local::now().naive_local();
    let schedule = compute_schedule(&passages, &config.bus.name, &config.bus.direction, now)?;

    info!("Next bus:");
    for line in timetable_lines(&schedule) {
        info!("{line}");
    }

    let decision = decide_notification(
        &schedule,
        &config.stop.name,
        &config.bus.name,
        &config.bus.direction,
        config.user.walk_time_min,
        mode,
    );

    if let Some(notification) = decision {
        info!("Notifying: {}", notification.message);
        notifier.notify(&notification);
    }

    Ok(())
}

/// Render the timetable as log lines, one per arrival.
fn timetable_lines(schedule: &[RelativeMinutes]) -> Vec<String> {
    if schedule.is_empty() {
        return vec!["- Pas d'information".to_string()];
    }

    schedule
        .iter()
        .map(|minutes| format!("- {}", minutes.bucket()))
        .collect()
}
