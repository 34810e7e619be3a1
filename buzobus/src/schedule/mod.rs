//! The arrival pipeline: filter passages, compute relative minutes,
//! bucket them, and decide whether a notification is due.

mod decision;
mod error;
mod minutes;
mod pipeline;

pub use decision::{DEPARTURE_WINDOW_MINS, Notification, NotifyMode, decide_notification};
pub use error::ScheduleError;
pub use minutes::{RelativeMinutes, TimeBucket};
pub use pipeline::compute_schedule;
