//! Notification delivery.
//!
//! Delivery is fire-and-forget: the pipeline decides, a [`Notifier`]
//! delivers, and delivery failures are logged but never surfaced.

use tracing::debug;

use crate::schedule::Notification;

/// A sink for notifications.
pub trait Notifier {
    /// Deliver a notification. Must not block and must not fail the caller.
    fn notify(&self, notification: &Notification);
}

/// Desktop notifier backed by `notify-send`.
#[derive(Debug, Clone, Default)]
pub struct DesktopNotifier;

impl Notifier for DesktopNotifier {
    fn notify(&self, notification: &Notification) {
        // Spawn without waiting; the child outliving us is fine, the
        // notification daemon owns the display from here.
        let result = std::process::Command::new("notify-send")
            .arg(&notification.title)
            .arg(&notification.message)
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .spawn();

        if let Err(e) = result {
            debug!("notification delivery failed: {e}");
        }
    }
}

/// Test notifier that records what it was asked to deliver.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    delivered: std::sync::Mutex<Vec<Notification>>,
}

#[cfg(test)]
impl RecordingNotifier {
    pub fn delivered(&self) -> Vec<Notification> {
        self.delivered.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    fn notify(&self, notification: &Notification) {
        self.delivered.lock().unwrap().push(notification.clone());
    }
}
