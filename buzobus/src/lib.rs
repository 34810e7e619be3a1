//! Bus arrival notifier for the Bordeaux Métropole open-data network.
//!
//! One invocation fetches the estimated passages for a configured stop,
//! filters them to a single line and direction, and fires a desktop
//! notification when the next bus falls inside the user's walking window.

pub mod app;
pub mod config;
pub mod error;
pub mod notify;
pub mod opendata;
pub mod schedule;
pub mod stops;
