//! Stop resolution: display name → stable stop identifier.

mod resolve;

pub use resolve::{StopError, resolve_stop};
