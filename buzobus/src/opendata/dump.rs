//! On-disk dumps of raw API responses, for debugging.
//!
//! Dumps are best-effort: a failure to write one is logged and never
//! interferes with the invocation.

use std::path::Path;

use tracing::{debug, warn};

/// Pretty-print a raw JSON body into `dir/filename`.
///
/// Creates the directory if needed. A body that is not valid JSON is
/// written verbatim so that whatever the server sent can be inspected.
pub fn dump_response(dir: &Path, filename: &str, body: &str) {
    let pretty = match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| body.to_string()),
        Err(_) => body.to_string(),
    };

    if let Err(e) = std::fs::create_dir_all(dir) {
        warn!("could not create dump directory {}: {e}", dir.display());
        return;
    }

    let path = dir.join(filename);
    match std::fs::write(&path, pretty) {
        Ok(()) => debug!("dumped response to {}", path.display()),
        Err(e) => warn!("could not write dump file {}: {e}", path.display()),
    }
}
