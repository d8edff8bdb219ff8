//! Lifecycle events shared by the library and the CLI.

use tracing::{error, info, warn};

use crate::cookie::DecodeError;
use crate::errors::WebUiError;

pub fn log_app_startup() {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION")
    );
}

pub fn log_app_shutdown() {
    info!(event = "core.app.shutdown_started");
}

/// Log a failure that ends the current command.
pub fn log_app_error<E: WebUiError>(error: &E) {
    error!(
        event = "core.app.error_occurred",
        error = %error,
        error_code = error.error_code(),
        user_error = error.is_user_error()
    );
}

/// The session cookie was present but malformed. Probing is skipped.
pub fn log_cookie_rejected(cookie: &str, error: &DecodeError) {
    warn!(
        event = "core.bootstrap.cookie_decode_failed",
        cookie = cookie,
        error = %error,
        error_code = error.error_code()
    );
}

pub fn log_bootstrap_completed(session_fields: usize, probe_started: bool, table_mounted: bool) {
    info!(
        event = "core.bootstrap.completed",
        session_fields = session_fields,
        probe_started = probe_started,
        table_mounted = table_mounted
    );
}
