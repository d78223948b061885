use std::time::Duration;

use numerolog_domain::NumerologyError;
use tracing::{info, warn};

/// Log the outcome of a command execution with structured fields.
///
/// # Parameters
/// * `command` - Logical command identifier (e.g. `"matrix::compute_matrix"`).
/// * `elapsed` - Duration the command execution took.
/// * `success` - Whether the command completed successfully.
/// * `error_type` - Label from [`error_label`] when the command failed.
///
/// Callers must avoid forwarding sensitive values in `command`.
#[inline]
pub fn log_command_execution(
    command: &str,
    elapsed: Duration,
    success: bool,
    error_type: Option<&str>,
) {
    let duration_ms = elapsed.as_millis() as u64;

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, duration_ms, error_type, "command_execution_failure");
    }
}

/// Convert a `NumerologyError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &NumerologyError) -> &'static str {
    match error {
        NumerologyError::Network(_) => "network",
        NumerologyError::Api(_) => "api",
        NumerologyError::Validation(_) => "validation",
        NumerologyError::Avatar(_) => "avatar",
        NumerologyError::Config(_) => "config",
        NumerologyError::Internal(_) => "internal",
    }
}
