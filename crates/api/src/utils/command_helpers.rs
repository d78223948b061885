//! Command execution helpers
//!
//! Provides utilities to reduce boilerplate when implementing commands with
//! timing and logging.

use std::time::Instant;

use numerolog_domain::{NumerologyError, Result as DomainResult};

use crate::utils::logging::{error_label, log_command_execution};

/// Execute a command with automatic timing and logging
///
/// # Example
///
/// ```rust,ignore
/// pub async fn my_command(ctx: &AppContext) -> Result<MyResponse, String> {
///     execute_with_string_error("my_module::my_command", || async {
///         ctx.some_service.do_something().await
///     })
///     .await
/// }
/// ```
pub async fn execute_logged<F, Fut, T>(command_name: &str, command_fn: F) -> DomainResult<T>
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = DomainResult<T>>,
{
    let start = Instant::now();

    let result = command_fn().await;

    let error_type = result.as_ref().err().map(error_label);
    log_command_execution(command_name, start.elapsed(), result.is_ok(), error_type);

    result
}

/// Execute a command with String error conversion
///
/// Commands return `Result<T, String>` so the message can be shown to the
/// user as-is.
pub async fn execute_with_string_error<F, Fut, T>(
    command_name: &str,
    command_fn: F,
) -> Result<T, String>
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = DomainResult<T>>,
{
    execute_logged(command_name, command_fn).await.map_err(|e| e.to_string())
}

/// Turn the error a page controller caught into a command failure.
pub fn page_outcome<T>(value: T, error: Option<&str>) -> DomainResult<T> {
    match error {
        Some(message) => Err(NumerologyError::Api(message.to_string())),
        None => Ok(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn string_errors_carry_the_display_message() {
        let result: Result<(), String> = execute_with_string_error("test::failing", || async {
            Err(NumerologyError::Validation("Неверный формат email".into()))
        })
        .await;

        assert_eq!(result.unwrap_err(), "Неверный формат email");
    }

    #[test]
    fn page_errors_become_failures() {
        assert_eq!(page_outcome(1, None), Ok(1));
        assert_eq!(
            page_outcome(1, Some("Ошибка при расчёте")),
            Err(NumerologyError::Api("Ошибка при расчёте".into()))
        );
    }
}
