//! Destiny matrix commands

use numerolog_core::MatrixState;
use numerolog_domain::constants::messages;
use numerolog_domain::{is_complete_birth_date, NumerologyError};

use crate::context::AppContext;
use crate::utils::command_helpers::{execute_with_string_error, page_outcome};

/// Compute the matrix for `date`, or for the date already in the field.
///
/// `date` is typed input and is masked the same way the page masks it.
pub async fn compute_matrix(ctx: &AppContext, date: Option<&str>) -> Result<MatrixState, String> {
    execute_with_string_error("matrix::compute_matrix", || async {
        let mut shell = ctx.shell().await;
        let page = shell.matrix_mut();
        if let Some(raw) = date {
            page.set_date(raw);
        }
        if !is_complete_birth_date(&page.state().date) {
            return Err(NumerologyError::Validation(messages::INVALID_BIRTH_DATE.to_string()));
        }

        page.run().await;
        let state = page.state().clone();
        let error = state.error.clone();
        page_outcome(state, error.as_deref())
    })
    .await
}

/// Interpretation text for one digit of the last computed matrix.
pub async fn digit_interpretation(ctx: &AppContext, digit: u8) -> Result<Option<String>, String> {
    execute_with_string_error("matrix::digit_interpretation", || async {
        if !(1..=9).contains(&digit) {
            return Err(NumerologyError::Validation(format!("Digit out of range: {digit}")));
        }
        Ok(ctx.shell().await.matrix().interpretation(digit))
    })
    .await
}
