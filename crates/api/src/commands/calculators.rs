//! Calculator commands
//!
//! Calculators are part of the professional tariff; without it every run is
//! refused with the upsell message.

use numerolog_core::CalculatorsPage;
use numerolog_domain::constants::messages;
use numerolog_domain::{is_complete_birth_date, CalculatorId, CalculatorView, NumerologyError};
use serde::Serialize;

use crate::context::AppContext;
use crate::utils::command_helpers::{execute_with_string_error, page_outcome};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculatorEntry {
    pub id: CalculatorId,
    pub title: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculatorCatalogue {
    pub has_access: bool,
    pub calculators: Vec<CalculatorEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculatorOutcome {
    pub calculator: CalculatorId,
    /// Raw result text as returned by the backend.
    pub result: String,
    pub view: Option<CalculatorView>,
}

pub async fn list_calculators(ctx: &AppContext) -> Result<CalculatorCatalogue, String> {
    execute_with_string_error("calculators::list_calculators", || async {
        let shell = ctx.shell().await;
        Ok(CalculatorCatalogue {
            has_access: shell.calculators().has_access(),
            calculators: CalculatorsPage::catalogue()
                .map(|(id, title)| CalculatorEntry { id, title })
                .collect(),
        })
    })
    .await
}

/// Run `calculator` for `date`, or for the date already in the field.
pub async fn run_calculator(
    ctx: &AppContext,
    calculator: CalculatorId,
    date: Option<&str>,
) -> Result<CalculatorOutcome, String> {
    execute_with_string_error("calculators::run_calculator", || async {
        let mut shell = ctx.shell().await;
        let page = shell.calculators_mut();
        if !page.has_access() {
            return Err(NumerologyError::Validation(messages::CALCULATORS_LOCKED.to_string()));
        }

        page.select(calculator);
        if let Some(raw) = date {
            page.set_date(raw);
        }
        if !is_complete_birth_date(&page.state().date) {
            return Err(NumerologyError::Validation(messages::INVALID_BIRTH_DATE.to_string()));
        }

        page.calculate().await;
        let state = page.state();
        let outcome = CalculatorOutcome {
            calculator: state.active.unwrap_or(calculator),
            result: state.result.clone(),
            view: page.view(),
        };
        page_outcome(outcome, state.error.as_deref())
    })
    .await
}
