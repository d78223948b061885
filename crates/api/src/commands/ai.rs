//! AI interpretation commands

use numerolog_core::AiState;
use serde::Serialize;

use crate::context::AppContext;
use crate::utils::command_helpers::{execute_with_string_error, page_outcome};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AiReport {
    #[serde(flatten)]
    pub state: AiState,
    pub paragraphs: Vec<String>,
}

/// Generate a report for `date`, or for the date already in the field.
pub async fn generate_report(ctx: &AppContext, date: Option<&str>) -> Result<AiReport, String> {
    execute_with_string_error("ai::generate_report", || async {
        let mut shell = ctx.shell().await;
        let page = shell.ai_mut();
        if let Some(raw) = date {
            page.set_date(raw);
        }

        page.generate().await;
        let report = AiReport {
            state: page.state().clone(),
            paragraphs: page.paragraphs().into_iter().map(str::to_string).collect(),
        };
        let error = report.state.error.clone();
        page_outcome(report, error.as_deref())
    })
    .await
}
