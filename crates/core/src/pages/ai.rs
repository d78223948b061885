//! AI interpretation page

use std::sync::Arc;

use numerolog_domain::constants::messages;
use numerolog_domain::utils::interpretation::report_paragraphs;
use numerolog_domain::{format_birth_date_input, NumerologyError};
use serde::Serialize;
use tracing::{debug, info, warn};

use super::has_full_date;
use crate::backend::BackendApi;
use crate::user::ProfileStore;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AiState {
    pub date: String,
    pub report: Option<String>,
    /// Numerology profile the report was generated from.
    pub profile: Option<serde_json::Value>,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct AiPage {
    backend: Arc<dyn BackendApi>,
    store: Arc<ProfileStore>,
    state: AiState,
}

/// User-facing message for a failed generation request.
pub fn generation_error_message(err: &NumerologyError) -> &'static str {
    let message = err.message();
    if message.contains("503") || message.contains("не инициализирована") {
        messages::AI_KNOWLEDGE_BASE_MISSING
    } else if message.contains("502") || message.contains("OpenAI") {
        messages::AI_OPENAI_FAILURE
    } else {
        messages::AI_GENERIC_FAILURE
    }
}

impl AiPage {
    pub fn new(backend: Arc<dyn BackendApi>, store: Arc<ProfileStore>) -> Self {
        Self { backend, store, state: AiState::default() }
    }

    pub fn state(&self) -> &AiState {
        &self.state
    }

    pub fn set_date(&mut self, raw: &str) {
        self.state.date = format_birth_date_input(raw);
    }

    pub fn seed_date(&mut self, date: &str) {
        self.state.date = date.to_string();
    }

    /// Fill an empty date field from the backend record of the session's
    /// Telegram user. Failures are ignored.
    pub async fn prefill_from_backend(&mut self) {
        if !self.state.date.is_empty() {
            return;
        }
        let Some(identity) = self.store.identity() else {
            return;
        };

        match self.backend.user_by_telegram(identity.id).await {
            Ok(user) if user.has_birth_date() => self.state.date = user.birth_date,
            Ok(_) => {}
            Err(err) => debug!(error = %err, "Birth date prefill unavailable"),
        }
    }

    /// Generate a report for the date in the field.
    pub async fn generate(&mut self) {
        if !has_full_date(&self.state.date) {
            self.state.error = Some(messages::AI_DATE_REQUIRED.to_string());
            return;
        }

        self.state.loading = true;
        self.state.error = None;
        self.state.report = None;
        self.state.profile = None;

        match self.backend.ai_interpretation(&self.state.date).await {
            Ok(response) if response.is_ok() => {
                info!("AI report generated");
                self.state.profile = Some(response.profile);
                self.state.report = response.report;
            }
            Ok(response) => {
                warn!(status = %response.status, "AI report not generated");
                self.state.error = Some(messages::AI_NOT_GENERATED.to_string());
            }
            Err(err) => {
                warn!(error = %err, "AI interpretation request failed");
                self.state.error = Some(generation_error_message(&err).to_string());
            }
        }

        self.state.loading = false;
    }

    /// Report split into display paragraphs.
    pub fn paragraphs(&self) -> Vec<&str> {
        self.state.report.as_deref().map(report_paragraphs).unwrap_or_default()
    }
}
