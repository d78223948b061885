//! Destiny matrix page

use std::sync::Arc;

use numerolog_domain::constants::messages;
use numerolog_domain::{format_birth_date_input, DigitInterpretations};
use serde::Serialize;
use tracing::{debug, info, warn};

use super::{has_full_date, message_or, suggested_date};
use crate::backend::BackendApi;
use crate::user::ProfileStore;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatrixState {
    pub date: String,
    /// Resolved image URL of the last successful run.
    pub image_url: Option<String>,
    pub digit_interpretations: Option<DigitInterpretations>,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct MatrixPage {
    backend: Arc<dyn BackendApi>,
    store: Arc<ProfileStore>,
    state: MatrixState,
}

impl MatrixPage {
    pub fn new(backend: Arc<dyn BackendApi>, store: Arc<ProfileStore>) -> Self {
        Self { backend, store, state: MatrixState::default() }
    }

    pub fn state(&self) -> &MatrixState {
        &self.state
    }

    /// Typed input, masked as `DD.MM.YYYY`.
    pub fn set_date(&mut self, raw: &str) {
        self.state.date = format_birth_date_input(raw);
    }

    /// Put a known date into the field as-is.
    pub fn seed_date(&mut self, date: &str) {
        self.state.date = date.to_string();
    }

    /// Fill an empty date field from the profile.
    pub fn prefill_from_profile(&mut self) {
        if !self.state.date.is_empty() {
            return;
        }
        if let Some(profile) = self.store.profile().filter(|p| p.has_birth_date()) {
            self.state.date = profile.birth_date;
        }
    }

    /// Profile date offered when it differs from the field.
    pub fn suggested_date(&self) -> Option<String> {
        suggested_date(self.store.profile().map(|p| p.birth_date), &self.state.date)
    }

    /// Switch the field to the profile date and run.
    pub async fn use_my_date(&mut self) {
        if let Some(date) = self.suggested_date() {
            self.state.date = date;
            self.run().await;
        }
    }

    /// Compute the matrix for the date in the field.
    ///
    /// Incomplete dates are ignored. A failed run keeps the previous image.
    pub async fn run(&mut self) {
        if !has_full_date(&self.state.date) {
            debug!(date = %self.state.date, "Matrix run skipped: incomplete date");
            return;
        }

        self.state.loading = true;
        self.state.error = None;

        match self.backend.matrix_image(&self.state.date).await {
            Ok(response) => {
                self.state.image_url =
                    response.raw_image_ref().map(|raw| self.backend.media_url(raw));
                self.state.digit_interpretations = response.digit_interpretations;
                info!(has_image = self.state.image_url.is_some(), "Matrix computed");
            }
            Err(err) => {
                warn!(error = %err, "Matrix request failed");
                self.state.error = Some(message_or(&err, messages::MATRIX_FAILED));
            }
        }

        self.state.loading = false;
    }

    /// Interpretation shown for `digit` (1 to 9).
    ///
    /// `None` until a run returned interpretations; missing digits get a
    /// placeholder text.
    pub fn interpretation(&self, digit: u8) -> Option<String> {
        let interpretations = self.state.digit_interpretations.as_ref()?;
        Some(
            interpretations
                .get(&digit.to_string())
                .cloned()
                .unwrap_or_else(|| format!("Интерпретация цифры {digit} (заглушка)")),
        )
    }
}
