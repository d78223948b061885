//! Calculators page
//!
//! Picking a calculator only changes the selection; `calculate` runs the
//! selected one and, on success, makes it the active calculator whose
//! result is shown.

use std::sync::Arc;

use numerolog_domain::constants::messages;
use numerolog_domain::{format_birth_date_input, CalculatorId, CalculatorView};
use serde::Serialize;
use tracing::{debug, info, warn};

use super::{has_full_date, message_or, suggested_date};
use crate::backend::BackendApi;
use crate::user::ProfileStore;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CalculatorsState {
    pub date: String,
    pub selected: CalculatorId,
    /// Calculator the current result belongs to.
    pub active: Option<CalculatorId>,
    pub result: String,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct CalculatorsPage {
    backend: Arc<dyn BackendApi>,
    store: Arc<ProfileStore>,
    state: CalculatorsState,
}

impl CalculatorsPage {
    pub fn new(backend: Arc<dyn BackendApi>, store: Arc<ProfileStore>) -> Self {
        Self { backend, store, state: CalculatorsState::default() }
    }

    pub fn state(&self) -> &CalculatorsState {
        &self.state
    }

    /// Calculator ids with their titles, in picker order.
    pub fn catalogue() -> impl Iterator<Item = (CalculatorId, &'static str)> {
        CalculatorId::ALL.into_iter().map(|id| (id, id.title()))
    }

    /// Calculators require the professional tariff.
    pub fn has_access(&self) -> bool {
        self.store
            .profile()
            .and_then(|profile| profile.tariff)
            .is_some_and(|tariff| tariff.grants_calculators())
    }

    pub fn select(&mut self, calculator: CalculatorId) {
        self.state.selected = calculator;
    }

    pub fn set_date(&mut self, raw: &str) {
        self.state.date = format_birth_date_input(raw);
    }

    pub fn seed_date(&mut self, date: &str) {
        self.state.date = date.to_string();
    }

    pub fn prefill_from_profile(&mut self) {
        if !self.state.date.is_empty() {
            return;
        }
        if let Some(profile) = self.store.profile().filter(|p| p.has_birth_date()) {
            self.state.date = profile.birth_date;
        }
    }

    pub fn suggested_date(&self) -> Option<String> {
        suggested_date(self.store.profile().map(|p| p.birth_date), &self.state.date)
    }

    pub async fn use_my_date(&mut self) {
        if let Some(date) = self.suggested_date() {
            self.state.date = date;
            self.calculate().await;
        }
    }

    /// Run the selected calculator for the date in the field.
    ///
    /// On failure the previous result and active calculator are kept.
    pub async fn calculate(&mut self) {
        if !self.has_access() {
            debug!("Calculation skipped: tariff does not include calculators");
            return;
        }
        if !has_full_date(&self.state.date) {
            debug!(date = %self.state.date, "Calculation skipped: incomplete date");
            return;
        }

        let calculator = self.state.selected;
        self.state.loading = true;
        self.state.error = None;

        match self.backend.run_calculator(calculator, &self.state.date).await {
            Ok(response) => {
                info!(calculator = %calculator, "Calculation finished");
                self.state.result = response.result_html;
                self.state.active = Some(calculator);
            }
            Err(err) => {
                warn!(calculator = %calculator, error = %err, "Calculation failed");
                self.state.error = Some(message_or(&err, messages::CALCULATION_FAILED));
            }
        }

        self.state.loading = false;
    }

    /// Layout of the current result, if there is one.
    pub fn view(&self) -> Option<CalculatorView> {
        let active = self.state.active?;
        if self.state.result.is_empty() {
            return None;
        }
        Some(CalculatorView::build(&self.state.result, active.renders_psychomatrix()))
    }
}
