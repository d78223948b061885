//! Page controllers
//!
//! Each page owns its state and is driven through `&mut self`, so a page can
//! only have one request in flight and a response always lands on the state
//! that issued it.

pub mod ai;
pub mod calculators;
pub mod matrix;
pub mod profile;

pub use ai::{AiPage, AiState};
pub use calculators::{CalculatorsPage, CalculatorsState};
pub use matrix::{MatrixPage, MatrixState};
pub use profile::{AuthMode, AuthStep, ProfilePage, ProfilePageState};

use numerolog_domain::constants::BIRTH_DATE_LENGTH;
use numerolog_domain::NumerologyError;

/// Whether a date field holds enough characters to submit.
pub(crate) fn has_full_date(date: &str) -> bool {
    date.chars().count() >= BIRTH_DATE_LENGTH
}

/// The error's message, or `fallback` when it has none.
pub(crate) fn message_or(err: &NumerologyError, fallback: &str) -> String {
    let message = err.message();
    if message.is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

/// Profile birth date offered as a one-tap "use my date" action.
pub(crate) fn suggested_date(profile_date: Option<String>, field: &str) -> Option<String> {
    profile_date.filter(|date| !date.is_empty() && date != field)
}
