//! # Numerolog Domain
//!
//! Business domain types and pure utilities for the Numerolog client.
//!
//! This crate contains:
//! - Domain data types (UserProfile, Tariff, backend response schemas)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Input formatters, validators and the psychomatrix table parser
//!
//! ## Architecture
//! - No dependencies on other Numerolog crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
// Re-export the text utilities used by every page
pub use utils::format::{
    format_birth_date_input, format_code_input, format_name_input, format_phone_input,
    is_complete_birth_date,
};
pub use utils::interpretation::CalculatorView;
pub use utils::media::normalize_media_url;
pub use utils::psychomatrix::{
    parse_psychomatrix, split_psychomatrix, PsychomatrixGrid, PsychomatrixSections,
};
