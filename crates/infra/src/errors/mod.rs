//! Infrastructure error conversions

pub mod conversions;

pub use conversions::{into_domain, InfraError};
