//! # Numerolog Infrastructure
//!
//! Implementations of the `numerolog-core` ports.
//!
//! This crate contains:
//! - HTTP transport with timeout and retry
//! - The backend adapter (`HttpBackend`) over the JSON API client
//! - Avatar processing with the `image` crate
//! - Telegram identity sources and configuration loading
//!
//! ## Architecture
//! - Implements traits defined in `numerolog-core`
//! - Contains all "impure" code (network, file system, image decoding)

pub mod api;
pub mod avatar;
pub mod config;
pub mod errors;
pub mod http;
pub mod identity;

// Re-export commonly used items
pub use api::{ApiClient, HttpBackend};
pub use avatar::ImageAvatarProcessor;
pub use errors::InfraError;
pub use http::{HttpClient, RetryPolicy};
pub use identity::{StaticIdentityProvider, TELEGRAM_USER_ENV};
