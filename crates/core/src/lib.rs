//! # Numerolog Core
//!
//! Client business logic - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port interfaces (traits) for the backend, identity and avatar intake
//! - The shared profile store
//! - Page controllers and the app shell
//!
//! ## Architecture Principles
//! - Only depends on `numerolog-domain`
//! - No HTTP, image or platform code
//! - All external dependencies via traits

pub mod backend;
pub mod pages;
pub mod shell;
pub mod user;

// Re-export specific items to avoid ambiguity
pub use backend::BackendApi;
pub use pages::{
    AiPage, AiState, AuthMode, AuthStep, CalculatorsPage, CalculatorsState, MatrixPage,
    MatrixState, ProfilePage, ProfilePageState,
};
pub use shell::{AppShell, HeaderView, Tab};
pub use user::{AvatarProcessor, IdentityProvider, ProfileState, ProfileStore};
