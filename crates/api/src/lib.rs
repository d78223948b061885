//! # Numerolog App
//!
//! Application layer - commands and the command-line entry point.
//!
//! This crate contains:
//! - Commands (front end → page controllers bridge)
//! - Application context (dependency injection)
//! - Command timing and logging helpers
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires the HTTP backend, identity and avatar adapters into the shell
//! - Provides async commands for any front end, including the bundled CLI

pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use commands::*;
pub use context::*;
