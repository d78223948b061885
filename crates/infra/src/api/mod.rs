//! Numerolog backend API
//!
//! [`ApiClient`] speaks JSON over the shared [`HttpClient`](crate::http::HttpClient);
//! [`HttpBackend`] implements the core `BackendApi` port on top of it.

pub mod backend;
pub mod client;

pub use backend::HttpBackend;
pub use client::ApiClient;
