//! Backend access

pub mod ports;

pub use ports::BackendApi;
