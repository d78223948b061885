//! Commands - the bridge between a front end and the page controllers
//!
//! Every command takes the shared [`AppContext`](crate::context::AppContext)
//! and returns `Result<T, String>` with a user-facing error message.

mod ai;
mod calculators;
mod matrix;
mod profile;
mod session;

pub use ai::*;
pub use calculators::*;
pub use matrix::*;
pub use profile::*;
pub use session::*;
