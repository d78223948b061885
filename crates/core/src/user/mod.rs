//! User profile management

pub mod ports;
pub mod store;

pub use ports::{AvatarProcessor, IdentityProvider};
pub use store::{ProfileState, ProfileStore};
