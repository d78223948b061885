//! Port interfaces for user identity and avatar intake
//!
//! These traits define the boundaries between core business logic
//! and the host environment.

use async_trait::async_trait;
use numerolog_domain::{AvatarUpload, Result, TelegramIdentity};

/// Source of the Telegram user the Mini App was opened by
pub trait IdentityProvider: Send + Sync {
    /// Current identity, `None` for guests.
    fn identity(&self) -> Option<TelegramIdentity>;
}

/// Turns a picked image into an inline avatar source
#[async_trait]
pub trait AvatarProcessor: Send + Sync {
    /// Validate, downscale and encode the upload as a `data:` URL.
    ///
    /// Fails with `NumerologyError::Avatar` carrying the user-facing message.
    async fn process(&self, upload: AvatarUpload) -> Result<String>;
}
