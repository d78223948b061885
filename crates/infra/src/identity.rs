//! Telegram identity sources for headless sessions

use numerolog_core::IdentityProvider;
use numerolog_domain::TelegramIdentity;
use tracing::{debug, warn};

/// Environment variable holding the init-data `user` object as JSON.
pub const TELEGRAM_USER_ENV: &str = "NUMEROLOG_TELEGRAM_USER";

/// Identity fixed at construction time.
#[derive(Debug, Clone, Default)]
pub struct StaticIdentityProvider {
    identity: Option<TelegramIdentity>,
}

impl StaticIdentityProvider {
    pub fn new(identity: Option<TelegramIdentity>) -> Self {
        Self { identity }
    }

    /// Guest session.
    pub fn guest() -> Self {
        Self::default()
    }

    /// Parse the init-data `user` JSON. Malformed input yields a guest.
    pub fn from_json(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return Self::guest();
        }
        match serde_json::from_str::<TelegramIdentity>(raw) {
            Ok(identity) => {
                debug!(telegram_id = identity.id, "Telegram identity parsed");
                Self::new(Some(identity))
            }
            Err(err) => {
                warn!(error = %err, "Ignoring malformed Telegram user payload");
                Self::guest()
            }
        }
    }

    /// Identity from [`TELEGRAM_USER_ENV`], guest when unset.
    pub fn from_env() -> Self {
        std::env::var(TELEGRAM_USER_ENV).map(|raw| Self::from_json(&raw)).unwrap_or_default()
    }
}

impl IdentityProvider for StaticIdentityProvider {
    fn identity(&self) -> Option<TelegramIdentity> {
        self.identity.clone()
    }
}
