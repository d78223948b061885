//! Telegram identity supplied by the Mini App host

use serde::{Deserialize, Serialize};

/// The `user` object of Telegram WebApp init data.
///
/// An untrusted hint used for pre-filling and merging, never a credential.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelegramIdentity {
    pub id: i64,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
}
