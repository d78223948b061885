//! User profile types
//!
//! The profile is owned by the backend; the client holds the current copy
//! and overlays partial updates onto it.

use serde::{Deserialize, Deserializer, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::identity::TelegramIdentity;
use super::tariff::Tariff;
use crate::constants::DEFAULT_USER_NAME;

/// User profile as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct UserProfile {
    /// Server-assigned id; 0 means the profile only exists locally.
    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    #[serde(default)]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    /// `DD.MM.YYYY`, empty when unknown.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub birth_date: String,
    #[cfg_attr(feature = "ts-gen", ts(type = "string | null"))]
    #[serde(default)]
    pub tariff: Option<Tariff>,
    #[cfg_attr(feature = "ts-gen", ts(type = "number | null"))]
    #[serde(default)]
    pub telegram_id: Option<i64>,
    #[serde(default)]
    pub telegram_username: Option<String>,
    #[serde(default)]
    pub telegram_first_name: Option<String>,
    #[serde(default)]
    pub telegram_last_name: Option<String>,
    #[serde(default)]
    pub is_email_verified: bool,
    /// Avatar URL or inline `data:` URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl UserProfile {
    /// Local profile synthesised from Telegram data when the backend has no
    /// record for the identity yet.
    pub fn from_identity(identity: &TelegramIdentity) -> Self {
        Self {
            id: 0,
            name: identity
                .first_name
                .clone()
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| DEFAULT_USER_NAME.to_string()),
            email: String::new(),
            phone: None,
            birth_date: String::new(),
            tariff: None,
            telegram_id: Some(identity.id),
            telegram_username: identity.username.clone(),
            telegram_first_name: identity.first_name.clone(),
            telegram_last_name: identity.last_name.clone(),
            is_email_verified: false,
            avatar_url: identity.photo_url.clone(),
        }
    }

    /// Placeholder created when a tariff is chosen before any profile exists.
    pub fn placeholder_with_tariff(tariff: Tariff) -> Self {
        Self {
            id: 0,
            name: DEFAULT_USER_NAME.to_string(),
            email: String::new(),
            phone: None,
            birth_date: String::new(),
            tariff: Some(tariff),
            telegram_id: None,
            telegram_username: None,
            telegram_first_name: None,
            telegram_last_name: None,
            is_email_verified: false,
            avatar_url: None,
        }
    }

    /// Prefer freshly supplied Telegram display fields over stored ones.
    pub fn overlay_identity(&mut self, identity: &TelegramIdentity) {
        fn fresher(fresh: &Option<String>, stored: &mut Option<String>) {
            if let Some(value) = fresh.as_ref().filter(|v| !v.is_empty()) {
                *stored = Some(value.clone());
            }
        }

        fresher(&identity.first_name, &mut self.telegram_first_name);
        fresher(&identity.last_name, &mut self.telegram_last_name);
        fresher(&identity.username, &mut self.telegram_username);
    }

    /// Whether the profile belongs to the given Telegram user.
    pub fn is_linked_to(&self, identity: &TelegramIdentity) -> bool {
        self.telegram_id == Some(identity.id)
    }

    pub fn has_birth_date(&self) -> bool {
        !self.birth_date.is_empty()
    }

    /// Initials for the header avatar when no picture is set.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Partial profile used for update requests and local shallow merges.
///
/// Only fields that are set are serialised.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct ProfileUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[cfg_attr(feature = "ts-gen", ts(type = "string | null"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tariff: Option<Tariff>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram_username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram_first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram_last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl ProfileUpdate {
    pub fn tariff(tariff: Tariff) -> Self {
        Self { tariff: Some(tariff), ..Self::default() }
    }

    pub fn avatar(avatar_url: impl Into<String>) -> Self {
        Self { avatar_url: Some(avatar_url.into()), ..Self::default() }
    }

    pub fn birth_date(birth_date: impl Into<String>) -> Self {
        Self { birth_date: Some(birth_date.into()), ..Self::default() }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Shallow field overlay onto an existing profile.
    pub fn apply_to(&self, profile: &mut UserProfile) {
        if let Some(name) = &self.name {
            profile.name = name.clone();
        }
        if let Some(email) = &self.email {
            profile.email = email.clone();
        }
        if let Some(birth_date) = &self.birth_date {
            profile.birth_date = birth_date.clone();
        }
        overlay(&self.phone, &mut profile.phone);
        overlay(&self.tariff, &mut profile.tariff);
        overlay(&self.telegram_username, &mut profile.telegram_username);
        overlay(&self.telegram_first_name, &mut profile.telegram_first_name);
        overlay(&self.telegram_last_name, &mut profile.telegram_last_name);
        overlay(&self.avatar_url, &mut profile.avatar_url);
    }
}

fn overlay<T: Clone>(update: &Option<T>, target: &mut Option<T>) {
    if let Some(value) = update {
        *target = Some(value.clone());
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> TelegramIdentity {
        TelegramIdentity {
            id: 4242,
            first_name: Some("Анна".into()),
            last_name: Some("Петрова".into()),
            username: Some("anna_p".into()),
            photo_url: Some("https://t.me/i/userpic/anna.jpg".into()),
        }
    }

    #[test]
    fn deserializes_backend_record_with_nulls() {
        let json = r#"{
            "id": 7, "name": "Анна", "email": "anna@example.com", "phone": null,
            "birth_date": null, "tariff": "pro", "telegram_id": 4242,
            "telegram_username": null, "telegram_first_name": "Анна",
            "telegram_last_name": null, "is_email_verified": true
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.id, 7);
        assert_eq!(profile.birth_date, "");
        assert_eq!(profile.tariff, Some(Tariff::Pro));
        assert!(profile.avatar_url.is_none());
    }

    #[test]
    fn from_identity_builds_local_profile() {
        let profile = UserProfile::from_identity(&identity());
        assert_eq!(profile.id, 0);
        assert_eq!(profile.name, "Анна");
        assert_eq!(profile.telegram_id, Some(4242));
        assert_eq!(profile.avatar_url.as_deref(), Some("https://t.me/i/userpic/anna.jpg"));
        assert!(profile.is_linked_to(&identity()));
    }

    #[test]
    fn from_identity_without_name_uses_default() {
        let bare = TelegramIdentity { id: 1, ..TelegramIdentity::default() };
        assert_eq!(UserProfile::from_identity(&bare).name, "Пользователь");
    }

    #[test]
    fn overlay_prefers_fresh_identity_values() {
        let mut profile = UserProfile::from_identity(&identity());
        profile.telegram_username = Some("old".into());
        let fresh = TelegramIdentity {
            id: 4242,
            first_name: None,
            last_name: Some("Иванова".into()),
            username: Some("anna_new".into()),
            photo_url: None,
        };
        profile.overlay_identity(&fresh);
        assert_eq!(profile.telegram_first_name.as_deref(), Some("Анна"));
        assert_eq!(profile.telegram_last_name.as_deref(), Some("Иванова"));
        assert_eq!(profile.telegram_username.as_deref(), Some("anna_new"));
    }

    #[test]
    fn update_serializes_only_set_fields() {
        let update = ProfileUpdate::tariff(Tariff::Basic);
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({ "tariff": "basic" }));
    }

    #[test]
    fn apply_to_is_a_shallow_overlay() {
        let mut profile = UserProfile::from_identity(&identity());
        let update = ProfileUpdate {
            birth_date: Some("02.08.1995".into()),
            phone: Some("79990001122".into()),
            ..ProfileUpdate::default()
        };
        update.apply_to(&mut profile);
        assert_eq!(profile.birth_date, "02.08.1995");
        assert_eq!(profile.phone.as_deref(), Some("79990001122"));
        assert_eq!(profile.name, "Анна");
    }

    #[test]
    fn initials_take_first_two_words() {
        let mut profile = UserProfile::placeholder_with_tariff(Tariff::Free);
        profile.name = "анна мария петрова".into();
        assert_eq!(profile.initials(), "АМ");
    }
}
