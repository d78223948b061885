//! Request and response schemas of the backend API
//!
//! The backend is loosely typed; these structs pin down what the client
//! actually reads and tolerate missing fields.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::user::UserProfile;
use crate::constants::AI_STATUS_OK;

/// Interpretation text keyed by digit (`"1"`..`"9"`).
pub type DigitInterpretations = BTreeMap<String, String>;

/// Body of every birth-date driven request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthDateRequest {
    pub birth_date: String,
}

impl BirthDateRequest {
    pub fn new(birth_date: impl Into<String>) -> Self {
        Self { birth_date: birth_date.into() }
    }
}

/// `POST /matrix/image`
///
/// The image reference arrives under one of three names; precedence is
/// `image_url`, then `imagePath`, then `image_path`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixImageResponse {
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, rename = "imagePath")]
    pub image_path_camel: Option<String>,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub digit_interpretations: Option<DigitInterpretations>,
}

impl MatrixImageResponse {
    /// First non-empty image reference by precedence.
    pub fn raw_image_ref(&self) -> Option<&str> {
        [&self.image_url, &self.image_path_camel, &self.image_path]
            .into_iter()
            .filter_map(|candidate| candidate.as_deref())
            .find(|candidate| !candidate.is_empty())
    }
}

/// `POST /calculators/{id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorResponse {
    #[serde(default)]
    pub result_html: String,
}

/// `POST /ai/interpretation`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AiInterpretationResponse {
    #[serde(default)]
    pub status: String,
    /// Numerology profile the report was built from; shape is backend-defined.
    #[serde(default)]
    pub profile: serde_json::Value,
    #[serde(default)]
    pub report: Option<String>,
}

impl AiInterpretationResponse {
    pub fn is_ok(&self) -> bool {
        self.status == AI_STATUS_OK
    }
}

/// `POST /auth/login`, `/auth/register`, `/auth/verify-email`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

impl AuthResponse {
    /// The user record when the backend reported success.
    pub fn into_user(self) -> Option<UserProfile> {
        if self.status == AI_STATUS_OK {
            self.user
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyEmailRequest {
    pub email: String,
    pub code: String,
}

/// `POST /auth/register`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub birth_date: String,
    /// Always null at registration; the backend assigns the default tier.
    pub tariff: Option<String>,
    pub password: String,
    pub password_confirm: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram_username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram_first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram_last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram_raw: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_ref_precedence() {
        let resp: MatrixImageResponse = serde_json::from_str(
            r#"{"imagePath": "/static/b.png", "image_path": "/static/c.png"}"#,
        )
        .unwrap();
        assert_eq!(resp.raw_image_ref(), Some("/static/b.png"));

        let resp: MatrixImageResponse = serde_json::from_str(
            r#"{"image_url": "http://x/a.png", "imagePath": "/static/b.png"}"#,
        )
        .unwrap();
        assert_eq!(resp.raw_image_ref(), Some("http://x/a.png"));

        let resp: MatrixImageResponse =
            serde_json::from_str(r#"{"image_url": "", "image_path": "c.png"}"#).unwrap();
        assert_eq!(resp.raw_image_ref(), Some("c.png"));

        assert_eq!(MatrixImageResponse::default().raw_image_ref(), None);
    }

    #[test]
    fn auth_response_yields_user_only_on_ok() {
        let ok: AuthResponse = serde_json::from_str(
            r#"{"status":"ok","user":{"id":3,"name":"A","email":"a@b.c","birth_date":"01.01.2000"}}"#,
        )
        .unwrap();
        assert_eq!(ok.into_user().map(|u| u.id), Some(3));

        let pending: AuthResponse =
            serde_json::from_str(r#"{"status":"pending","user":null}"#).unwrap();
        assert!(pending.into_user().is_none());
    }

    #[test]
    fn register_request_omits_absent_telegram_fields() {
        let request = RegisterRequest {
            name: "Анна".into(),
            email: "anna@example.com".into(),
            phone: None,
            birth_date: "02.08.1995".into(),
            tariff: None,
            password: "secret1".into(),
            password_confirm: "secret1".into(),
            telegram_id: None,
            telegram_username: None,
            telegram_first_name: None,
            telegram_last_name: None,
            telegram_raw: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("telegram_id").is_none());
        assert!(json["phone"].is_null());
        assert!(json["tariff"].is_null());
    }
}
