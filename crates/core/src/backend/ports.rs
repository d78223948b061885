//! Port interface for the numerology backend
//!
//! Every user action that needs the server goes through this trait, so the
//! page controllers and the profile store can be tested without HTTP.

use async_trait::async_trait;
use numerolog_domain::{
    AiInterpretationResponse, AuthResponse, CalculatorId, CalculatorResponse, LoginRequest,
    MatrixImageResponse, ProfileUpdate, RegisterRequest, Result, UserProfile, VerifyEmailRequest,
};

/// Trait for the backend HTTP API
///
/// Failures carry the server's message (or the generic fallback) as
/// `NumerologyError::Api`; transport failures are `NumerologyError::Network`.
#[async_trait]
pub trait BackendApi: Send + Sync {
    /// `GET /users/by-telegram/{id}`
    async fn user_by_telegram(&self, telegram_id: i64) -> Result<UserProfile>;

    /// `POST /users/by-telegram/{id}/create-or-update`
    async fn upsert_user_by_telegram(
        &self,
        telegram_id: i64,
        update: &ProfileUpdate,
    ) -> Result<UserProfile>;

    /// `PUT /users/{id}`
    async fn update_user(&self, user_id: i64, update: &ProfileUpdate) -> Result<UserProfile>;

    /// `POST /matrix/image`
    async fn matrix_image(&self, birth_date: &str) -> Result<MatrixImageResponse>;

    /// `POST /calculators/{id}`
    async fn run_calculator(
        &self,
        calculator: CalculatorId,
        birth_date: &str,
    ) -> Result<CalculatorResponse>;

    /// `POST /ai/interpretation`
    async fn ai_interpretation(&self, birth_date: &str) -> Result<AiInterpretationResponse>;

    /// `POST /auth/login`
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse>;

    /// `POST /auth/register`
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse>;

    /// `POST /auth/verify-email`
    async fn verify_email(&self, request: &VerifyEmailRequest) -> Result<AuthResponse>;

    /// Resolve a media reference returned by the backend into a full URL.
    fn media_url(&self, raw: &str) -> String;
}
