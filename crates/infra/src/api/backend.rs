//! `BackendApi` over HTTP

use async_trait::async_trait;
use numerolog_core::BackendApi;
use numerolog_domain::{
    normalize_media_url, AiInterpretationResponse, AuthResponse, BirthDateRequest, CalculatorId,
    CalculatorResponse, LoginRequest, MatrixImageResponse, ProfileUpdate, RegisterRequest, Result,
    UserProfile, VerifyEmailRequest,
};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::instrument;

use super::client::ApiClient;
use crate::errors::into_domain;

/// Backend adapter that decodes the JSON answers of [`ApiClient`] into
/// domain types.
#[derive(Clone)]
pub struct HttpBackend {
    client: ApiClient,
}

impl HttpBackend {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(into_domain)
}

#[async_trait]
impl BackendApi for HttpBackend {
    #[instrument(skip(self))]
    async fn user_by_telegram(&self, telegram_id: i64) -> Result<UserProfile> {
        decode(self.client.get_json(&format!("/users/by-telegram/{telegram_id}")).await?)
    }

    #[instrument(skip(self, update))]
    async fn upsert_user_by_telegram(
        &self,
        telegram_id: i64,
        update: &ProfileUpdate,
    ) -> Result<UserProfile> {
        let path = format!("/users/by-telegram/{telegram_id}/create-or-update");
        decode(self.client.send_json(Method::POST, &path, update).await?)
    }

    #[instrument(skip(self, update))]
    async fn update_user(&self, user_id: i64, update: &ProfileUpdate) -> Result<UserProfile> {
        let path = format!("/users/{user_id}");
        decode(self.client.send_json(Method::PUT, &path, update).await?)
    }

    async fn matrix_image(&self, birth_date: &str) -> Result<MatrixImageResponse> {
        let body = BirthDateRequest::new(birth_date);
        decode(self.client.send_json(Method::POST, "/matrix/image", &body).await?)
    }

    #[instrument(skip(self, birth_date), fields(calculator = %calculator))]
    async fn run_calculator(
        &self,
        calculator: CalculatorId,
        birth_date: &str,
    ) -> Result<CalculatorResponse> {
        let body = BirthDateRequest::new(birth_date);
        let path = format!("/calculators/{calculator}");
        decode(self.client.send_json(Method::POST, &path, &body).await?)
    }

    async fn ai_interpretation(&self, birth_date: &str) -> Result<AiInterpretationResponse> {
        let body = BirthDateRequest::new(birth_date);
        decode(self.client.send_json(Method::POST, "/ai/interpretation", &body).await?)
    }

    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse> {
        decode(self.client.send_json(Method::POST, "/auth/login", request).await?)
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse> {
        decode(self.client.send_json(Method::POST, "/auth/register", request).await?)
    }

    async fn verify_email(&self, request: &VerifyEmailRequest) -> Result<AuthResponse> {
        decode(self.client.send_json(Method::POST, "/auth/verify-email", request).await?)
    }

    fn media_url(&self, raw: &str) -> String {
        normalize_media_url(raw, self.client.base_url())
    }
}
