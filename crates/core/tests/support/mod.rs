//! Shared test helpers for `numerolog-core` integration tests.
//!
//! These helpers provide an in-memory backend that records every call, so
//! tests can assert on routing without an HTTP server.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use numerolog_core::{AvatarProcessor, BackendApi, IdentityProvider, ProfileStore};
use numerolog_domain::{
    normalize_media_url, AiInterpretationResponse, AuthResponse, AvatarUpload, CalculatorId,
    CalculatorResponse, LoginRequest, MatrixImageResponse, NumerologyError, ProfileUpdate,
    RegisterRequest, Result, TelegramIdentity, UserProfile, VerifyEmailRequest,
};
use parking_lot::Mutex;

pub const API_BASE: &str = "https://api.test";

/// One recorded backend request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCall {
    UserByTelegram(i64),
    UpsertByTelegram(i64, ProfileUpdate),
    UpdateUser(i64, ProfileUpdate),
    MatrixImage(String),
    Calculator(CalculatorId, String),
    AiInterpretation(String),
    Login(LoginRequest),
    Register(RegisterRequest),
    VerifyEmail(VerifyEmailRequest),
}

/// In-memory `BackendApi` with canned responses.
///
/// Profile writes echo the update back on top of a server-side record so
/// tests can see which endpoint produced the stored profile.
pub struct MockBackend {
    calls: Mutex<Vec<BackendCall>>,
    user: Mutex<Result<UserProfile>>,
    update_error: Mutex<Option<NumerologyError>>,
    matrix: Mutex<Result<MatrixImageResponse>>,
    calculator: Mutex<Result<CalculatorResponse>>,
    ai: Mutex<Result<AiInterpretationResponse>>,
    auth: Mutex<Result<AuthResponse>>,
}

/// Server id assigned by the mock to records created through the upsert.
pub const UPSERTED_USER_ID: i64 = 100;

impl Default for MockBackend {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            user: Mutex::new(Err(NumerologyError::Api("User not found".into()))),
            update_error: Mutex::new(None),
            matrix: Mutex::new(Ok(MatrixImageResponse::default())),
            calculator: Mutex::new(Ok(CalculatorResponse::default())),
            ai: Mutex::new(Ok(AiInterpretationResponse::default())),
            auth: Mutex::new(Err(NumerologyError::Api("Ошибка запроса".into()))),
        }
    }
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(self, user: Result<UserProfile>) -> Self {
        *self.user.lock() = user;
        self
    }

    pub fn with_update_error(self, error: NumerologyError) -> Self {
        *self.update_error.lock() = Some(error);
        self
    }

    pub fn with_matrix(self, response: Result<MatrixImageResponse>) -> Self {
        *self.matrix.lock() = response;
        self
    }

    pub fn with_auth(self, response: Result<AuthResponse>) -> Self {
        *self.auth.lock() = response;
        self
    }

    pub fn with_ai(self, response: Result<AiInterpretationResponse>) -> Self {
        *self.ai.lock() = response;
        self
    }

    pub fn set_calculator(&self, response: Result<CalculatorResponse>) {
        *self.calculator.lock() = response;
    }

    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls.lock().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    fn record(&self, call: BackendCall) {
        self.calls.lock().push(call);
    }

    fn write_result(&self, mut record: UserProfile, update: &ProfileUpdate) -> Result<UserProfile> {
        if let Some(err) = self.update_error.lock().clone() {
            return Err(err);
        }
        update.apply_to(&mut record);
        Ok(record)
    }
}

#[async_trait]
impl BackendApi for MockBackend {
    async fn user_by_telegram(&self, telegram_id: i64) -> Result<UserProfile> {
        self.record(BackendCall::UserByTelegram(telegram_id));
        self.user.lock().clone()
    }

    async fn upsert_user_by_telegram(
        &self,
        telegram_id: i64,
        update: &ProfileUpdate,
    ) -> Result<UserProfile> {
        self.record(BackendCall::UpsertByTelegram(telegram_id, update.clone()));
        let mut record = UserProfile::from_identity(&identity_with_id(telegram_id));
        record.id = UPSERTED_USER_ID;
        self.write_result(record, update)
    }

    async fn update_user(&self, user_id: i64, update: &ProfileUpdate) -> Result<UserProfile> {
        self.record(BackendCall::UpdateUser(user_id, update.clone()));
        let mut record = registered_user(user_id);
        record.name = "Server Copy".into();
        self.write_result(record, update)
    }

    async fn matrix_image(&self, birth_date: &str) -> Result<MatrixImageResponse> {
        self.record(BackendCall::MatrixImage(birth_date.to_string()));
        self.matrix.lock().clone()
    }

    async fn run_calculator(
        &self,
        calculator: CalculatorId,
        birth_date: &str,
    ) -> Result<CalculatorResponse> {
        self.record(BackendCall::Calculator(calculator, birth_date.to_string()));
        self.calculator.lock().clone()
    }

    async fn ai_interpretation(&self, birth_date: &str) -> Result<AiInterpretationResponse> {
        self.record(BackendCall::AiInterpretation(birth_date.to_string()));
        self.ai.lock().clone()
    }

    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse> {
        self.record(BackendCall::Login(request.clone()));
        self.auth.lock().clone()
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse> {
        self.record(BackendCall::Register(request.clone()));
        self.auth.lock().clone()
    }

    async fn verify_email(&self, request: &VerifyEmailRequest) -> Result<AuthResponse> {
        self.record(BackendCall::VerifyEmail(request.clone()));
        self.auth.lock().clone()
    }

    fn media_url(&self, raw: &str) -> String {
        normalize_media_url(raw, API_BASE)
    }
}

/// Fixed identity, or none for guest sessions.
pub struct StaticIdentity(pub Option<TelegramIdentity>);

impl IdentityProvider for StaticIdentity {
    fn identity(&self) -> Option<TelegramIdentity> {
        self.0.clone()
    }
}

/// Avatar processor that accepts any image without decoding it.
pub struct StubAvatar;

pub const STUB_AVATAR: &str = "data:image/jpeg;base64,/9j/stub";

#[async_trait]
impl AvatarProcessor for StubAvatar {
    async fn process(&self, upload: AvatarUpload) -> Result<String> {
        if !upload.is_image() {
            return Err(NumerologyError::Avatar("Файл должен быть изображением".into()));
        }
        Ok(STUB_AVATAR.to_string())
    }
}

pub fn identity_with_id(id: i64) -> TelegramIdentity {
    TelegramIdentity { id, ..TelegramIdentity::default() }
}

pub fn anna() -> TelegramIdentity {
    TelegramIdentity {
        id: 4242,
        first_name: Some("Анна".into()),
        last_name: Some("Петрова".into()),
        username: Some("anna_p".into()),
        photo_url: Some("https://t.me/i/userpic/anna.jpg".into()),
    }
}

/// A backend record with a server id and no Telegram link.
pub fn registered_user(id: i64) -> UserProfile {
    let mut user = UserProfile::placeholder_with_tariff(numerolog_domain::Tariff::Free);
    user.id = id;
    user.name = "Мария".into();
    user.email = "maria@example.com".into();
    user.birth_date = "02.08.1995".into();
    user.is_email_verified = true;
    user
}

pub fn store_with(
    backend: &Arc<MockBackend>,
    identity: Option<TelegramIdentity>,
) -> Arc<ProfileStore> {
    let backend: Arc<dyn BackendApi> = backend.clone();
    Arc::new(ProfileStore::new(backend, Arc::new(StaticIdentity(identity))))
}
