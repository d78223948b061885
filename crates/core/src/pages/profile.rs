//! Profile page: login, registration with e-mail verification, tariff
//! chooser and avatar upload

use std::sync::Arc;

use numerolog_domain::constants::messages;
use numerolog_domain::utils::validation::{
    validate_login, validate_verification_code, RegistrationForm,
};
use numerolog_domain::{
    format_birth_date_input, format_code_input, format_name_input, format_phone_input,
    AvatarUpload, LoginRequest, NumerologyError, ProfileUpdate, RegisterRequest, Result, Tariff,
    UserProfile, VerifyEmailRequest,
};
use serde::Serialize;
use tracing::{debug, info, warn};

use super::message_or;
use crate::backend::BackendApi;
use crate::user::{AvatarProcessor, ProfileStore};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthStep {
    #[default]
    Form,
    Verify,
    Done,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfilePageState {
    pub mode: AuthMode,
    pub step: AuthStep,
    pub login_email: String,
    pub login_password: String,
    pub registration: RegistrationForm,
    pub code: String,
    pub loading: bool,
    pub error: Option<String>,
    /// User shown on the page; registered but unverified users live here
    /// before they reach the store.
    pub user: Option<UserProfile>,
    pub tariff_chooser_open: bool,
}

pub struct ProfilePage {
    backend: Arc<dyn BackendApi>,
    store: Arc<ProfileStore>,
    avatar: Arc<dyn AvatarProcessor>,
    support_url: Option<String>,
    state: ProfilePageState,
}

impl ProfilePage {
    pub fn new(
        backend: Arc<dyn BackendApi>,
        store: Arc<ProfileStore>,
        avatar: Arc<dyn AvatarProcessor>,
        support_url: Option<String>,
    ) -> Self {
        Self {
            backend,
            store,
            avatar,
            support_url: support_url.filter(|url| !url.is_empty()),
            state: ProfilePageState::default(),
        }
    }

    pub fn state(&self) -> &ProfilePageState {
        &self.state
    }

    /// Support link, hidden when not configured.
    pub fn support_url(&self) -> Option<&str> {
        self.support_url.as_deref()
    }

    pub fn forgot_password(&self) -> &'static str {
        messages::PASSWORD_RESET_UNAVAILABLE
    }

    pub fn tariff_display_name(&self) -> &str {
        Tariff::display_name_of(self.state.user.as_ref().and_then(|u| u.tariff.as_ref()))
    }

    /// Show the store's current user, if there is one.
    pub fn sync_with_store(&mut self) {
        if let Some(profile) = self.store.profile() {
            self.state.user = Some(profile);
            self.state.step = AuthStep::Done;
        }
    }

    /// Page entry: adopt the store's user, or look the Telegram user up on
    /// the backend. A missing record is not an error.
    pub async fn mount(&mut self) {
        self.sync_with_store();
        if self.state.user.is_some() {
            return;
        }
        let Some(identity) = self.store.identity() else {
            return;
        };

        match self.backend.user_by_telegram(identity.id).await {
            Ok(user) => {
                info!(user_id = user.id, "Adopted Telegram user record");
                self.store.set(Some(user.clone())).await;
                self.state.user = Some(user);
                self.state.step = AuthStep::Done;
            }
            Err(err) => debug!(error = %err, "No backend record for Telegram user"),
        }
    }

    pub fn switch_mode(&mut self, mode: AuthMode) {
        self.state.mode = mode;
        self.state.step = AuthStep::Form;
        self.state.error = None;
    }

    pub fn set_login_email(&mut self, value: &str) {
        self.state.login_email = value.to_string();
    }

    pub fn set_login_password(&mut self, value: &str) {
        self.state.login_password = value.to_string();
    }

    pub fn set_name(&mut self, raw: &str) {
        self.state.registration.name = format_name_input(raw);
    }

    pub fn set_email(&mut self, value: &str) {
        self.state.registration.email = value.to_string();
    }

    pub fn set_phone(&mut self, raw: &str) {
        self.state.registration.phone = format_phone_input(raw);
    }

    pub fn set_birth_date(&mut self, raw: &str) {
        self.state.registration.birth_date = format_birth_date_input(raw);
    }

    pub fn set_password(&mut self, value: &str) {
        self.state.registration.password = value.to_string();
    }

    pub fn set_password_confirm(&mut self, value: &str) {
        self.state.registration.password_confirm = value.to_string();
    }

    pub fn set_code(&mut self, raw: &str) {
        self.state.code = format_code_input(raw);
    }

    /// Log in with the entered credentials.
    ///
    /// Any failure clears both fields and shows the same credentials
    /// message, whether it came from validation or the backend.
    pub async fn login(&mut self) {
        self.state.error = None;
        self.state.loading = true;

        match self.try_login().await {
            Ok(user) => {
                info!(user_id = user.id, "Logged in");
                self.store.set(Some(user.clone())).await;
                self.state.user = Some(user);
                self.state.step = AuthStep::Done;
            }
            Err(err) => {
                warn!(error = %err, "Login failed");
                self.state.error = Some(messages::INVALID_CREDENTIALS.to_string());
            }
        }

        self.state.login_email.clear();
        self.state.login_password.clear();
        self.state.loading = false;
    }

    async fn try_login(&self) -> Result<UserProfile> {
        validate_login(&self.state.login_email, &self.state.login_password)?;
        let request = LoginRequest {
            email: self.state.login_email.clone(),
            password: self.state.login_password.clone(),
        };
        self.backend
            .login(&request)
            .await?
            .into_user()
            .ok_or_else(|| NumerologyError::Api(messages::INVALID_CREDENTIALS.to_string()))
    }

    /// Register and move on to e-mail verification.
    pub async fn register(&mut self) {
        self.state.error = None;
        self.state.loading = true;

        match self.try_register().await {
            Ok(user) => {
                info!(user_id = user.id, "Registered, awaiting e-mail verification");
                self.state.user = Some(user);
                self.state.step = AuthStep::Verify;
            }
            Err(err) => {
                warn!(error = %err, "Registration failed");
                self.state.error = Some(message_or(&err, messages::REGISTRATION_FAILED));
            }
        }

        self.state.loading = false;
    }

    async fn try_register(&self) -> Result<UserProfile> {
        let form = &self.state.registration;
        form.validate()?;
        let request = self.registration_request(form);
        self.backend
            .register(&request)
            .await?
            .into_user()
            .ok_or_else(|| NumerologyError::Api(messages::REGISTRATION_FAILED.to_string()))
    }

    fn registration_request(&self, form: &RegistrationForm) -> RegisterRequest {
        let phone: String = form.phone.chars().filter(char::is_ascii_digit).collect();
        let identity = self.store.identity();

        RegisterRequest {
            name: format_name_input(&form.name),
            email: form.email.trim().to_lowercase(),
            phone: (!phone.is_empty()).then_some(phone),
            birth_date: form.birth_date.clone(),
            tariff: None,
            password: form.password.clone(),
            password_confirm: form.password_confirm.clone(),
            telegram_id: identity.as_ref().map(|i| i.id),
            telegram_username: identity.as_ref().and_then(|i| i.username.clone()),
            telegram_first_name: identity.as_ref().and_then(|i| i.first_name.clone()),
            telegram_last_name: identity.as_ref().and_then(|i| i.last_name.clone()),
            telegram_raw: identity.as_ref().and_then(|i| serde_json::to_value(i).ok()),
        }
    }

    /// Confirm the e-mail with the 6-digit code; the user becomes current.
    pub async fn verify(&mut self) {
        self.state.error = None;
        self.state.loading = true;

        match self.try_verify().await {
            Ok(user) => {
                info!(user_id = user.id, "E-mail verified");
                self.store.set(Some(user.clone())).await;
                self.state.user = Some(user);
                self.state.step = AuthStep::Done;
                self.state.code.clear();
            }
            Err(err) => {
                warn!(error = %err, "Verification failed");
                self.state.error = Some(message_or(&err, messages::INVALID_CODE));
            }
        }

        self.state.loading = false;
    }

    async fn try_verify(&self) -> Result<UserProfile> {
        validate_verification_code(&self.state.code)?;
        let request = VerifyEmailRequest {
            email: self.verification_email()?,
            code: self.state.code.clone(),
        };
        self.backend
            .verify_email(&request)
            .await?
            .into_user()
            .ok_or_else(|| NumerologyError::Api(messages::INVALID_CODE.to_string()))
    }

    /// Address the code was sent to: the registration form's, else the
    /// current user's.
    fn verification_email(&self) -> Result<String> {
        let typed = self.state.registration.email.trim().to_lowercase();
        if !typed.is_empty() {
            return Ok(typed);
        }
        self.state
            .user
            .as_ref()
            .map(|user| user.email.clone())
            .filter(|email| !email.is_empty())
            .ok_or_else(|| NumerologyError::Validation(messages::EMAIL_REQUIRED.to_string()))
    }

    /// Forget the user and reset every form.
    pub async fn logout(&mut self) {
        info!("Logged out");
        self.state = ProfilePageState::default();
        self.store.clear().await;
    }

    pub fn open_tariff_chooser(&mut self) {
        self.state.tariff_chooser_open = true;
    }

    pub fn close_tariff_chooser(&mut self) {
        self.state.tariff_chooser_open = false;
    }

    /// Switch to `tariff` and close the chooser.
    ///
    /// Without a profile a local placeholder carrying the tariff is created.
    pub async fn select_tariff(&mut self, tariff: Tariff) -> Result<()> {
        self.state.tariff_chooser_open = false;

        let result = if self.store.profile().is_some() {
            self.store.update(ProfileUpdate::tariff(tariff.clone())).await
        } else {
            debug!("No profile, creating placeholder for tariff selection");
            self.store.set(Some(UserProfile::placeholder_with_tariff(tariff.clone()))).await;
            Ok(())
        };

        match &result {
            Ok(()) => info!(tariff = %tariff, "Tariff selected"),
            Err(err) => warn!(tariff = %tariff, error = %err, "Tariff change failed"),
        }
        self.refresh_user();
        result
    }

    /// Process the picked image and store it as the avatar.
    pub async fn upload_avatar(&mut self, upload: AvatarUpload) -> Result<()> {
        let avatar_url = self.avatar.process(upload).await.inspect_err(|err| {
            warn!(error = %err, "Avatar rejected");
        })?;

        self.store.update(ProfileUpdate::avatar(avatar_url)).await?;
        info!("Avatar updated");
        self.refresh_user();
        Ok(())
    }

    fn refresh_user(&mut self) {
        if let Some(profile) = self.store.profile() {
            self.state.user = Some(profile);
            self.state.step = AuthStep::Done;
        }
    }
}
