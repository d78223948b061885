//! Profile commands: authentication, tariff and avatar

use std::path::Path;

use numerolog_core::{AuthMode, AuthStep, ProfilePage};
use numerolog_domain::utils::validation::RegistrationForm;
use numerolog_domain::constants::messages;
use numerolog_domain::{NumerologyError, Tariff, UserProfile};
use numerolog_infra::ImageAvatarProcessor;
use serde::Serialize;

use crate::context::AppContext;
use crate::utils::command_helpers::{execute_with_string_error, page_outcome};

/// Profile page as presented to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileView {
    pub mode: AuthMode,
    pub step: AuthStep,
    pub user: Option<UserProfile>,
    pub tariff: String,
    pub tariff_chooser_open: bool,
    pub support_url: Option<String>,
    pub error: Option<String>,
}

impl ProfileView {
    fn of(page: &ProfilePage) -> Self {
        let state = page.state();
        Self {
            mode: state.mode,
            step: state.step,
            user: state.user.clone(),
            tariff: page.tariff_display_name().to_string(),
            tariff_chooser_open: state.tariff_chooser_open,
            support_url: page.support_url().map(str::to_string),
            error: state.error.clone(),
        }
    }
}

fn outcome(page: &ProfilePage) -> numerolog_domain::Result<ProfileView> {
    let view = ProfileView::of(page);
    let error = view.error.clone();
    page_outcome(view, error.as_deref())
}

pub async fn get_profile(ctx: &AppContext) -> Result<ProfileView, String> {
    execute_with_string_error("profile::get_profile", || async {
        let mut shell = ctx.shell().await;
        let page = shell.profile_mut();
        page.mount().await;
        Ok(ProfileView::of(page))
    })
    .await
}

/// Log in with e-mail and password.
pub async fn login(ctx: &AppContext, email: &str, password: &str) -> Result<ProfileView, String> {
    execute_with_string_error("profile::login", || async {
        let mut shell = ctx.shell().await;
        let page = shell.profile_mut();
        page.switch_mode(AuthMode::Login);
        page.set_login_email(email);
        page.set_login_password(password);
        page.login().await;
        outcome(page)
    })
    .await
}

/// Register a new account; the user then has to confirm the e-mail with
/// [`verify_email`].
///
/// Name, phone and birth date are raw input and go through the same masks
/// the form applies while typing.
pub async fn register(ctx: &AppContext, form: RegistrationForm) -> Result<ProfileView, String> {
    execute_with_string_error("profile::register", || async {
        let mut shell = ctx.shell().await;
        let page = shell.profile_mut();
        page.switch_mode(AuthMode::Register);
        page.set_name(&form.name);
        page.set_email(&form.email);
        page.set_phone(&form.phone);
        page.set_birth_date(&form.birth_date);
        page.set_password(&form.password);
        page.set_password_confirm(&form.password_confirm);
        page.register().await;
        outcome(page)
    })
    .await
}

/// Confirm the registration e-mail with the 6-digit code.
///
/// `email` may be `None` when [`register`] ran in the same session.
pub async fn verify_email(
    ctx: &AppContext,
    email: Option<&str>,
    code: &str,
) -> Result<ProfileView, String> {
    execute_with_string_error("profile::verify_email", || async {
        let mut shell = ctx.shell().await;
        let page = shell.profile_mut();
        if let Some(email) = email {
            page.set_email(email);
        }
        page.set_code(code);
        page.verify().await;
        outcome(page)
    })
    .await
}

pub async fn logout(ctx: &AppContext) -> Result<ProfileView, String> {
    execute_with_string_error("profile::logout", || async {
        let mut shell = ctx.shell().await;
        let page = shell.profile_mut();
        page.logout().await;
        Ok(ProfileView::of(page))
    })
    .await
}

pub async fn forgot_password(ctx: &AppContext) -> Result<String, String> {
    execute_with_string_error("profile::forgot_password", || async {
        Ok(ctx.shell().await.profile().forgot_password().to_string())
    })
    .await
}

pub async fn select_tariff(ctx: &AppContext, tariff: Tariff) -> Result<ProfileView, String> {
    execute_with_string_error("profile::select_tariff", || async {
        let mut shell = ctx.shell().await;
        let page = shell.profile_mut();
        page.open_tariff_chooser();
        page.select_tariff(tariff).await?;
        Ok(ProfileView::of(page))
    })
    .await
}

/// Read an image from disk and make it the avatar.
pub async fn upload_avatar(ctx: &AppContext, path: &Path) -> Result<ProfileView, String> {
    execute_with_string_error("profile::upload_avatar", || async {
        if ctx.store.profile().is_none() {
            return Err(NumerologyError::Validation(messages::AVATAR_NO_PROFILE.into()));
        }
        let upload = ImageAvatarProcessor::read_upload(path).await?;
        let mut shell = ctx.shell().await;
        let page = shell.profile_mut();
        page.upload_avatar(upload).await?;
        Ok(ProfileView::of(page))
    })
    .await
}
