//! Session commands: start-up, navigation and the header

use numerolog_core::{HeaderView, Tab};
use numerolog_domain::UserProfile;
use serde::Serialize;
use tracing::info;

use crate::context::AppContext;
use crate::utils::command_helpers::execute_with_string_error;

/// What the shell shows around the active page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub tab: Tab,
    pub header: HeaderView,
    pub profile: Option<UserProfile>,
    /// Last profile load or update failure.
    pub profile_error: Option<String>,
}

async fn snapshot(ctx: &AppContext) -> SessionSnapshot {
    let shell = ctx.shell().await;
    SessionSnapshot {
        tab: shell.tab(),
        header: shell.header(),
        profile: ctx.store.profile(),
        profile_error: ctx.store.snapshot().error,
    }
}

/// Load the Telegram user's profile and prefill every page.
pub async fn start_session(ctx: &AppContext) -> Result<SessionSnapshot, String> {
    execute_with_string_error("session::start_session", || async {
        ctx.shell().await.start().await;
        Ok(snapshot(ctx).await)
    })
    .await
}

pub async fn get_session(ctx: &AppContext) -> Result<SessionSnapshot, String> {
    execute_with_string_error("session::get_session", || async { Ok(snapshot(ctx).await) }).await
}

pub async fn switch_tab(ctx: &AppContext, tab: Tab) -> Result<SessionSnapshot, String> {
    execute_with_string_error("session::switch_tab", || async {
        ctx.shell().await.switch_tab(tab);
        Ok(snapshot(ctx).await)
    })
    .await
}

pub async fn toggle_user_menu(ctx: &AppContext) -> Result<SessionSnapshot, String> {
    execute_with_string_error("session::toggle_user_menu", || async {
        ctx.shell().await.toggle_user_menu();
        Ok(snapshot(ctx).await)
    })
    .await
}

/// Seed every date field with the profile birth date and open `target`.
pub async fn calculate_for_me(ctx: &AppContext, target: Tab) -> Result<SessionSnapshot, String> {
    execute_with_string_error("session::calculate_for_me", || async {
        ctx.shell().await.calculate_for_me(target)?;
        info!(target = %target, "Dates seeded from profile");
        Ok(snapshot(ctx).await)
    })
    .await
}

/// Open the profile tab with the tariff chooser shown.
pub async fn go_to_tariffs(ctx: &AppContext) -> Result<SessionSnapshot, String> {
    execute_with_string_error("session::go_to_tariffs", || async {
        ctx.shell().await.go_to_tariffs();
        Ok(snapshot(ctx).await)
    })
    .await
}
