//! App shell: tab navigation, header and cross-page actions
//!
//! The shell owns the four page controllers for the lifetime of the session,
//! so page state survives tab switches.

use std::sync::Arc;

use numerolog_domain::constants::{messages, GUEST_LABEL};
use numerolog_domain::{impl_domain_tag_conversions, NumerologyError, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::backend::BackendApi;
use crate::pages::{AiPage, CalculatorsPage, MatrixPage, ProfilePage};
use crate::user::{AvatarProcessor, ProfileStore};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Matrix,
    Calculators,
    Ai,
    Profile,
}

impl_domain_tag_conversions!(Tab {
    Matrix => "matrix",
    Calculators => "calculators",
    Ai => "ai",
    Profile => "profile",
});

/// What the header shows for the current user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderView {
    pub label: String,
    /// Picture source when the user has one.
    pub avatar_url: Option<String>,
    /// Fallback shown instead of the picture.
    pub initials: String,
    pub menu_open: bool,
}

pub struct AppShell {
    store: Arc<ProfileStore>,
    tab: Tab,
    user_menu_open: bool,
    matrix: MatrixPage,
    calculators: CalculatorsPage,
    ai: AiPage,
    profile: ProfilePage,
}

impl AppShell {
    pub fn new(
        backend: Arc<dyn BackendApi>,
        store: Arc<ProfileStore>,
        avatar: Arc<dyn AvatarProcessor>,
        support_url: Option<String>,
    ) -> Self {
        Self {
            matrix: MatrixPage::new(Arc::clone(&backend), Arc::clone(&store)),
            calculators: CalculatorsPage::new(Arc::clone(&backend), Arc::clone(&store)),
            ai: AiPage::new(Arc::clone(&backend), Arc::clone(&store)),
            profile: ProfilePage::new(backend, Arc::clone(&store), avatar, support_url),
            store,
            tab: Tab::default(),
            user_menu_open: false,
        }
    }

    /// Load the session's profile and let every page pick up its defaults.
    pub async fn start(&mut self) {
        self.store.load_from_identity().await;
        self.matrix.prefill_from_profile();
        self.calculators.prefill_from_profile();
        self.ai.prefill_from_backend().await;
        self.profile.mount().await;
        info!(has_profile = self.store.profile().is_some(), "Session started");
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        debug!(from = %self.tab, to = %tab, "Switching tab");
        self.tab = tab;
        match tab {
            Tab::Matrix => self.matrix.prefill_from_profile(),
            Tab::Calculators => self.calculators.prefill_from_profile(),
            Tab::Ai => {}
            Tab::Profile => self.profile.sync_with_store(),
        }
    }

    pub fn header(&self) -> HeaderView {
        let profile = self.store.profile();
        HeaderView {
            label: profile
                .as_ref()
                .map_or_else(|| GUEST_LABEL.to_string(), |p| format!("👤 {}", p.name)),
            avatar_url: profile.as_ref().and_then(|p| p.avatar_url.clone()),
            initials: profile.as_ref().map(|p| p.initials()).unwrap_or_default(),
            menu_open: self.user_menu_open,
        }
    }

    pub fn toggle_user_menu(&mut self) {
        self.user_menu_open = !self.user_menu_open;
    }

    pub fn close_user_menu(&mut self) {
        self.user_menu_open = false;
    }

    /// Seed every date field with the profile birth date and open `target`.
    pub fn calculate_for_me(&mut self, target: Tab) -> Result<()> {
        let birth_date = self
            .store
            .profile()
            .filter(|p| p.has_birth_date())
            .map(|p| p.birth_date)
            .ok_or_else(|| NumerologyError::Validation(messages::BIRTH_DATE_MISSING.to_string()))?;

        self.matrix.seed_date(&birth_date);
        self.calculators.seed_date(&birth_date);
        self.ai.seed_date(&birth_date);
        self.close_user_menu();
        self.switch_tab(target);
        Ok(())
    }

    /// Calculators upsell: jump to the profile tab with the tariff chooser open.
    pub fn go_to_tariffs(&mut self) {
        self.switch_tab(Tab::Profile);
        self.profile.open_tariff_chooser();
    }

    pub fn store(&self) -> &Arc<ProfileStore> {
        &self.store
    }

    pub fn matrix(&self) -> &MatrixPage {
        &self.matrix
    }

    pub fn matrix_mut(&mut self) -> &mut MatrixPage {
        &mut self.matrix
    }

    pub fn calculators(&self) -> &CalculatorsPage {
        &self.calculators
    }

    pub fn calculators_mut(&mut self) -> &mut CalculatorsPage {
        &mut self.calculators
    }

    pub fn ai(&self) -> &AiPage {
        &self.ai
    }

    pub fn ai_mut(&mut self) -> &mut AiPage {
        &mut self.ai
    }

    pub fn profile(&self) -> &ProfilePage {
        &self.profile
    }

    pub fn profile_mut(&mut self) -> &mut ProfilePage {
        &mut self.profile
    }
}
