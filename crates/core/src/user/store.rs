//! Profile store - the one piece of state shared by every page
//!
//! Readers take cheap snapshots. Writers are serialised through an async
//! gate held for the whole operation, network round-trip included, so two
//! updates can never interleave their read-modify-write.

use std::sync::Arc;

use numerolog_domain::constants::messages;
use numerolog_domain::{NumerologyError, ProfileUpdate, Result, TelegramIdentity, UserProfile};
use parking_lot::RwLock;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::ports::IdentityProvider;
use crate::backend::BackendApi;

/// Observable store state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfileState {
    /// Current user, `None` for guests.
    pub profile: Option<UserProfile>,
    pub loading: bool,
    pub error: Option<String>,
}

/// How an update reaches the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UpdateRoute {
    /// Profile belongs to the current Telegram user.
    TelegramUpsert(i64),
    /// Profile has a server-assigned id.
    ById(i64),
    /// Profile only exists locally.
    Local,
}

impl UpdateRoute {
    fn for_profile(profile: &UserProfile, identity: Option<&TelegramIdentity>) -> Self {
        match identity {
            Some(identity) if profile.is_linked_to(identity) => Self::TelegramUpsert(identity.id),
            _ if profile.id > 0 => Self::ById(profile.id),
            _ => Self::Local,
        }
    }
}

/// Shared user profile state
pub struct ProfileStore {
    backend: Arc<dyn BackendApi>,
    identity: Arc<dyn IdentityProvider>,
    state: RwLock<ProfileState>,
    write_gate: Mutex<()>,
}

impl ProfileStore {
    pub fn new(backend: Arc<dyn BackendApi>, identity: Arc<dyn IdentityProvider>) -> Self {
        Self {
            backend,
            identity,
            state: RwLock::new(ProfileState::default()),
            write_gate: Mutex::new(()),
        }
    }

    pub fn snapshot(&self) -> ProfileState {
        self.state.read().clone()
    }

    pub fn profile(&self) -> Option<UserProfile> {
        self.state.read().profile.clone()
    }

    /// Telegram identity of the current session, if any.
    pub fn identity(&self) -> Option<TelegramIdentity> {
        self.identity.identity()
    }

    /// Resolve the session identity into a profile.
    ///
    /// Guests end up with no profile and no error. When the backend has no
    /// record for the identity a local profile is synthesised from it.
    pub async fn load_from_identity(&self) {
        let _gate = self.write_gate.lock().await;

        let Some(identity) = self.identity.identity() else {
            debug!("No Telegram identity, continuing as guest");
            let mut state = self.state.write();
            state.profile = None;
            state.error = None;
            return;
        };

        self.begin();
        debug!(telegram_id = identity.id, "Loading profile for Telegram identity");

        match self.backend.user_by_telegram(identity.id).await {
            Ok(mut profile) => {
                profile.overlay_identity(&identity);
                info!(telegram_id = identity.id, user_id = profile.id, "Profile loaded");
                self.finish(Some(profile));
            }
            Err(err) if err.is_not_found() => {
                info!(telegram_id = identity.id, "No backend record, using Telegram profile");
                self.finish(Some(UserProfile::from_identity(&identity)));
            }
            Err(err) => {
                warn!(telegram_id = identity.id, error = %err, "Failed to load profile");
                self.fail(&err, messages::PROFILE_LOAD_FAILED);
            }
        }
    }

    /// Apply a partial update to the current profile.
    ///
    /// Does nothing without a profile. Network routes replace the profile
    /// with the server's record; local-only profiles are merged in place.
    pub async fn update(&self, update: ProfileUpdate) -> Result<()> {
        let _gate = self.write_gate.lock().await;

        let Some(current) = self.profile() else {
            debug!("Profile update skipped: no profile");
            return Ok(());
        };

        self.begin();
        let identity = self.identity.identity();
        let route = UpdateRoute::for_profile(&current, identity.as_ref());
        debug!(?route, "Updating profile");

        let result = match route {
            UpdateRoute::TelegramUpsert(telegram_id) => {
                self.backend.upsert_user_by_telegram(telegram_id, &update).await
            }
            UpdateRoute::ById(user_id) => self.backend.update_user(user_id, &update).await,
            UpdateRoute::Local => {
                let mut merged = current;
                update.apply_to(&mut merged);
                Ok(merged)
            }
        };

        match result {
            Ok(profile) => {
                info!(user_id = profile.id, "Profile updated");
                self.finish(Some(profile));
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "Failed to update profile");
                self.fail(&err, messages::PROFILE_UPDATE_FAILED);
                Err(err)
            }
        }
    }

    /// Replace the current profile without touching the backend.
    pub async fn set(&self, profile: Option<UserProfile>) {
        let _gate = self.write_gate.lock().await;
        self.state.write().profile = profile;
    }

    /// Forget the current profile and any stored error.
    pub async fn clear(&self) {
        let _gate = self.write_gate.lock().await;
        let mut state = self.state.write();
        state.profile = None;
        state.error = None;
    }

    fn begin(&self) {
        let mut state = self.state.write();
        state.loading = true;
        state.error = None;
    }

    fn finish(&self, profile: Option<UserProfile>) {
        let mut state = self.state.write();
        state.profile = profile;
        state.loading = false;
    }

    fn fail(&self, err: &NumerologyError, fallback: &str) {
        let message = err.message();
        let mut state = self.state.write();
        state.error = Some(if message.is_empty() { fallback.to_string() } else { message });
        state.loading = false;
    }
}
