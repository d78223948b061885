//! Application context - dependency injection container

use std::sync::Arc;

use numerolog_core::{AppShell, AvatarProcessor, BackendApi, IdentityProvider, ProfileStore};
use numerolog_domain::{Config, Result};
use numerolog_infra::{config, ApiClient, HttpBackend, ImageAvatarProcessor, StaticIdentityProvider};
use tokio::sync::{Mutex, MutexGuard};

/// Application context - holds all services and the session shell
pub struct AppContext {
    pub config: Config,
    pub backend: Arc<dyn BackendApi>,
    pub store: Arc<ProfileStore>,
    pub avatar: Arc<dyn AvatarProcessor>,
    shell: Mutex<AppShell>,
}

impl AppContext {
    /// Create a context from the environment / config file, with the
    /// Telegram identity taken from `NUMEROLOG_TELEGRAM_USER`.
    pub fn new() -> Result<Self> {
        Self::new_with_config(config::load()?)
    }

    /// Create a context for an explicit configuration.
    pub fn new_with_config(config: Config) -> Result<Self> {
        Self::new_with_identity(config, Arc::new(StaticIdentityProvider::from_env()))
    }

    /// Create a context for an explicit configuration and identity source.
    pub fn new_with_identity(config: Config, identity: Arc<dyn IdentityProvider>) -> Result<Self> {
        let backend: Arc<dyn BackendApi> =
            Arc::new(HttpBackend::new(ApiClient::new(&config.api)?));
        tracing::info!(
            base_url = %config.api.base_url,
            has_identity = identity.identity().is_some(),
            "Application context initialised"
        );

        Ok(Self::from_parts(config, backend, identity, Arc::new(ImageAvatarProcessor::new())))
    }

    /// Assemble a context from already-built services.
    pub fn from_parts(
        config: Config,
        backend: Arc<dyn BackendApi>,
        identity: Arc<dyn IdentityProvider>,
        avatar: Arc<dyn AvatarProcessor>,
    ) -> Self {
        let store = Arc::new(ProfileStore::new(Arc::clone(&backend), identity));
        let shell = AppShell::new(
            Arc::clone(&backend),
            Arc::clone(&store),
            Arc::clone(&avatar),
            config.support_url.clone(),
        );

        Self { config, backend, store, avatar, shell: Mutex::new(shell) }
    }

    /// Exclusive access to the session shell and its pages.
    pub async fn shell(&self) -> MutexGuard<'_, AppShell> {
        self.shell.lock().await
    }
}
