use futures_signals::map_ref;
use futures_signals::signal::{Signal, SignalExt};

use crate::api::ApiClient;
use crate::config::load_config;
use crate::credentials::CredentialStore;
use crate::errors::ApiError;
use crate::state::{AppState, LoadingGuard};
use crate::transport::{TokenStorage, Transport};
use crate::types::{Config, Readiness};
use crate::utils::normalize_token;

/// The notes client: state plus the actions the view dispatches.
///
/// Every note action clears the previous error, holds `loading` for its whole
/// duration and reports failures through `state.error`. Nothing is returned to
/// the caller, so the view can fire an action and forget it.
pub struct App<T, S> {
    pub state: AppState,
    transport: T,
    credentials: CredentialStore<S>,
}

impl<T: Transport, S: TokenStorage> App<T, S> {
    pub fn new(transport: T, storage: S) -> Self {
        let credentials = CredentialStore::new(storage);
        let state = AppState::default();
        state.token_input.set(credentials.read());
        Self {
            state,
            transport,
            credentials,
        }
    }

    /// The token in use is whatever is in the input right now; saving only persists it.
    pub fn token(&self) -> String {
        normalize_token(&self.state.token_input.lock_ref())
    }

    /// Runs on mount and on "Reload config". Replaces the config wholesale.
    pub async fn load_config(&self) {
        self.state.config_error.set(String::new());
        match load_config(&self.transport).await {
            Ok(config) => {
                log::info!("config loaded, api base {}", config.api_base);
                self.state.config.set(Some(config));
            }
            Err(err) => {
                log::error!("{err}");
                self.state.config.set(None);
                self.state.config_error.set(err.to_string());
            }
        }
    }

    pub async fn save_token(&self) {
        let token = self.credentials.write(&self.state.token_input.get_cloned());
        log::info!("token saved ({} chars)", token.len());
        self.state.token_input.set(token);
        if self.ready_config().is_some() {
            self.refresh().await;
        }
    }

    pub fn clear_token(&self) {
        self.credentials.clear();
        self.state.token_input.set(String::new());
        self.state.notes.lock_mut().clear();
        log::info!("token cleared");
    }

    pub async fn refresh(&self) {
        let Some(config) = self.ready_config() else { return };
        let Some(_guard) = self.begin("refresh") else { return };
        self.fetch_notes(&config).await;
    }

    pub async fn create_note(&self) {
        let Some(config) = self.ready_config() else { return };
        let text = self.state.draft_text.get_cloned();
        if text.trim().is_empty() {
            return;
        }
        let Some(_guard) = self.begin("create") else { return };
        match self.client(&config).create_note(&text).await {
            Ok(true) => {
                self.state.draft_text.set(String::new());
                self.fetch_notes(&config).await;
            }
            Ok(false) => {}
            Err(err) => self.fail(err),
        }
    }

    pub async fn delete_note(&self, note_id: &str) {
        let Some(config) = self.ready_config() else { return };
        let Some(_guard) = self.begin("delete") else { return };
        match self.client(&config).delete_note(note_id).await {
            Ok(()) => {
                self.fetch_notes(&config).await;
            }
            Err(err) => self.fail(err),
        }
    }

    // === control state

    pub fn can_refresh(&self) -> bool {
        self.state.readiness() == Readiness::ConfigReady && !self.token().is_empty() && !self.state.loading.get()
    }

    #[cfg(test)]
    pub fn can_save_token(&self) -> bool {
        self.state.readiness() == Readiness::ConfigReady
            && !self.state.token_input.lock_ref().trim().is_empty()
            && !self.state.loading.get()
    }

    /// Create and refresh need a ready config, a token, and no action in flight.
    pub fn signal_can_refresh(&self) -> impl Signal<Item=bool> {
        map_ref! {
            let ready = self.state.signal_ready(),
            let has_token = self.signal_has_token(),
            let loading = self.state.loading.signal() =>
            *ready && *has_token && !*loading
        }.dedupe()
    }

    pub fn signal_can_save_token(&self) -> impl Signal<Item=bool> {
        map_ref! {
            let ready = self.state.signal_ready(),
            let has_input = self.state.token_input.signal_ref(|text| !text.trim().is_empty()),
            let loading = self.state.loading.signal() =>
            *ready && *has_input && !*loading
        }.dedupe()
    }

    pub fn signal_has_token(&self) -> impl Signal<Item=bool> {
        self.state.token_input.signal_ref(|text| !normalize_token(text).is_empty()).dedupe()
    }

    // ===

    fn ready_config(&self) -> Option<Config> {
        self.state.config.lock_ref().as_ref().filter(|config| config.is_ready()).cloned()
    }

    fn client<'a>(&'a self, config: &'a Config) -> ApiClient<'a, T> {
        ApiClient::new(&self.transport, config, &self.token())
    }

    fn begin(&self, action: &str) -> Option<LoadingGuard<'_>> {
        match LoadingGuard::acquire(&self.state.loading) {
            Some(guard) => {
                self.state.error.set(String::new());
                Some(guard)
            }
            None => {
                log::debug!("{action} ignored, another request is in flight");
                None
            }
        }
    }

    async fn fetch_notes(&self, config: &Config) {
        match self.client(config).list_notes().await {
            Ok(notes) => {
                log::debug!("{} notes loaded", notes.len());
                self.state.notes.lock_mut().replace_cloned(notes);
            }
            Err(err) => self.fail(err),
        }
    }

    fn fail(&self, err: ApiError) {
        log::error!("{err}");
        self.state.error.set(err.to_string());
    }
}
