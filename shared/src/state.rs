use futures_signals::map_ref;
use futures_signals::signal::{Mutable, Signal, SignalExt};
use futures_signals::signal_vec::MutableVec;

use crate::types::{Config, Note, Readiness};

/// Everything the view shows. Owned by [`crate::app::App`] and changed only by its actions.
#[derive(Default)]
pub struct AppState {
    pub config: Mutable<Option<Config>>,
    pub config_error: Mutable<String>,
    pub notes: MutableVec<Note>,
    pub draft_text: Mutable<String>,
    pub token_input: Mutable<String>,
    pub loading: Mutable<bool>,
    pub error: Mutable<String>,
}

impl AppState {
    pub fn readiness(&self) -> Readiness {
        readiness(self.config.lock_ref().is_some(), !self.config_error.lock_ref().is_empty())
    }

    pub fn signal_readiness(&self) -> impl Signal<Item=Readiness> {
        map_ref! {
            let has_config = self.config.signal_ref(|config| config.is_some()),
            let has_error = self.config_error.signal_ref(|error| !error.is_empty()) =>
            readiness(*has_config, *has_error)
        }.dedupe()
    }

    pub fn signal_ready(&self) -> impl Signal<Item=bool> {
        self.signal_readiness().map(|state| state == Readiness::ConfigReady).dedupe()
    }

    #[cfg(test)]
    pub fn notes_snapshot(&self) -> Vec<Note> {
        self.notes.lock_ref().to_vec()
    }
}

fn readiness(has_config: bool, has_error: bool) -> Readiness {
    if has_config {
        Readiness::ConfigReady
    } else if has_error {
        Readiness::ConfigFailed
    } else {
        Readiness::ConfigLoading
    }
}

/// Holds `loading` at `true` until dropped, whichever way the action ends.
pub struct LoadingGuard<'a> {
    loading: &'a Mutable<bool>,
}

impl<'a> LoadingGuard<'a> {
    /// `None` when another action already holds the flag.
    pub fn acquire(loading: &'a Mutable<bool>) -> Option<Self> {
        if loading.replace(true) {
            None
        } else {
            Some(Self { loading })
        }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.loading.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readiness() {
        let state = AppState::default();
        assert_eq!(state.readiness(), Readiness::ConfigLoading);
        state.config_error.set("config.json fetch failed (404)".to_string());
        assert_eq!(state.readiness(), Readiness::ConfigFailed);
        state.config_error.set(String::new());
        state.config.set(Some(Config { api_base: "https://api.x".to_string(), ..Config::default() }));
        assert_eq!(state.readiness(), Readiness::ConfigReady);
    }

    #[test]
    fn test_loading_guard_releases_on_drop() {
        let loading = Mutable::new(false);
        {
            let guard = LoadingGuard::acquire(&loading);
            assert!(guard.is_some());
            assert!(loading.get());
            assert!(LoadingGuard::acquire(&loading).is_none());
            assert!(loading.get());
        }
        assert!(!loading.get());
    }

    #[test]
    fn test_loading_guard_releases_on_early_return() {
        fn fails(loading: &Mutable<bool>) -> Result<(), String> {
            let _guard = LoadingGuard::acquire(loading).ok_or("busy")?;
            Err("boom".to_string())
        }
        let loading = Mutable::new(false);
        assert_eq!(fails(&loading), Err("boom".to_string()));
        assert!(!loading.get());
    }
}
