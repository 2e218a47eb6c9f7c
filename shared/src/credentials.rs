use futures_signals::signal::Mutable;

use crate::constants::STORAGE_TOKEN_KEY;
use crate::transport::TokenStorage;
use crate::utils::normalize_token;

/// The single bearer token, mirrored between durable storage and memory.
pub struct CredentialStore<S> {
    storage: S,
    token: Mutable<String>,
}

impl<S: TokenStorage> CredentialStore<S> {
    /// Picks up a token persisted by an earlier session, if any.
    pub fn new(storage: S) -> Self {
        let token = storage.get_item(STORAGE_TOKEN_KEY)
            .map(|value| normalize_token(&value))
            .unwrap_or_default();
        Self {
            storage,
            token: Mutable::new(token),
        }
    }

    pub fn read(&self) -> String {
        normalize_token(&self.token.lock_ref())
    }

    pub fn write(&self, token: &str) -> String {
        let token = normalize_token(token);
        if let Err(err) = self.storage.set_item(STORAGE_TOKEN_KEY, &token) {
            log::warn!("token not persisted: {err}");
        }
        self.token.set(token.clone());
        token
    }

    pub fn clear(&self) {
        if let Err(err) = self.storage.remove_item(STORAGE_TOKEN_KEY) {
            log::warn!("token not removed from storage: {err}");
        }
        self.token.set(String::new());
    }

}

#[cfg(test)]
impl CredentialStore<crate::testing::MemoryStorage> {
    pub fn storage_item(&self) -> Option<String> {
        self.storage.item(STORAGE_TOKEN_KEY)
    }
}
