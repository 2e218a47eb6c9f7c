use crate::errors::{StorageError, TransportError};
use crate::types::{HttpRequest, HttpResponse};

/// Sends one HTTP request and hands back whatever the server answered.
/// Non-2xx statuses are not errors at this level.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Durable string storage keyed by name, e.g. `window.localStorage`.
pub trait TokenStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}
