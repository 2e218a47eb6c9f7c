use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use futures_signals::signal::Mutable;

use crate::errors::{StorageError, TransportError};
use crate::transport::{TokenStorage, Transport};
use crate::types::{HttpRequest, HttpResponse};

/// Replays queued responses in order and remembers every request sent.
#[derive(Default)]
pub struct RecordingTransport {
    responses: RefCell<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: RefCell<Vec<HttpRequest>>,
    loading: RefCell<Option<Mutable<bool>>>,
    loading_seen: RefCell<Vec<bool>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, response: Result<HttpResponse, TransportError>) {
        self.responses.borrow_mut().push_back(response);
    }

    pub fn respond(&self, status: u16, body: &str) {
        self.push(Ok(HttpResponse::new(status, body)));
    }

    pub fn fail(&self, description: &str) {
        self.push(Err(TransportError(description.to_string())));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn pending(&self) -> usize {
        self.responses.borrow().len()
    }

    /// Records the value of `loading` at the moment each request goes out.
    pub fn watch_loading(&self, loading: Mutable<bool>) {
        *self.loading.borrow_mut() = Some(loading);
    }

    pub fn loading_seen(&self) -> Vec<bool> {
        self.loading_seen.borrow().clone()
    }
}

impl Transport for RecordingTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        if let Some(loading) = self.loading.borrow().as_ref() {
            self.loading_seen.borrow_mut().push(loading.get());
        }
        self.requests.borrow_mut().push(request);
        self.responses.borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no scripted response".to_string())))
    }
}

#[derive(Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
    read_only: bool,
}

impl MemoryStorage {
    /// Every write fails, like a browser with storage quota exhausted.
    pub fn read_only() -> Self {
        Self { read_only: true, ..Self::default() }
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage.items.borrow_mut().insert(key.to_string(), value.to_string());
        storage
    }

    pub fn item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl TokenStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::WriteFailed("QuotaExceededError".to_string()));
        }
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}
