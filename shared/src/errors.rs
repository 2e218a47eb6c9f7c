use thiserror::Error;

use crate::types::HttpMethod;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("config.json fetch failed ({0})")]
    FetchFailed(String),
    #[error("config.json is not valid JSON: {0}")]
    MalformedResponse(String),
    #[error("config.json missing {0}")]
    MissingField(&'static str),
}

/// Failure of a single notes API call. `path` is the readable request path,
/// e.g. `/notes/n_42`, not the percent-encoded one.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("{method} {path} failed ({status}): {body}")]
    HttpStatus {
        method: HttpMethod,
        path: String,
        status: u16,
        body: String,
    },
    #[error("{method} {path} failed: {description}")]
    NetworkFailure {
        method: HttpMethod,
        path: String,
        description: String,
    },
    #[error("{method} {path} returned an unreadable body: {description}")]
    MalformedResponse {
        method: HttpMethod,
        path: String,
        description: String,
    },
}

impl ApiError {
    #[cfg(test)]
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("local storage rejected the write: {0}")]
    WriteFailed(String),
}

/// Error raised by a [`crate::transport::Transport`] when no response was received.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct TransportError(pub String);
