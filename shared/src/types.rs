use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::utils::trim_base;

/// Runtime configuration served next to the client as `/config.json`.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default, deserialize_with = "nullable_text")]
    pub api_base: String,
    #[serde(default, deserialize_with = "nullable_text")]
    pub region: String,
    #[serde(default, deserialize_with = "nullable_text")]
    pub user_pool_id: String,
    #[serde(default, deserialize_with = "nullable_text")]
    pub client_id: String,
}

// Deploy scripts write `null` for outputs they could not resolve.
fn nullable_text<'de, D>(deserializer: D) -> Result<String, D::Error>
    where D: Deserializer<'de>
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Config {
    pub fn is_ready(&self) -> bool {
        !self.api_base.trim().is_empty()
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", trim_base(&self.api_base))
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub note_id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, deserialize_with = "timestamp_text")]
    pub created_at: String,
}

// The backend stores createdAt as epoch seconds, older deployments sent strings.
fn timestamp_text<'de, D>(deserializer: D) -> Result<String, D::Error>
    where D: Deserializer<'de>
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

#[derive(Debug, Serialize, Clone)]
pub struct CreateNoteRequest<'a> {
    pub text: &'a str,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match *self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    /// Bypass every HTTP cache on the way.
    pub no_store: bool,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: vec![],
            body: None,
            no_store: false,
        }
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }

    pub fn no_store(mut self) -> Self {
        self.no_store = true;
        self
    }

    #[cfg(test)]
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers.iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }
}

/// Whether the client may talk to the notes API yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    ConfigLoading,
    ConfigReady,
    ConfigFailed,
}
