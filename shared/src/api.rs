use serde_json::Value;

use crate::constants::{CONTENT_TYPE_JSON, HEADER_AUTHORIZATION, HEADER_CONTENT_TYPE};
use crate::errors::ApiError;
use crate::transport::Transport;
use crate::types::{Config, CreateNoteRequest, HttpMethod, HttpRequest, HttpResponse, Note};
use crate::utils::{bearer_value, is_success, note_path, notes_path};

/// Notes API bound to one config and one token for the duration of an action.
pub struct ApiClient<'a, T> {
    transport: &'a T,
    config: &'a Config,
    token: String,
}

impl<'a, T: Transport> ApiClient<'a, T> {
    pub fn new(transport: &'a T, config: &'a Config, token: &str) -> Self {
        Self {
            transport,
            config,
            token: token.to_string(),
        }
    }

    pub async fn list_notes(&self) -> Result<Vec<Note>, ApiError> {
        let path = notes_path();
        let response = self.call(HttpMethod::Get, &path, &path, None).await?;
        parse_notes(&response.body).map_err(|description| ApiError::MalformedResponse {
            method: HttpMethod::Get,
            path,
            description,
        })
    }

    /// Returns `Ok(false)` without touching the network when `text` is blank.
    pub async fn create_note(&self, text: &str) -> Result<bool, ApiError> {
        if text.trim().is_empty() {
            return Ok(false);
        }
        let path = notes_path();
        let body = serde_json::to_string(&CreateNoteRequest { text })
            .map_err(|err| ApiError::MalformedResponse {
                method: HttpMethod::Post,
                path: path.clone(),
                description: err.to_string(),
            })?;
        self.call(HttpMethod::Post, &path, &path, Some(body)).await?;
        Ok(true)
    }

    pub async fn delete_note(&self, note_id: &str) -> Result<(), ApiError> {
        let display_path = format!("{}/{note_id}", notes_path());
        self.call(HttpMethod::Delete, &note_path(note_id), &display_path, None).await?;
        Ok(())
    }

    async fn call(&self, method: HttpMethod, path: &str, display_path: &str, body: Option<String>)
                  -> Result<HttpResponse, ApiError> {
        let mut request = HttpRequest::new(method, self.config.url(path))
            .header(HEADER_CONTENT_TYPE, CONTENT_TYPE_JSON);
        if let Some(bearer) = bearer_value(&self.token) {
            request = request.header(HEADER_AUTHORIZATION, &bearer);
        }
        if let Some(body) = body {
            request = request.body(body);
        }

        log::debug!("{method} {display_path}");
        let response = self.transport.send(request).await
            .map_err(|err| ApiError::NetworkFailure {
                method,
                path: display_path.to_string(),
                description: err.to_string(),
            })?;

        if !is_success(response.status) {
            return Err(ApiError::HttpStatus {
                method,
                path: display_path.to_string(),
                status: response.status,
                body: response.body,
            });
        }
        Ok(response)
    }
}

/// Reads the `items` array of a list response. A missing or non-array
/// `items` means an empty collection; only a non-JSON body is an error.
pub fn parse_notes(body: &str) -> Result<Vec<Note>, String> {
    let value: Value = serde_json::from_str(body).map_err(|err| err.to_string())?;
    let items = match value.get("items") {
        Some(Value::Array(items)) => items,
        _ => return Ok(vec![]),
    };
    Ok(items.iter()
        .filter_map(|item| match serde_json::from_value::<Note>(item.clone()) {
            Ok(note) => Some(note),
            Err(err) => {
                log::warn!("skipping note entry {item}: {err}");
                None
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use crate::testing::RecordingTransport;

    use super::*;

    fn config() -> Config {
        Config { api_base: "https://api.x/y".to_string(), ..Config::default() }
    }

    #[test]
    fn test_list_notes() {
        let transport = RecordingTransport::new();
        transport.respond(200, r#"{"items":[{"noteId":"n_1","text":"first","createdAt":1718000000},{"noteId":"n_2","text":"second","createdAt":"1718000100"}]}"#);
        let config = config();
        let client = ApiClient::new(&transport, &config, "abc123");

        let notes = block_on(client.list_notes()).unwrap();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].note_id, "n_1");
        assert_eq!(notes[1].text, "second");

        let request = &transport.requests()[0];
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.url, "https://api.x/y/notes");
        assert_eq!(request.header_value("authorization"), Some("Bearer abc123"));
        assert_eq!(request.header_value("content-type"), Some("application/json"));
        assert_eq!(request.body, None);
    }

    #[test]
    fn test_list_notes_without_items_is_empty() {
        assert!(parse_notes("{}").unwrap().is_empty());
        assert!(parse_notes(r#"{"items":null}"#).unwrap().is_empty());
        assert!(parse_notes(r#"{"items":"n_1"}"#).unwrap().is_empty());
        assert!(parse_notes(r#"{"items":{"noteId":"n_1"}}"#).unwrap().is_empty());
        assert!(parse_notes("[]").unwrap().is_empty());
    }

    #[test]
    fn test_list_notes_skips_broken_entries() {
        let notes = parse_notes(r#"{"items":[{"text":"no id"},7,{"noteId":"n_9","text":"ok"}]}"#).unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].note_id, "n_9");
    }

    #[test]
    fn test_list_notes_not_json() {
        let transport = RecordingTransport::new();
        transport.respond(200, "<html>gateway</html>");
        let config = config();
        let client = ApiClient::new(&transport, &config, "t");
        assert!(matches!(block_on(client.list_notes()), Err(ApiError::MalformedResponse { .. })));
    }

    #[test]
    fn test_list_notes_http_error() {
        let transport = RecordingTransport::new();
        transport.respond(404, "not found");
        let config = config();
        let client = ApiClient::new(&transport, &config, "t");
        let err = block_on(client.list_notes()).unwrap_err();
        assert_eq!(err.to_string(), "GET /notes failed (404): not found");
    }

    #[test]
    fn test_unauthenticated_when_token_blank() {
        let transport = RecordingTransport::new();
        transport.respond(401, r#"{"message":"Unauthorized"}"#);
        let config = config();
        let client = ApiClient::new(&transport, &config, " \n ");
        let err = block_on(client.list_notes()).unwrap_err();
        assert_eq!(err.status(), Some(401));
        assert_eq!(transport.requests()[0].header_value("Authorization"), None);
    }

    #[test]
    fn test_create_note() {
        let transport = RecordingTransport::new();
        transport.respond(201, r#"{"noteId":"n_1","text":"buy milk","createdAt":1}"#);
        let config = config();
        let client = ApiClient::new(&transport, &config, "abc");

        assert_eq!(block_on(client.create_note("buy milk")), Ok(true));
        let request = &transport.requests()[0];
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, "https://api.x/y/notes");
        assert_eq!(request.body.as_deref(), Some(r#"{"text":"buy milk"}"#));
        assert_eq!(request.header_value("Authorization"), Some("Bearer abc"));
    }

    #[test]
    fn test_create_blank_note_is_noop() {
        let transport = RecordingTransport::new();
        let config = config();
        let client = ApiClient::new(&transport, &config, "abc");
        assert_eq!(block_on(client.create_note("")), Ok(false));
        assert_eq!(block_on(client.create_note("  \n\t ")), Ok(false));
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn test_create_note_http_error() {
        let transport = RecordingTransport::new();
        transport.respond(400, r#"{"error": "text is required"}"#);
        let config = config();
        let client = ApiClient::new(&transport, &config, "abc");
        let err = block_on(client.create_note("x")).unwrap_err();
        assert_eq!(err.to_string(), r#"POST /notes failed (400): {"error": "text is required"}"#);
    }

    #[test]
    fn test_delete_note_encodes_id() {
        let transport = RecordingTransport::new();
        transport.respond(200, r#"{"deleted":"a/b c"}"#);
        let config = config();
        let client = ApiClient::new(&transport, &config, "abc");

        assert_eq!(block_on(client.delete_note("a/b c")), Ok(()));
        let request = &transport.requests()[0];
        assert_eq!(request.method, HttpMethod::Delete);
        assert_eq!(request.url, "https://api.x/y/notes/a%2Fb%20c");
        assert_eq!(request.body, None);
    }

    #[test]
    fn test_delete_note_network_failure() {
        let transport = RecordingTransport::new();
        transport.fail("TypeError: Failed to fetch");
        let config = config();
        let client = ApiClient::new(&transport, &config, "abc");
        let err = block_on(client.delete_note("n_1")).unwrap_err();
        assert_eq!(err, ApiError::NetworkFailure {
            method: HttpMethod::Delete,
            path: "/notes/n_1".to_string(),
            description: "TypeError: Failed to fetch".to_string(),
        });
    }
}
