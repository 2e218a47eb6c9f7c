use serde_json::Value;

use crate::constants::{CONFIG_FIELD_API_BASE, CONFIG_PATH};
use crate::errors::ConfigError;
use crate::transport::Transport;
use crate::types::{Config, HttpMethod, HttpRequest};
use crate::utils::is_success;

/// Fetches `/config.json`, bypassing caches so a redeployed config is seen on reload.
pub async fn load_config<T: Transport>(transport: &T) -> Result<Config, ConfigError> {
    let request = HttpRequest::new(HttpMethod::Get, CONFIG_PATH).no_store();
    let response = transport.send(request).await
        .map_err(|err| ConfigError::FetchFailed(err.to_string()))?;

    if !is_success(response.status) {
        return Err(ConfigError::FetchFailed(response.status.to_string()));
    }

    parse_config(&response.body)
}

pub fn parse_config(body: &str) -> Result<Config, ConfigError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|err| ConfigError::MalformedResponse(err.to_string()))?;
    if !value.is_object() {
        return Err(ConfigError::MalformedResponse("expected a JSON object".to_string()));
    }
    let config: Config = serde_json::from_value(value)
        .map_err(|err| ConfigError::MalformedResponse(err.to_string()))?;
    if !config.is_ready() {
        return Err(ConfigError::MissingField(CONFIG_FIELD_API_BASE));
    }
    Ok(config)
}
