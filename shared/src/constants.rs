pub static CONFIG_PATH: &'static str = "/config.json";
pub static CONFIG_FIELD_API_BASE: &'static str = "apiBase";

pub static API_NOTES: &'static str = "notes";

pub static STORAGE_TOKEN_KEY: &'static str = "accessToken";

pub static HEADER_AUTHORIZATION: &'static str = "Authorization";
pub static HEADER_CONTENT_TYPE: &'static str = "Content-Type";
pub static CONTENT_TYPE_JSON: &'static str = "application/json";
pub static BEARER_PREFIX: &'static str = "Bearer ";
