/// Strips every whitespace character, leading, trailing and interior.
/// Pasted tokens often carry line breaks from the terminal they were copied from.
pub fn normalize_token(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

pub fn bearer_value(token: &str) -> Option<String> {
    let token = normalize_token(token);
    if token.is_empty() {
        None
    } else {
        Some(format!("{}{token}", crate::constants::BEARER_PREFIX))
    }
}

pub fn trim_base(api_base: &str) -> String {
    api_base.trim().trim_end_matches('/').to_string()
}

pub fn notes_path() -> String {
    format!("/{}", crate::constants::API_NOTES)
}

pub fn note_path(note_id: &str) -> String {
    format!("/{}/{}", crate::constants::API_NOTES, urlencoding::encode(note_id))
}

pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}
