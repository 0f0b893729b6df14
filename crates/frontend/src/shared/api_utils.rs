//! Helpers for talking to the backend API

/// Base URL of the backend serving the JSON endpoints.
///
/// Built from the current window location with the API server port, so the
/// same bundle works on localhost and behind a hostname. Without a window
/// (tests) this is an empty string and requests stay relative.
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:5000", protocol, hostname)
}

/// Full URL for an API path (paths start with `/api/`).
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
