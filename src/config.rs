//! Build-time backend configuration.
//!
//! The backend base URL is baked into the WASM bundle at compile time from
//! `JOBPILOT_API_URL`; there is no runtime config surface in the browser.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Third-party IP geolocation lookup used to localize curated listings.
pub const GEOLOCATION_URL: &str = "https://ipapi.co/json/";

/// Backend base URL with any trailing slash removed.
pub fn api_base_url() -> &'static str {
    normalize_base_url(option_env!("JOBPILOT_API_URL").unwrap_or(DEFAULT_API_URL))
}

/// Absolute URL for a backend `path` (leading slash expected).
pub fn endpoint(path: &str) -> String {
    join_url(api_base_url(), path)
}

fn normalize_base_url(raw: &str) -> &str {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_API_URL } else { trimmed }
}

fn join_url(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}
