//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: every call resolves to
//! `ApiError::Unavailable` since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so auth/profile/job fetch
//! failures degrade into view state without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use serde::de::DeserializeOwned;

use super::types::{CuratedJob, JobListing, LoginRequest, Profile, RegisterRequest, TokenResponse};

/// Transport-level failure of a backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS).
    #[error("request failed: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("request rejected: {status}{}", detail_suffix(.detail.as_deref()))]
    Rejected { status: u16, detail: Option<String> },
    /// A 2xx body did not match the expected schema.
    #[error("response parse failed: {0}")]
    Decode(String),
    /// No browser HTTP stack in this build.
    #[error("not available on server")]
    Unavailable,
}

fn detail_suffix(detail: Option<&str>) -> String {
    detail.map(|d| format!(" ({d})")).unwrap_or_default()
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Query used for the curated "no experience" listing near `city`.
pub fn curated_query(city: &str) -> String {
    format!("no experience jobs in {}", city.trim())
}

/// Fallback city when geolocation is unavailable.
pub const DEFAULT_CITY: &str = "Manchester";

/// Pick the looked-up city, falling back to [`DEFAULT_CITY`].
pub fn resolve_city(city: Option<&str>) -> String {
    city.map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_CITY)
        .to_owned()
}

// =============================================================================
// AUTH
// =============================================================================

/// Authentication endpoints used by the session flows.
///
/// The flows in `util::auth` are generic over this trait so they can be
/// exercised natively without a browser.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// `POST /login`.
    async fn login(&self, request: &LoginRequest) -> Result<TokenResponse, ApiError>;
    /// `POST /register`.
    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError>;
    /// `GET /profile` authenticated with `token`.
    async fn fetch_profile(&self, token: &str) -> Result<Profile, ApiError>;
    /// `POST /logout` authenticated with `token`.
    async fn logout(&self, token: &str) -> Result<(), ApiError>;
}

/// [`AuthApi`] backed by the configured backend over HTTP.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpApi;

impl AuthApi for HttpApi {
    async fn login(&self, request: &LoginRequest) -> Result<TokenResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&crate::config::endpoint("/login"))
                .json(request)
                .map_err(network)?
                .send()
                .await
                .map_err(network)?;
            read_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&crate::config::endpoint("/register"))
                .json(request)
                .map_err(network)?
                .send()
                .await
                .map_err(network)?;
            if !resp.ok() {
                return Err(rejected(resp).await);
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    async fn fetch_profile(&self, token: &str) -> Result<Profile, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&crate::config::endpoint("/profile"))
                .header("Authorization", &bearer(token))
                .send()
                .await
                .map_err(network)?;
            read_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(ApiError::Unavailable)
        }
    }

    async fn logout(&self, token: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&crate::config::endpoint("/logout"))
                .header("Authorization", &bearer(token))
                .send()
                .await
                .map_err(network)?;
            if !resp.ok() {
                return Err(rejected(resp).await);
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(ApiError::Unavailable)
        }
    }
}

// =============================================================================
// CHAT
// =============================================================================

/// Send a chat turn via `POST /chat` and return the assistant reply.
///
/// # Errors
///
/// Returns an error if the request fails, is rejected, or the body is malformed.
pub async fn send_chat(user_input: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = super::types::ChatRequest { user_input: user_input.to_owned() };
        let resp = gloo_net::http::Request::post(&crate::config::endpoint("/chat"))
            .json(&payload)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        let body: super::types::AssistantReply = read_json(resp).await?;
        Ok(body.response)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_input;
        Err(ApiError::Unavailable)
    }
}

/// Upload a résumé PDF to `POST /analyze-pdf` as multipart field `file`.
///
/// # Errors
///
/// Returns an error if the form cannot be built, the request fails, or the
/// backend rejects the upload.
#[cfg(feature = "hydrate")]
pub async fn analyze_pdf(file: &web_sys::File) -> Result<String, ApiError> {
    let form = web_sys::FormData::new().map_err(|e| ApiError::Network(format!("{e:?}")))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    let resp = gloo_net::http::Request::post(&crate::config::endpoint("/analyze-pdf"))
        .body(form)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    let body: super::types::AssistantReply = read_json(resp).await?;
    Ok(body.response)
}

// =============================================================================
// JOBS
// =============================================================================

/// Search listings via `GET /api/search` with pre-built query `params`.
///
/// # Errors
///
/// Returns an error if the request fails, is rejected, or the body is malformed.
pub async fn search_jobs(params: &[(&'static str, String)]) -> Result<Vec<JobListing>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&crate::config::endpoint("/api/search"))
            .query(params.iter().map(|(k, v)| (*k, v.as_str())))
            .send()
            .await
            .map_err(network)?;
        let body: super::types::JobsEnvelope<JobListing> = read_json(resp).await?;
        Ok(body.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = params;
        Err(ApiError::Unavailable)
    }
}

/// Fetch curated entry-level listings near `city` via `GET /api/jobs`.
///
/// # Errors
///
/// Returns an error if the request fails, is rejected, or the body is malformed.
pub async fn fetch_curated_jobs(city: &str) -> Result<Vec<CuratedJob>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let query = curated_query(city);
        let resp = gloo_net::http::Request::get(&crate::config::endpoint("/api/jobs"))
            .query([("query", query.as_str())])
            .send()
            .await
            .map_err(network)?;
        let body: super::types::JobsEnvelope<CuratedJob> = read_json(resp).await?;
        Ok(body.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = city;
        Err(ApiError::Unavailable)
    }
}

/// Look up the visitor's city; never fails, falling back to [`DEFAULT_CITY`].
pub async fn lookup_visitor_city() -> String {
    #[cfg(feature = "hydrate")]
    {
        let lookup = match gloo_net::http::Request::get(crate::config::GEOLOCATION_URL).send().await {
            Ok(resp) => read_json::<super::types::GeoLookup>(resp).await.ok(),
            Err(e) => {
                leptos::logging::warn!("geolocation lookup failed: {e}");
                None
            }
        };
        resolve_city(lookup.and_then(|l| l.city).as_deref())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        resolve_city(None)
    }
}

// =============================================================================
// RESPONSE HELPERS
// =============================================================================

#[cfg(feature = "hydrate")]
#[allow(clippy::needless_pass_by_value)]
fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

#[cfg(feature = "hydrate")]
async fn rejected(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let detail = resp
        .json::<super::types::ErrorDetail>()
        .await
        .ok()
        .and_then(|body| body.detail);
    ApiError::Rejected { status, detail }
}

#[cfg(feature = "hydrate")]
async fn read_json<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(rejected(resp).await);
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}
