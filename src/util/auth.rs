//! Session flows: bootstrap, login/register submission, logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! These are the only code paths that write the session. Each is generic over
//! the backend ([`AuthApi`]), durable storage ([`TokenStorage`]), and the
//! store ([`SessionStore`]) so pages pass in browser implementations and
//! tests pass in fakes.
//!
//! TRADE-OFFS
//! ==========
//! Bootstrap treats any failed validation, network errors included, as
//! "logged out" and discards the stored token. There is no retry.
//! Logout never waits on the backend succeeding: the remote revocation is
//! best-effort and local state is always cleared.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::api::{ApiError, AuthApi};
use crate::net::types::{Identity, LoginRequest, RegisterRequest};
use crate::state::auth_form::{AuthMode, AuthRequest};
use crate::state::session::SessionStore;
use crate::util::token_storage::TokenStorage;

/// User-facing auth failure. `Display` is the message shown on the form.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Username and password are required.")]
    MissingCredentials,
    #[error("Communication with the server failed.")]
    Network,
    #[error("{0}")]
    Rejected(String),
    #[error("Failed to fetch user profile.")]
    Profile,
}

impl AuthError {
    fn from_api(err: &ApiError, mode: AuthMode) -> Self {
        match err {
            ApiError::Network(_) | ApiError::Unavailable => Self::Network,
            ApiError::Rejected { detail: Some(detail), .. } => Self::Rejected(detail.clone()),
            ApiError::Rejected { detail: None, .. } | ApiError::Decode(_) => {
                Self::Rejected(format!("{} failed", mode.label()))
            }
        }
    }
}

/// Successful submission result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Session committed; the page should navigate home.
    LoggedIn(Identity),
    /// Account created; no session.
    Registered,
}

/// Result of the startup validation pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BootstrapOutcome {
    NoToken,
    Restored(Identity),
    /// Stored token rejected or unverifiable; it has been removed.
    Discarded(ApiError),
}

/// Restore the session from a persisted token.
///
/// Run once at mount. The store is written only on success, so the
/// validation window reads as unauthenticated.
pub async fn bootstrap_session<A, T, S>(api: &A, storage: &T, store: &S) -> BootstrapOutcome
where
    A: AuthApi,
    T: TokenStorage,
    S: SessionStore,
{
    let Some(token) = storage.load() else {
        return BootstrapOutcome::NoToken;
    };

    match api.fetch_profile(&token).await {
        Ok(profile) => {
            let user = profile.identity();
            store.commit(user.clone(), token);
            leptos::logging::log!("session restored for {}", user.username);
            BootstrapOutcome::Restored(user)
        }
        Err(e) => {
            storage.clear();
            store.clear();
            leptos::logging::warn!("stored session discarded: {e}");
            BootstrapOutcome::Discarded(e)
        }
    }
}

/// Dispatch a validated form submission.
///
/// # Errors
///
/// Returns the user-facing [`AuthError`] for any failed step.
pub async fn submit_auth<A, T, S>(
    api: &A,
    storage: &T,
    store: &S,
    request: AuthRequest,
) -> Result<AuthOutcome, AuthError>
where
    A: AuthApi,
    T: TokenStorage,
    S: SessionStore,
{
    match request {
        AuthRequest::Login(req) => login(api, storage, store, &req).await.map(AuthOutcome::LoggedIn),
        AuthRequest::Register(req) => register(api, &req).await.map(|()| AuthOutcome::Registered),
    }
}

/// Exchange credentials for a token, resolve the identity, then commit both.
///
/// Nothing is persisted or stored unless the identity lookup succeeds.
///
/// # Errors
///
/// Returns [`AuthError::Rejected`] for refused credentials,
/// [`AuthError::Profile`] when the follow-up identity lookup fails, and
/// [`AuthError::Network`] when the backend is unreachable.
pub async fn login<A, T, S>(api: &A, storage: &T, store: &S, request: &LoginRequest) -> Result<Identity, AuthError>
where
    A: AuthApi,
    T: TokenStorage,
    S: SessionStore,
{
    let token = api
        .login(request)
        .await
        .map_err(|e| AuthError::from_api(&e, AuthMode::Login))?
        .access_token;

    let profile = api.fetch_profile(&token).await.map_err(|e| {
        leptos::logging::warn!("profile lookup after login failed: {e}");
        AuthError::Profile
    })?;

    let user = profile.identity();
    if let Err(e) = storage.save(&token) {
        // The in-memory session still holds for this page load.
        leptos::logging::warn!("token not persisted, session will not survive reload: {e}");
    }
    store.commit(user.clone(), token);
    Ok(user)
}

/// Create an account. Never touches the session.
///
/// # Errors
///
/// Returns [`AuthError::Rejected`] (e.g. duplicate username) or
/// [`AuthError::Network`].
pub async fn register<A: AuthApi>(api: &A, request: &RegisterRequest) -> Result<(), AuthError> {
    api.register(request)
        .await
        .map_err(|e| AuthError::from_api(&e, AuthMode::Register))
}

/// Revoke the session remotely when possible, then always clear it locally.
///
/// With no token held this makes no remote call.
pub async fn logout<A, T, S>(api: &A, storage: &T, store: &S)
where
    A: AuthApi,
    T: TokenStorage,
    S: SessionStore,
{
    if let Some(token) = store.snapshot().token.or_else(|| storage.load()) {
        if let Err(e) = api.logout(&token).await {
            // The token may already be invalid server-side.
            leptos::logging::warn!("logout request failed: {e}");
        }
    }
    storage.clear();
    store.clear();
}
