//! Session store for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `Session` signal is created at the composition root (`App`). Views
//! receive it as a `ReadSignal<Session>`; only the bootstrapper, the auth
//! page, and logout receive a [`SessionHandle`] and may write through the
//! [`SessionStore`] interface.
//!
//! The store performs no validation and no persistence. Writers keep `user`
//! and `token` consistent and mirror the token to durable storage themselves.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

#[cfg(test)]
use std::cell::RefCell;

use leptos::prelude::*;

use crate::net::types::Identity;

/// Identity and bearer token currently held by the client.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub user: Option<Identity>,
    pub token: Option<String>,
}

impl Session {
    /// Both halves present. A lone token or lone user counts as logged out.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    pub fn username(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.username.as_str())
    }
}

/// Narrow write interface to the session.
pub trait SessionStore {
    fn snapshot(&self) -> Session;
    fn set_user(&self, user: Option<Identity>);
    fn set_token(&self, token: Option<String>);

    /// Install a validated identity and its token.
    fn commit(&self, user: Identity, token: String) {
        self.set_token(Some(token));
        self.set_user(Some(user));
    }

    fn clear(&self) {
        self.set_user(None);
        self.set_token(None);
    }
}

#[cfg(test)]
impl SessionStore for RefCell<Session> {
    fn snapshot(&self) -> Session {
        self.borrow().clone()
    }

    fn set_user(&self, user: Option<Identity>) {
        self.borrow_mut().user = user;
    }

    fn set_token(&self, token: Option<String>) {
        self.borrow_mut().token = token;
    }
}

/// Writer capability over the app-wide session signal.
#[derive(Clone, Copy, Debug)]
pub struct SessionHandle(RwSignal<Session>);

impl SessionHandle {
    pub fn new(signal: RwSignal<Session>) -> Self {
        Self(signal)
    }

    /// Read-only view handed to consumers.
    pub fn reader(&self) -> ReadSignal<Session> {
        self.0.read_only()
    }
}

impl SessionStore for SessionHandle {
    fn snapshot(&self) -> Session {
        self.0.get_untracked()
    }

    fn set_user(&self, user: Option<Identity>) {
        self.0.update(|s| s.user = user);
    }

    fn set_token(&self, token: Option<String>) {
        self.0.update(|s| s.token = token);
    }

    // Single notification so readers never observe a half-written session.
    fn commit(&self, user: Identity, token: String) {
        self.0.set(Session { user: Some(user), token: Some(token) });
    }

    fn clear(&self) {
        self.0.set(Session::default());
    }
}
