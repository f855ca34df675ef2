//! Login/register form state machine.
//!
//! DESIGN
//! ======
//! Two modes toggled in place rather than two routes. All transitions are
//! plain `&mut self` methods so the auth page only wires signals to them and
//! the behavior stays testable without a reactive runtime.

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

use crate::net::types::{LoginRequest, RegisterRequest};
use crate::util::auth::{AuthError, AuthOutcome};
use crate::util::nav::HOME_PATH;

pub const LOGIN_SUCCESS_NOTICE: &str = "Login successful!";
pub const REGISTER_SUCCESS_NOTICE: &str = "Registration successful! Please login.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }

    /// Lowercase mode name, also used in fallback error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Register => "register",
        }
    }

    pub fn submit_label(self, busy: bool) -> &'static str {
        match (self, busy) {
            (Self::Login, false) => "Login",
            (Self::Login, true) => "Logging in...",
            (Self::Register, false) => "Register",
            (Self::Register, true) => "Registering...",
        }
    }

    /// Prompt and link text for switching to the other mode.
    pub fn switch_prompt(self) -> (&'static str, &'static str) {
        match self {
            Self::Login => ("Don't have an account? ", "Register"),
            Self::Register => ("Already have an account? ", "Login"),
        }
    }
}

/// Validated submission payload for the current mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthRequest {
    Login(LoginRequest),
    Register(RegisterRequest),
}

/// Route to leave for after a submission, and the notice to carry there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Departure {
    pub path: &'static str,
    pub notice: &'static str,
}

/// Fields and status flags of the auth page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub username: String,
    /// Register mode only; optional.
    pub email: String,
    pub password: String,
    pub error: Option<String>,
    pub notice: Option<String>,
    /// Set while a request is outstanding; blocks resubmission.
    pub busy: bool,
}

impl AuthForm {
    /// Switch modes, discarding every field and message.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.reset();
    }

    pub fn reset(&mut self) {
        self.username.clear();
        self.email.clear();
        self.password.clear();
        self.error = None;
        self.notice = None;
    }

    /// Validate fields into a request without mutating the form.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingCredentials`] when username or password
    /// is blank.
    pub fn request(&self) -> Result<AuthRequest, AuthError> {
        let username = self.username.trim();
        if username.is_empty() || self.password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        let username = username.to_owned();
        let password = self.password.clone();
        Ok(match self.mode {
            AuthMode::Login => AuthRequest::Login(LoginRequest { username, password }),
            AuthMode::Register => {
                let email = self.email.trim();
                let email = (!email.is_empty()).then(|| email.to_owned());
                AuthRequest::Register(RegisterRequest { username, email, password })
            }
        })
    }

    /// Enter the busy state and hand back the request to send.
    ///
    /// Returns `None` when already busy or when validation fails; the latter
    /// records the validation message in `error`.
    pub fn begin_submit(&mut self) -> Option<AuthRequest> {
        if self.busy {
            return None;
        }
        self.error = None;
        self.notice = None;
        match self.request() {
            Ok(request) => {
                self.busy = true;
                Some(request)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    /// Leave the busy state and apply the result of a submission.
    ///
    /// A login hands back a [`Departure`]: the page navigates away and this
    /// form is dropped, so its notice has to travel with the navigation.
    pub fn finish_submit(&mut self, result: &Result<AuthOutcome, AuthError>) -> Option<Departure> {
        self.busy = false;
        match result {
            Ok(AuthOutcome::LoggedIn(_)) => {
                self.reset();
                self.notice = Some(LOGIN_SUCCESS_NOTICE.to_owned());
                Some(Departure { path: HOME_PATH, notice: LOGIN_SUCCESS_NOTICE })
            }
            Ok(AuthOutcome::Registered) => {
                self.mode = AuthMode::Login;
                self.reset();
                self.notice = Some(REGISTER_SUCCESS_NOTICE.to_owned());
                None
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }
}
