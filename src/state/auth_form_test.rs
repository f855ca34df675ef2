use super::*;
use crate::net::types::Identity;
use crate::state::flash::Flash;

fn filled(mode: AuthMode) -> AuthForm {
    AuthForm {
        mode,
        username: "alice".into(),
        email: "alice@example.com".into(),
        password: "secret".into(),
        ..AuthForm::default()
    }
}

// =============================================================
// AuthMode
// =============================================================

#[test]
fn auth_mode_defaults_to_login() {
    assert_eq!(AuthForm::default().mode, AuthMode::Login);
}

#[test]
fn auth_mode_toggle_alternates() {
    assert_eq!(AuthMode::Login.toggled(), AuthMode::Register);
    assert_eq!(AuthMode::Register.toggled(), AuthMode::Login);
}

#[test]
fn submit_label_reflects_busy_state() {
    assert_eq!(AuthMode::Login.submit_label(false), "Login");
    assert_eq!(AuthMode::Login.submit_label(true), "Logging in...");
    assert_eq!(AuthMode::Register.submit_label(true), "Registering...");
}

// =============================================================
// Toggling
// =============================================================

#[test]
fn toggle_clears_fields_and_messages() {
    let mut form = filled(AuthMode::Login);
    form.error = Some("wrong password".into());
    form.notice = Some("hello".into());
    form.toggle_mode();
    assert_eq!(form.mode, AuthMode::Register);
    assert!(form.username.is_empty());
    assert!(form.email.is_empty());
    assert!(form.password.is_empty());
    assert!(form.error.is_none());
    assert!(form.notice.is_none());
}

// =============================================================
// Validation
// =============================================================

#[test]
fn request_requires_username_and_password() {
    let mut form = filled(AuthMode::Login);
    form.username = "   ".into();
    assert_eq!(form.request(), Err(AuthError::MissingCredentials));

    let mut form = filled(AuthMode::Login);
    form.password.clear();
    assert_eq!(form.request(), Err(AuthError::MissingCredentials));
}

#[test]
fn login_request_ignores_email() {
    let form = filled(AuthMode::Login);
    assert_eq!(
        form.request(),
        Ok(AuthRequest::Login(LoginRequest { username: "alice".into(), password: "secret".into() }))
    );
}

#[test]
fn register_request_omits_blank_email() {
    let mut form = filled(AuthMode::Register);
    form.email = "  ".into();
    let Ok(AuthRequest::Register(req)) = form.request() else {
        panic!("expected register request");
    };
    assert_eq!(req.email, None);
}

#[test]
fn register_request_trims_email_and_username() {
    let mut form = filled(AuthMode::Register);
    form.username = " alice ".into();
    form.email = " alice@example.com ".into();
    let Ok(AuthRequest::Register(req)) = form.request() else {
        panic!("expected register request");
    };
    assert_eq!(req.username, "alice");
    assert_eq!(req.email.as_deref(), Some("alice@example.com"));
}

// =============================================================
// Submission lifecycle
// =============================================================

#[test]
fn begin_submit_sets_busy_and_returns_request() {
    let mut form = filled(AuthMode::Login);
    let request = form.begin_submit();
    assert!(form.busy);
    assert!(matches!(request, Some(AuthRequest::Login(_))));
}

#[test]
fn begin_submit_refuses_while_busy() {
    let mut form = filled(AuthMode::Login);
    assert!(form.begin_submit().is_some());
    assert!(form.begin_submit().is_none());
    assert!(form.busy);
}

#[test]
fn begin_submit_with_invalid_fields_records_error_without_busy() {
    let mut form = AuthForm::default();
    assert!(form.begin_submit().is_none());
    assert!(!form.busy);
    assert_eq!(form.error.as_deref(), Some("Username and password are required."));
}

#[test]
fn finish_submit_error_keeps_fields_and_shows_message() {
    let mut form = filled(AuthMode::Login);
    form.begin_submit();
    let departure = form.finish_submit(&Err(AuthError::Rejected("Incorrect username or password".into())));
    assert_eq!(departure, None);
    assert!(!form.busy);
    assert_eq!(form.username, "alice");
    assert_eq!(form.error.as_deref(), Some("Incorrect username or password"));
}

#[test]
fn finish_submit_login_success_clears_form() {
    let mut form = filled(AuthMode::Login);
    form.begin_submit();
    form.finish_submit(&Ok(AuthOutcome::LoggedIn(Identity { username: "alice".into() })));
    assert!(!form.busy);
    assert!(form.password.is_empty());
    assert_eq!(form.notice.as_deref(), Some(LOGIN_SUCCESS_NOTICE));
}

#[test]
fn login_success_departs_home_with_notice() {
    let mut form = filled(AuthMode::Login);
    form.begin_submit();
    let departure = form.finish_submit(&Ok(AuthOutcome::LoggedIn(Identity { username: "alice".into() })));
    assert_eq!(departure, Some(Departure { path: HOME_PATH, notice: LOGIN_SUCCESS_NOTICE }));
}

#[test]
fn login_notice_outlives_the_form_it_came_from() {
    let mut flash = Flash::default();
    {
        let mut form = filled(AuthMode::Login);
        form.begin_submit();
        let result = Ok(AuthOutcome::LoggedIn(Identity { username: "alice".into() }));
        if let Some(departure) = form.finish_submit(&result) {
            flash.show(departure.notice);
        }
    }
    // The page's form is gone after navigation; the notice is not.
    assert_eq!(flash.message(), Some("Login successful!"));
}

#[test]
fn register_success_switches_to_login_with_empty_fields() {
    let mut form = filled(AuthMode::Register);
    form.begin_submit();
    assert_eq!(form.finish_submit(&Ok(AuthOutcome::Registered)), None);
    assert_eq!(form.mode, AuthMode::Login);
    assert!(form.username.is_empty());
    assert!(form.email.is_empty());
    assert!(form.password.is_empty());
    assert_eq!(form.notice.as_deref(), Some(REGISTER_SUCCESS_NOTICE));
}

#[test]
fn register_success_then_toggle_round_trip_leaves_fields_empty() {
    let mut form = filled(AuthMode::Register);
    form.begin_submit();
    form.finish_submit(&Ok(AuthOutcome::Registered));
    form.toggle_mode();
    form.toggle_mode();
    assert_eq!(form.mode, AuthMode::Login);
    assert!(form.username.is_empty());
    assert!(form.password.is_empty());
    assert!(form.error.is_none());
}
