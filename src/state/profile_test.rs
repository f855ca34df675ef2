use super::*;

#[test]
fn sections_are_ordered_with_danger_last() {
    let labels: Vec<_> = ProfileSection::ALL.iter().map(|s| s.label()).collect();
    assert_eq!(labels, vec!["Profile", "Account", "Jobs", "Documents", "Settings", "Delete Account"]);
    assert!(ProfileSection::DeleteAccount.is_danger());
    assert!(!ProfileSection::Settings.is_danger());
}

#[test]
fn load_without_token_reports_missing_token() {
    let mut state = ProfileState::default();
    assert_eq!(state.begin_load(None), None);
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some(NO_TOKEN));
}

#[test]
fn load_failure_reports_fetch_error() {
    let mut state = ProfileState::default();
    assert_eq!(state.begin_load(Some("tok".into())).as_deref(), Some("tok"));
    state.finish_load(Err(ApiError::Rejected { status: 401, detail: None }));
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some(PROFILE_FETCH_FAILED));
}

#[test]
fn email_line_falls_back_when_missing() {
    let mut state = ProfileState::default();
    state.finish_load(Ok(Profile { username: "alice".into(), email: None }));
    assert_eq!(state.email_line(), EMAIL_NOT_PROVIDED);
    state.finish_load(Ok(Profile { username: "alice".into(), email: Some("a@example.com".into()) }));
    assert_eq!(state.email_line(), "a@example.com");
}
