use super::*;

fn listing(title: &str) -> JobListing {
    JobListing { job_title: title.into(), employer_name: "Acme".into(), ..JobListing::default() }
}

// =============================================================
// JobSearchForm
// =============================================================

#[test]
fn params_require_query() {
    let form = JobSearchForm { query: "  ".into(), location: "Leeds".into(), ..JobSearchForm::default() };
    assert_eq!(form.params(), None);
}

#[test]
fn params_include_only_filled_filters() {
    let form = JobSearchForm {
        query: "Software Engineer".into(),
        location: String::new(),
        country: " GB ".into(),
        employment_type: "Full-time".into(),
    };
    assert_eq!(
        form.params(),
        Some(vec![
            ("query", "Software Engineer".to_owned()),
            ("country", "GB".to_owned()),
            ("employment_type", "Full-time".to_owned()),
        ])
    );
}

// =============================================================
// JobSearchState
// =============================================================

#[test]
fn blank_search_is_not_submitted() {
    let mut state = JobSearchState::default();
    assert!(state.begin_search().is_none());
    assert!(!state.submitted);
    assert!(!state.show_no_results());
}

#[test]
fn empty_result_after_search_shows_no_results() {
    let mut state = JobSearchState::default();
    state.form.query = "Astronaut".into();
    assert!(state.begin_search().is_some());
    assert!(state.loading);
    assert!(!state.show_no_results());
    state.finish_search(Ok(Vec::new()));
    assert!(state.show_no_results());
}

#[test]
fn failed_search_sets_error_and_clears_results() {
    let mut state = JobSearchState { results: vec![listing("Old")], ..JobSearchState::default() };
    state.form.query = "Engineer".into();
    state.begin_search();
    state.finish_search(Err(ApiError::Rejected { status: 502, detail: None }));
    assert_eq!(state.error.as_deref(), Some(SEARCH_ERROR));
    assert!(state.results.is_empty());
    assert!(!state.show_no_results());
}

#[test]
fn new_search_clears_previous_error() {
    let mut state = JobSearchState { error: Some(SEARCH_ERROR.into()), ..JobSearchState::default() };
    state.form.query = "Engineer".into();
    state.begin_search();
    assert!(state.error.is_none());
}

#[test]
fn open_and_close_detail() {
    let mut state = JobSearchState { results: vec![listing("A"), listing("B")], ..JobSearchState::default() };
    state.open(1);
    assert_eq!(state.selected.as_ref().map(|j| j.job_title.as_str()), Some("B"));
    state.open(9);
    assert!(state.selected.is_none());
    state.open(0);
    state.close();
    assert!(state.selected.is_none());
}

// =============================================================
// CuratedState
// =============================================================

#[test]
fn curated_state_starts_loading() {
    let state = CuratedState::default();
    assert!(state.loading);
    assert!(!state.show_no_results());
}

#[test]
fn curated_empty_list_shows_no_results() {
    let mut state = CuratedState::default();
    state.finish(Ok(Vec::new()));
    assert!(state.show_no_results());
}

#[test]
fn curated_failure_sets_error() {
    let mut state = CuratedState::default();
    state.finish(Err(ApiError::Network("offline".into())));
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some(CURATED_ERROR));
    assert!(!state.show_no_results());
}
