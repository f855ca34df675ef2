use super::*;

// =============================================================
// ApiError
// =============================================================

#[test]
fn rejected_message_includes_detail_when_present() {
    let err = ApiError::Rejected { status: 400, detail: Some("Username already registered".into()) };
    assert_eq!(err.to_string(), "request rejected: 400 (Username already registered)");
}

#[test]
fn rejected_message_without_detail_formats_status() {
    let err = ApiError::Rejected { status: 500, detail: None };
    assert_eq!(err.to_string(), "request rejected: 500");
}

#[test]
fn network_error_names_cause() {
    assert_eq!(ApiError::Network("offline".into()).to_string(), "request failed: offline");
}

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("tok123"), "Bearer tok123");
}

// =============================================================
// Curated listing helpers
// =============================================================

#[test]
fn curated_query_mentions_city() {
    assert_eq!(curated_query(" Leeds "), "no experience jobs in Leeds");
}

#[test]
fn resolve_city_falls_back_to_default() {
    assert_eq!(resolve_city(None), DEFAULT_CITY);
    assert_eq!(resolve_city(Some("  ")), DEFAULT_CITY);
    assert_eq!(resolve_city(Some("Bristol")), "Bristol");
}

// =============================================================
// Non-browser builds
// =============================================================

#[test]
fn http_api_is_unavailable_outside_browser() {
    let result = futures::executor::block_on(HttpApi.fetch_profile("tok123"));
    assert_eq!(result, Err(ApiError::Unavailable));
}

#[test]
fn visitor_city_defaults_outside_browser() {
    assert_eq!(futures::executor::block_on(lookup_visitor_city()), DEFAULT_CITY);
}
