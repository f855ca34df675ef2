use super::*;

#[test]
fn normalize_base_url_trims_trailing_slashes() {
    assert_eq!(normalize_base_url("https://api.example.com//"), "https://api.example.com");
}

#[test]
fn normalize_base_url_falls_back_when_blank() {
    assert_eq!(normalize_base_url("   "), DEFAULT_API_URL);
}

#[test]
fn join_url_handles_missing_leading_slash() {
    assert_eq!(join_url("http://h", "/login"), "http://h/login");
    assert_eq!(join_url("http://h", "login"), "http://h/login");
}

#[test]
fn endpoint_has_no_double_slash_after_host() {
    let url = endpoint("/profile");
    assert!(url.ends_with("/profile"));
    assert!(!url.ends_with("//profile"));
}
