use super::*;

#[test]
fn parse_port_defaults_when_unset() {
    assert_eq!(parse_port(None), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some("  ")), Ok(DEFAULT_PORT));
}

#[test]
fn parse_port_accepts_valid_value() {
    assert_eq!(parse_port(Some("8080")), Ok(8080));
}

#[test]
fn parse_port_rejects_garbage() {
    assert!(parse_port(Some("eighty")).is_err());
    assert!(parse_port(Some("70000")).is_err());
}
