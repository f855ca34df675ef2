use super::*;

// =============================================================
// Flash
// =============================================================

#[test]
fn flash_starts_empty() {
    assert_eq!(Flash::default().message(), None);
}

#[test]
fn show_replaces_pending_notice() {
    let mut flash = Flash::default();
    flash.show("first");
    flash.show("second");
    assert_eq!(flash.message(), Some("second"));
}

#[test]
fn dismiss_clears_notice() {
    let mut flash = Flash::default();
    flash.show("Login successful!");
    flash.dismiss();
    assert_eq!(flash.message(), None);
}
