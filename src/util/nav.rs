//! Navigation menu derivation.
//!
//! The navbar is a pure function of the session: the entries below are
//! recomputed reactively whenever the session signal changes.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::state::session::Session;

/// What activating a menu entry does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    /// Client-side route change to the given path.
    Navigate(&'static str),
    Logout,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub action: MenuAction,
}

impl MenuItem {
    const fn link(label: &'static str, path: &'static str) -> Self {
        Self { label, action: MenuAction::Navigate(path) }
    }

    /// Links are highlighted on their own route; actions never are.
    pub fn is_active(&self, current_path: &str) -> bool {
        matches!(self.action, MenuAction::Navigate(path) if path == current_path)
    }
}

pub const HOME_PATH: &str = "/";
pub const AUTH_PATH: &str = "/auth";

const ALWAYS: [MenuItem; 3] = [
    MenuItem::link("Home", HOME_PATH),
    MenuItem::link("Resume Analysis", "/resume-analyser"),
    MenuItem::link("Jobs", "/jobs"),
];

/// Ordered menu entries for `session`.
pub fn menu_items(session: &Session) -> Vec<MenuItem> {
    let mut items = ALWAYS.to_vec();
    if session.is_authenticated() {
        items.push(MenuItem::link("Profile", "/profile"));
        items.push(MenuItem { label: "Logout", action: MenuAction::Logout });
    } else {
        items.push(MenuItem::link("Login", AUTH_PATH));
    }
    items
}

/// Full-page redirect to `path`. No-op outside the browser.
///
/// Used after logout so every page-local model starts over from the
/// cleared session.
pub fn redirect(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
