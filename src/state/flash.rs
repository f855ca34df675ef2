//! One-shot notice shown above the routes.
//!
//! Page-local state is dropped when the router swaps pages, so a message
//! that has to outlive the page that raised it (the login notice shown on
//! arrival at home) is parked here. Provided as `RwSignal<Flash>` from `App`.

#[cfg(test)]
#[path = "flash_test.rs"]
mod flash_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Flash {
    message: Option<String>,
}

impl Flash {
    /// Replace any pending notice with `message`.
    pub fn show(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn dismiss(&mut self) {
        self.message = None;
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
