//! Profile page sections and account details.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::net::api::ApiError;
use crate::net::types::Profile;

pub const NO_TOKEN: &str = "No token found.";
pub const PROFILE_FETCH_FAILED: &str = "Failed to fetch profile.";
pub const EMAIL_NOT_PROVIDED: &str = "Not provided";

/// Sidebar sections, in display order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProfileSection {
    #[default]
    Profile,
    Account,
    Jobs,
    Documents,
    Settings,
    DeleteAccount,
}

impl ProfileSection {
    pub const ALL: [Self; 6] =
        [Self::Profile, Self::Account, Self::Jobs, Self::Documents, Self::Settings, Self::DeleteAccount];

    pub fn label(self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::Account => "Account",
            Self::Jobs => "Jobs",
            Self::Documents => "Documents",
            Self::Settings => "Settings",
            Self::DeleteAccount => "Delete Account",
        }
    }

    pub fn is_danger(self) -> bool {
        self == Self::DeleteAccount
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileState {
    pub section: ProfileSection,
    pub profile: Option<Profile>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self { section: ProfileSection::Profile, profile: None, loading: true, error: None }
    }
}

impl ProfileState {
    /// Start loading with the session token, returning the token to use.
    /// Without a token the load ends immediately with [`NO_TOKEN`].
    pub fn begin_load(&mut self, token: Option<String>) -> Option<String> {
        self.error = None;
        match token {
            Some(token) => {
                self.loading = true;
                Some(token)
            }
            None => {
                self.loading = false;
                self.error = Some(NO_TOKEN.to_owned());
                None
            }
        }
    }

    pub fn finish_load(&mut self, result: Result<Profile, ApiError>) {
        self.loading = false;
        match result {
            Ok(profile) => self.profile = Some(profile),
            Err(e) => {
                leptos::logging::warn!("profile fetch failed: {e}");
                self.error = Some(PROFILE_FETCH_FAILED.to_owned());
            }
        }
    }

    pub fn email_line(&self) -> String {
        self.profile
            .as_ref()
            .and_then(|p| p.email.clone())
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| EMAIL_NOT_PROVIDED.to_owned())
    }
}
