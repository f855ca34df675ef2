//! Wire DTOs for the job-search backend.
//!
//! DESIGN
//! ======
//! Field names mirror the backend JSON exactly so serde needs no renames;
//! optional fields default to `None` so partially-populated listings from the
//! job search provider still decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Minimal identity projection kept in the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub username: String,
}

/// Full `/profile` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl Profile {
    pub fn identity(&self) -> Identity {
        Identity { username: self.username.clone() }
    }
}

/// `POST /login` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// `POST /register` body. `email` is omitted from the JSON when absent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub password: String,
}

/// `POST /login` success response.
#[derive(Clone, Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Error body returned by the backend on rejection.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub detail: Option<String>,
}

/// `POST /chat` body.
#[derive(Clone, Debug, Serialize)]
pub struct ChatRequest {
    pub user_input: String,
}

/// Response shared by `/chat` and `/analyze-pdf`.
#[derive(Clone, Debug, Deserialize)]
pub struct AssistantReply {
    pub response: String,
}

/// A listing returned by `/api/search`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobListing {
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub employer_name: String,
    #[serde(default)]
    pub job_city: Option<String>,
    #[serde(default)]
    pub job_state: Option<String>,
    #[serde(default)]
    pub job_country: Option<String>,
    #[serde(default)]
    pub job_description: Option<String>,
    #[serde(default)]
    pub job_requirements: Option<String>,
    #[serde(default)]
    pub job_apply_link: Option<String>,
    #[serde(default)]
    pub job_offer_link: Option<String>,
}

impl JobListing {
    /// Apply link, falling back to the offer page.
    pub fn link(&self) -> Option<&str> {
        non_empty(self.job_apply_link.as_deref()).or_else(|| non_empty(self.job_offer_link.as_deref()))
    }

    /// `"city, state, country"` skipping missing parts.
    pub fn location_line(&self) -> String {
        [&self.job_city, &self.job_state, &self.job_country]
            .into_iter()
            .filter_map(|part| non_empty(part.as_deref()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A curated listing returned by `/api/jobs`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CuratedJob {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub salary: String,
    #[serde(default)]
    pub employment_type: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub apply_link: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub requirements: Option<String>,
}

/// `{ "data": [...] }` envelope used by both job endpoints.
#[derive(Clone, Debug, Deserialize)]
pub struct JobsEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// Subset of the geolocation lookup response.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GeoLookup {
    #[serde(default)]
    pub city: Option<String>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
