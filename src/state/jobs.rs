//! Job search form and curated listing state.

#[cfg(test)]
#[path = "jobs_test.rs"]
mod jobs_test;

use crate::net::api::ApiError;
use crate::net::types::{CuratedJob, JobListing};

pub const SEARCH_ERROR: &str = "Failed to find jobs. Check the spelling and try again.";
pub const CURATED_ERROR: &str = "Failed to fetch jobs";
pub const NO_JOBS: &str = "No jobs found.";

/// Free-text search filters. Only `query` is required.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JobSearchForm {
    pub query: String,
    pub location: String,
    pub country: String,
    pub employment_type: String,
}

impl JobSearchForm {
    /// Query parameters for `/api/search`, or `None` when `query` is blank.
    /// Blank optional filters are omitted.
    pub fn params(&self) -> Option<Vec<(&'static str, String)>> {
        let query = self.query.trim();
        if query.is_empty() {
            return None;
        }
        let mut params = vec![("query", query.to_owned())];
        for (key, value) in [
            ("location", &self.location),
            ("country", &self.country),
            ("employment_type", &self.employment_type),
        ] {
            let value = value.trim();
            if !value.is_empty() {
                params.push((key, value.to_owned()));
            }
        }
        Some(params)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JobSearchState {
    pub form: JobSearchForm,
    pub results: Vec<JobListing>,
    pub loading: bool,
    pub error: Option<String>,
    /// At least one search request has been issued.
    pub submitted: bool,
    /// Listing shown in the detail modal.
    pub selected: Option<JobListing>,
}

impl JobSearchState {
    /// Start a search, returning the params to send. Blank queries are ignored.
    pub fn begin_search(&mut self) -> Option<Vec<(&'static str, String)>> {
        let params = self.form.params()?;
        self.submitted = true;
        self.loading = true;
        self.error = None;
        Some(params)
    }

    pub fn finish_search(&mut self, result: Result<Vec<JobListing>, ApiError>) {
        self.loading = false;
        match result {
            Ok(results) => self.results = results,
            Err(e) => {
                leptos::logging::warn!("job search failed: {e}");
                self.results.clear();
                self.error = Some(SEARCH_ERROR.to_owned());
            }
        }
    }

    pub fn show_no_results(&self) -> bool {
        self.submitted && !self.loading && self.error.is_none() && self.results.is_empty()
    }

    pub fn open(&mut self, index: usize) {
        self.selected = self.results.get(index).cloned();
    }

    pub fn close(&mut self) {
        self.selected = None;
    }
}

/// Home-page curated listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CuratedState {
    pub jobs: Vec<CuratedJob>,
    pub loading: bool,
    pub error: Option<String>,
    pub selected: Option<CuratedJob>,
}

impl Default for CuratedState {
    // Fetch starts on mount, so the initial state is already loading.
    fn default() -> Self {
        Self { jobs: Vec::new(), loading: true, error: None, selected: None }
    }
}

impl CuratedState {
    pub fn finish(&mut self, result: Result<Vec<CuratedJob>, ApiError>) {
        self.loading = false;
        match result {
            Ok(jobs) => self.jobs = jobs,
            Err(e) => {
                leptos::logging::warn!("curated listing failed: {e}");
                self.error = Some(CURATED_ERROR.to_owned());
            }
        }
    }

    pub fn show_no_results(&self) -> bool {
        !self.loading && self.error.is_none() && self.jobs.is_empty()
    }

    pub fn open(&mut self, index: usize) {
        self.selected = self.jobs.get(index).cloned();
    }

    pub fn close(&mut self) {
        self.selected = None;
    }
}
