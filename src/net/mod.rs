//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs HTTP calls and maps failures into `ApiError`, and `types`
//! defines the JSON wire schema shared by every endpoint.

pub mod api;
pub mod types;
