//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `flash`, `auth_form`, `chat`,
//! `jobs`, `profile`) so individual components can depend on small focused
//! models. Everything except `session` and `flash` is page-local.

pub mod auth_form;
pub mod chat;
pub mod flash;
pub mod jobs;
pub mod profile;
pub mod session;
