//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and the async session
//! flows from page and component logic to improve reuse and testability.

pub mod auth;
pub mod nav;
pub mod token_storage;
