//! Reusable UI components shared by pages.

pub mod challenges;
pub mod chat_panel;
pub mod curated_cards;
pub mod flash_banner;
pub mod job_modal;
pub mod navbar;
