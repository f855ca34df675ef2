//! Résumé chat transcript and upload state.
//!
//! DESIGN
//! ======
//! The transcript is seeded with a system prompt that is never rendered.
//! Chat turns and PDF analysis share one `loading` flag so only one backend
//! call is in flight at a time.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::api::ApiError;

pub const SYSTEM_PROMPT: &str = "You are a helpful assistant.";
pub const CHAT_ERROR_REPLY: &str = "Error communicating with backend.";
pub const ANALYZE_ERROR_REPLY: &str = "Failed to analyze PDF.";
pub const NOT_A_PDF: &str = "Please drop a PDF file";
pub const PDF_MIME: &str = "application/pdf";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    fn new(role: Role, content: impl Into<String>) -> Self {
        Self { role, content: content.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub input: String,
    pub loading: bool,
    /// Name of the PDF selected for analysis.
    pub pdf_name: Option<String>,
    pub upload_error: Option<String>,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage::new(Role::System, SYSTEM_PROMPT)],
            input: String::new(),
            loading: false,
            pdf_name: None,
            upload_error: None,
        }
    }
}

impl ChatState {
    /// Messages shown to the user (everything but the system prompt).
    pub fn visible_messages(&self) -> Vec<ChatMessage> {
        self.messages.iter().filter(|m| m.role != Role::System).cloned().collect()
    }

    pub fn can_send(&self) -> bool {
        !self.loading && !self.input.trim().is_empty()
    }

    /// Move the input into the transcript and return the text to send.
    pub fn begin_send(&mut self) -> Option<String> {
        if !self.can_send() {
            return None;
        }
        let text = self.input.trim().to_owned();
        self.messages.push(ChatMessage::new(Role::User, text.clone()));
        self.input.clear();
        self.loading = true;
        Some(text)
    }

    pub fn finish_send(&mut self, result: Result<String, ApiError>) {
        self.push_reply(result, CHAT_ERROR_REPLY);
    }

    /// Accept a file for analysis if its MIME type is PDF.
    ///
    /// # Errors
    ///
    /// Returns [`NOT_A_PDF`] for any other type; the previous selection is kept.
    pub fn select_pdf(&mut self, name: &str, mime: &str) -> Result<(), &'static str> {
        if mime != PDF_MIME {
            self.upload_error = Some(NOT_A_PDF.to_owned());
            return Err(NOT_A_PDF);
        }
        self.pdf_name = Some(name.to_owned());
        self.upload_error = None;
        Ok(())
    }

    pub fn clear_pdf(&mut self) {
        self.pdf_name = None;
        self.upload_error = None;
    }

    pub fn can_analyze(&self) -> bool {
        !self.loading && self.pdf_name.is_some()
    }

    /// Enter the loading state for an analysis request.
    pub fn begin_analyze(&mut self) -> bool {
        if !self.can_analyze() {
            return false;
        }
        self.loading = true;
        true
    }

    /// Record the analysis reply. The selection is cleared either way.
    pub fn finish_analyze(&mut self, result: Result<String, ApiError>) {
        self.push_reply(result, ANALYZE_ERROR_REPLY);
        self.pdf_name = None;
    }

    fn push_reply(&mut self, result: Result<String, ApiError>, fallback: &str) {
        let content = match result {
            Ok(reply) => reply,
            Err(e) => {
                leptos::logging::warn!("assistant request failed: {e}");
                fallback.to_owned()
            }
        };
        self.messages.push(ChatMessage::new(Role::Assistant, content));
        self.loading = false;
    }
}
