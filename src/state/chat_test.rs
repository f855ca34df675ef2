use super::*;

// =============================================================
// ChatState defaults
// =============================================================

#[test]
fn chat_state_default_seeds_hidden_system_prompt() {
    let state = ChatState::default();
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].role, Role::System);
    assert!(state.visible_messages().is_empty());
}

// =============================================================
// Sending
// =============================================================

#[test]
fn begin_send_refuses_blank_input() {
    let mut state = ChatState { input: "   ".into(), ..ChatState::default() };
    assert_eq!(state.begin_send(), None);
    assert!(!state.loading);
}

#[test]
fn begin_send_moves_input_into_transcript() {
    let mut state = ChatState { input: " How is my CV? ".into(), ..ChatState::default() };
    assert_eq!(state.begin_send().as_deref(), Some("How is my CV?"));
    assert!(state.loading);
    assert!(state.input.is_empty());
    assert_eq!(state.visible_messages(), vec![ChatMessage::new(Role::User, "How is my CV?")]);
}

#[test]
fn begin_send_refuses_while_loading() {
    let mut state = ChatState { input: "hi".into(), loading: true, ..ChatState::default() };
    assert_eq!(state.begin_send(), None);
}

#[test]
fn finish_send_appends_reply() {
    let mut state = ChatState { input: "hi".into(), ..ChatState::default() };
    state.begin_send();
    state.finish_send(Ok("Hello!".into()));
    assert!(!state.loading);
    assert_eq!(state.visible_messages().last(), Some(&ChatMessage::new(Role::Assistant, "Hello!")));
}

#[test]
fn finish_send_error_appends_fallback() {
    let mut state = ChatState { input: "hi".into(), ..ChatState::default() };
    state.begin_send();
    state.finish_send(Err(ApiError::Network("offline".into())));
    assert_eq!(state.visible_messages().last().map(|m| m.content.as_str()), Some(CHAT_ERROR_REPLY));
}

// =============================================================
// PDF analysis
// =============================================================

#[test]
fn select_pdf_rejects_other_types() {
    let mut state = ChatState::default();
    assert_eq!(state.select_pdf("cv.docx", "application/msword"), Err(NOT_A_PDF));
    assert_eq!(state.pdf_name, None);
    assert_eq!(state.upload_error.as_deref(), Some(NOT_A_PDF));
}

#[test]
fn select_pdf_accepts_pdf_and_clears_error() {
    let mut state = ChatState { upload_error: Some(NOT_A_PDF.into()), ..ChatState::default() };
    assert!(state.select_pdf("cv.pdf", PDF_MIME).is_ok());
    assert_eq!(state.pdf_name.as_deref(), Some("cv.pdf"));
    assert!(state.upload_error.is_none());
}

#[test]
fn analyze_requires_selected_pdf() {
    let mut state = ChatState::default();
    assert!(!state.begin_analyze());
}

#[test]
fn finish_analyze_clears_selection_on_failure() {
    let mut state = ChatState::default();
    state.select_pdf("cv.pdf", PDF_MIME).unwrap();
    assert!(state.begin_analyze());
    state.finish_analyze(Err(ApiError::Rejected { status: 500, detail: None }));
    assert!(!state.loading);
    assert_eq!(state.pdf_name, None);
    assert_eq!(state.visible_messages().last().map(|m| m.content.as_str()), Some(ANALYZE_ERROR_REPLY));
}

#[test]
fn finish_analyze_appends_feedback() {
    let mut state = ChatState::default();
    state.select_pdf("cv.pdf", PDF_MIME).unwrap();
    state.begin_analyze();
    state.finish_analyze(Ok("Strong experience section.".into()));
    assert_eq!(state.pdf_name, None);
    assert_eq!(
        state.visible_messages().last(),
        Some(&ChatMessage::new(Role::Assistant, "Strong experience section."))
    );
}
