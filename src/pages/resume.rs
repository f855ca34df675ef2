//! Résumé analysis page: chat panel plus PDF picker.
//!
//! SYSTEM CONTEXT
//! ==============
//! The picked `web_sys::File` is browser-only, so it is kept in a local
//! `StoredValue` next to the serializable `ChatState` rather than inside it.
//! Rendering the PDF itself is left to the browser; this page only tracks
//! which file will be uploaded.

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;
use crate::state::chat::{ChatState, PDF_MIME};

#[component]
pub fn ResumePage() -> impl IntoView {
    let chat = RwSignal::new(ChatState::default());

    #[cfg(feature = "hydrate")]
    let picked = StoredValue::new_local(None::<web_sys::File>);

    #[cfg(feature = "hydrate")]
    let pick = move |file: Option<web_sys::File>| {
        let Some(file) = file else {
            return;
        };
        let mut accepted = false;
        chat.update(|s| accepted = s.select_pdf(&file.name(), &file.type_()).is_ok());
        if accepted {
            picked.set_value(Some(file));
        }
    };

    let on_file_input = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            pick(input.files().and_then(|files| files.get(0)));
            input.set_value("");
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        pick(ev.data_transfer().and_then(|dt| dt.files()).and_then(|files| files.get(0)));
    };

    let on_clear = move |_| {
        chat.update(ChatState::clear_pdf);
        #[cfg(feature = "hydrate")]
        picked.set_value(None);
    };

    let on_analyze = move |_| {
        let mut started = false;
        chat.update(|s| started = s.begin_analyze());
        if !started {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let file = picked.get_value();
            leptos::task::spawn_local(async move {
                let result = match file {
                    Some(file) => crate::net::api::analyze_pdf(&file).await,
                    None => Err(crate::net::api::ApiError::Unavailable),
                };
                chat.update(|s| s.finish_analyze(result));
                picked.set_value(None);
            });
        }
    };

    view! {
        <div class="resume-page">
            <h1 class="resume-page__title">"Let's see where you can improve"</h1>
            <div class="resume-page__columns">
                <ChatPanel chat=chat/>
                <div
                    class="pdf-drop"
                    on:drop=on_drop
                    on:dragover=move |ev: leptos::ev::DragEvent| ev.prevent_default()
                >
                    <h2 class="pdf-drop__title">"Drag & Drop PDF here"</h2>
                    <input
                        class="pdf-drop__input"
                        type="file"
                        accept=PDF_MIME
                        on:change=on_file_input
                        disabled=move || chat.get().loading
                    />
                    <p class="pdf-drop__selected">
                        {move || chat.get().pdf_name.unwrap_or_else(|| "Drop a PDF file here to view".to_owned())}
                    </p>
                    {move || chat.get().upload_error.map(|e| view! { <p class="pdf-drop__error">{e}</p> })}
                    <div class="pdf-drop__actions">
                        <button class="btn" on:click=on_clear disabled=move || chat.get().pdf_name.is_none()>
                            "Clear PDF"
                        </button>
                        <button
                            class="btn btn--primary"
                            on:click=on_analyze
                            disabled=move || !chat.get().can_analyze()
                            title=move || {
                                if chat.get().pdf_name.is_some() { "Analyze Resume" } else { "Upload a PDF to analyze" }
                            }
                        >
                            "Analyze Resume"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
