//! Chat transcript with the text input row.
//!
//! The PDF picker lives on the résumé page; this panel only renders messages
//! and sends typed turns. Message content is shown as plain text.

use leptos::prelude::*;

use crate::state::chat::{ChatState, Role};

#[component]
pub fn ChatPanel(chat: RwSignal<ChatState>) -> impl IntoView {
    let send = move || {
        let mut outgoing = None;
        chat.update(|s| outgoing = s.begin_send());
        let Some(text) = outgoing else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = crate::net::api::send_chat(&text).await;
            chat.update(|s| s.finish_send(result));
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            send();
        }
    };

    view! {
        <div class="chat-panel">
            <div class="chat-panel__messages">
                {move || {
                    chat.get()
                        .visible_messages()
                        .into_iter()
                        .map(|msg| {
                            let class = match msg.role {
                                Role::User => "chat-panel__bubble chat-panel__bubble--user",
                                Role::Assistant | Role::System => "chat-panel__bubble chat-panel__bubble--assistant",
                            };
                            view! { <div class=class>{msg.content}</div> }
                        })
                        .collect_view()
                }}
                <Show when=move || chat.get().loading>
                    <div class="chat-panel__typing">"AI is responding..."</div>
                </Show>
            </div>
            <div class="chat-panel__input-row">
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="Ask a question or type a message..."
                    prop:value=move || chat.get().input
                    on:input=move |ev| chat.update(|s| s.input = event_target_value(&ev))
                    on:keydown=on_keydown
                    disabled=move || chat.get().loading
                />
                <button class="btn btn--primary" on:click=move |_| send() disabled=move || !chat.get().can_send()>
                    "Send"
                </button>
            </div>
        </div>
    }
}
