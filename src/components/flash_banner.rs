//! Dismissible banner for the app-wide [`Flash`] notice.

use leptos::prelude::*;

use crate::state::flash::Flash;

#[component]
pub fn FlashBanner() -> impl IntoView {
    let flash = expect_context::<RwSignal<Flash>>();

    move || {
        flash.get().message().map(|message| {
            let message = message.to_owned();
            view! {
                <div class="flash-banner" role="status">
                    <span class="flash-banner__text">{message}</span>
                    <button
                        class="flash-banner__dismiss"
                        type="button"
                        on:click=move |_| flash.update(Flash::dismiss)
                    >
                        "Dismiss"
                    </button>
                </div>
            }
        })
    }
}
