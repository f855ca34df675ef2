//! Login / register page.
//!
//! SYSTEM CONTEXT
//! ==============
//! One of the three session writers. Form transitions live in
//! `state::auth_form`; the backend round-trips live in `util::auth`. A
//! successful login navigates home inside the router, so the session just
//! committed stays in memory and the login notice rides along in the
//! app-wide `Flash`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::HttpApi;
use crate::state::auth_form::{AuthForm, AuthMode};
use crate::state::flash::Flash;
use crate::state::session::SessionHandle;
use crate::util::auth::submit_auth;
use crate::util::token_storage::LocalTokenStorage;

#[component]
pub fn AuthPage() -> impl IntoView {
    let handle = expect_context::<SessionHandle>();
    let flash = expect_context::<RwSignal<Flash>>();
    let form = RwSignal::new(AuthForm::default());

    let navigate = use_navigate();
    let leave_to = RwSignal::new(None::<&'static str>);
    Effect::new(move || {
        if let Some(path) = leave_to.get() {
            navigate(path, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut request = None;
        form.update(|f| request = f.begin_submit());
        let Some(request) = request else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = submit_auth(&HttpApi, &LocalTokenStorage, &handle, request).await;
            let mut departure = None;
            form.update(|f| departure = f.finish_submit(&result));
            if let Some(departure) = departure {
                flash.update(|f| f.show(departure.notice));
                leave_to.set(Some(departure.path));
            }
        });
    };

    let mode = move || form.get().mode;
    let busy = move || form.get().busy;

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h2 class="auth-card__title">{move || mode().label()}</h2>
                {move || form.get().error.map(|e| view! { <div class="auth-card__error">{e}</div> })}
                {move || form.get().notice.map(|n| view! { <div class="auth-card__notice">{n}</div> })}
                <input
                    class="auth-card__input"
                    type="text"
                    placeholder="Username"
                    required
                    prop:value=move || form.get().username
                    on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                />
                <Show when=move || mode() == AuthMode::Register>
                    <input
                        class="auth-card__input"
                        type="email"
                        placeholder="Email (optional)"
                        prop:value=move || form.get().email
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                </Show>
                <input
                    class="auth-card__input"
                    type="password"
                    placeholder="Password"
                    required
                    prop:value=move || form.get().password
                    on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                />
                <button class="btn btn--primary auth-card__submit" type="submit" disabled=busy>
                    {move || mode().submit_label(busy())}
                </button>
                <p class="auth-card__switch">
                    {move || mode().switch_prompt().0}
                    <button
                        class="auth-card__toggle"
                        type="button"
                        on:click=move |_| form.update(AuthForm::toggle_mode)
                    >
                        {move || mode().switch_prompt().1}
                    </button>
                </p>
            </form>
        </div>
    }
}
