//! Top navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered above every route. Entries come from `util::nav::menu_items`, so
//! the bar flips between Login and Profile/Logout as soon as the session
//! signal changes.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::net::api::HttpApi;
use crate::state::session::{Session, SessionHandle};
use crate::util::auth::logout;
use crate::util::nav::{HOME_PATH, MenuAction, menu_items, redirect};
use crate::util::token_storage::LocalTokenStorage;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<ReadSignal<Session>>();
    let handle = expect_context::<SessionHandle>();
    let pathname = use_location().pathname;

    let on_logout = move |_| {
        leptos::task::spawn_local(async move {
            logout(&HttpApi, &LocalTokenStorage, &handle).await;
            redirect(HOME_PATH);
        });
    };

    view! {
        <nav class="navbar">
            <ul class="navbar__list">
                {move || {
                    let current = pathname.get();
                    menu_items(&session.get())
                        .into_iter()
                        .map(|item| {
                            let active = item.is_active(&current);
                            match item.action {
                                MenuAction::Navigate(path) => {
                                    view! {
                                        <li class="navbar__item" class:navbar__item--active=active>
                                            <A href=path>{item.label}</A>
                                        </li>
                                    }
                                        .into_any()
                                }
                                MenuAction::Logout => {
                                    view! {
                                        <li class="navbar__item">
                                            <button class="navbar__button" on:click=on_logout>
                                                {item.label}
                                            </button>
                                        </li>
                                    }
                                        .into_any()
                                }
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </nav>
    }
}
