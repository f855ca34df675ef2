//! Profile page with a section sidebar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the token from the session (never from durable storage directly)
//! and fetches the full `/profile` record on mount.

use leptos::prelude::*;

use crate::state::profile::{ProfileSection, ProfileState};
use crate::state::session::Session;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<ReadSignal<Session>>();
    let state = RwSignal::new(ProfileState::default());

    // Re-runs when bootstrap commits a token after mount.
    Effect::new(move || {
        let token = session.get().token;
        let mut pending = None;
        state.update(|s| pending = s.begin_load(token));
        let Some(token) = pending else {
            return;
        };
        leptos::task::spawn_local(async move {
            use crate::net::api::AuthApi as _;
            let result = crate::net::api::HttpApi.fetch_profile(&token).await;
            state.update(|s| s.finish_load(result));
        });
    });

    view! {
        <div class="profile-page">
            <aside class="profile-page__sidebar">
                <ul class="profile-page__sections">
                    {ProfileSection::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <li
                                    class="profile-page__section"
                                    class:profile-page__section--active=move || state.get().section == section
                                    class:profile-page__section--danger=section.is_danger()
                                    on:click=move |_| state.update(|s| s.section = section)
                                >
                                    {section.label()}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </aside>
            <main class="profile-page__content">{move || section_view(state)}</main>
        </div>
    }
}

fn section_view(state: RwSignal<ProfileState>) -> AnyView {
    match state.get().section {
        ProfileSection::Profile => {
            let current = state.get();
            let body = if current.loading {
                view! { <p>"Loading..."</p> }.into_any()
            } else if let Some(error) = current.error.clone() {
                view! { <p class="profile-page__error">{error}</p> }.into_any()
            } else {
                let username = current.profile.as_ref().map(|p| p.username.clone()).unwrap_or_default();
                let email = current.email_line();
                view! {
                    <p><strong>"Username: "</strong>{username}</p>
                    <p><strong>"Email: "</strong>{email}</p>
                    <p>"This is your public profile. You can update your photo, name, and bio here."</p>
                }
                    .into_any()
            };
            view! {
                <h1>"Profile"</h1>
                {body}
            }
                .into_any()
        }
        ProfileSection::Account => view! {
            <h1>"Account Settings"</h1>
            <p>"Manage your login credentials and email preferences here."</p>
        }
        .into_any(),
        ProfileSection::Jobs => view! {
            <h1>"Saved Jobs"</h1>
            <p class="profile-page__empty">"No saved jobs."</p>
        }
        .into_any(),
        ProfileSection::Documents => view! {
            <h1>"Documents"</h1>
            <p>"Upload or edit your resume, cover letter, and portfolio files."</p>
        }
        .into_any(),
        ProfileSection::Settings => view! {
            <h1>"App Settings"</h1>
            <p>"Customize your experience with notifications, themes, and more."</p>
        }
        .into_any(),
        ProfileSection::DeleteAccount => view! {
            <h1 class="profile-page__danger">"Danger Zone"</h1>
            <p>"Account deletion is not available yet."</p>
        }
        .into_any(),
    }
}
