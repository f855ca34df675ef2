//! Horizontally scrolling strip of curated entry-level listings.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads once on mount: geolocate the visitor's city (falling back to a
//! default), then ask the backend for "no experience" jobs there.

use leptos::prelude::*;

use crate::components::job_modal::{JobDetail, JobModal};
use crate::state::jobs::{CuratedState, NO_JOBS};

#[component]
pub fn CuratedCards() -> impl IntoView {
    let state = RwSignal::new(CuratedState::default());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let city = crate::net::api::lookup_visitor_city().await;
        let result = crate::net::api::fetch_curated_jobs(&city).await;
        state.update(|s| s.finish(result));
    });

    let on_close = Callback::new(move |()| state.update(CuratedState::close));

    view! {
        <section class="curated">
            <h2 class="curated__title">"Check Out These Recent Jobs!"</h2>
            <div class="curated__scroll">
                <Show when=move || state.get().loading>
                    <div class="curated__card curated__card--status">"Fetching Jobs..."</div>
                </Show>
                {move || {
                    state
                        .get()
                        .error
                        .map(|e| view! { <div class="curated__card curated__card--error">"Error: " {e}</div> })
                }}
                <Show when=move || state.get().show_no_results()>
                    <div class="curated__card curated__card--status">{NO_JOBS}</div>
                </Show>
                {move || {
                    state
                        .get()
                        .jobs
                        .into_iter()
                        .enumerate()
                        .map(|(idx, job)| {
                            view! {
                                <div class="curated__card" on:click=move |_| state.update(|s| s.open(idx))>
                                    <strong>{job.title}</strong>
                                    <em>" at " {job.company}</em>
                                    <small>{format!("{} | {}", job.location, job.employment_type)}</small>
                                    <em>"Salary: " {job.salary}</em>
                                    <span class="curated__details">"View Details"</span>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
            {move || {
                state
                    .get()
                    .selected
                    .map(|job| view! { <JobModal detail=JobDetail::from(&job) on_close=on_close/> })
            }}
        </section>
    }
}
