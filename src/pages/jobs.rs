//! Job search page.

use leptos::prelude::*;

use crate::components::job_modal::{JobDetail, JobModal};
use crate::state::jobs::{JobSearchState, NO_JOBS};

#[component]
pub fn JobsPage() -> impl IntoView {
    let state = RwSignal::new(JobSearchState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut params = None;
        state.update(|s| params = s.begin_search());
        let Some(params) = params else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = crate::net::api::search_jobs(&params).await;
            state.update(|s| s.finish_search(result));
        });
    };

    let on_close = Callback::new(move |()| state.update(JobSearchState::close));

    view! {
        <div class="jobs-page">
            <h1 class="jobs-page__title">"Let's help you find your role"</h1>
            <div class="jobs-page__panel">
                <h2>"Search for Jobs"</h2>
                <form class="jobs-page__form" on:submit=on_submit>
                    <input
                        type="text"
                        placeholder="Job title (e.g., Software Engineer)"
                        prop:value=move || state.get().form.query
                        on:input=move |ev| state.update(|s| s.form.query = event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="City"
                        prop:value=move || state.get().form.location
                        on:input=move |ev| state.update(|s| s.form.location = event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Country (e.g., GB, US)"
                        prop:value=move || state.get().form.country
                        on:input=move |ev| state.update(|s| s.form.country = event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Employment Type (e.g., Full-time)"
                        prop:value=move || state.get().form.employment_type
                        on:input=move |ev| state.update(|s| s.form.employment_type = event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit">"Search"</button>
                </form>

                <Show when=move || state.get().loading>
                    <p class="jobs-page__status">"Loading..."</p>
                </Show>
                {move || state.get().error.map(|e| view! { <p class="jobs-page__error">{e}</p> })}
                <Show when=move || state.get().show_no_results()>
                    <p class="jobs-page__status">{NO_JOBS}</p>
                </Show>

                <div class="jobs-page__results">
                    {move || {
                        state
                            .get()
                            .results
                            .into_iter()
                            .enumerate()
                            .map(|(idx, job)| {
                                let location = job.location_line();
                                let link = job.link().map(str::to_owned);
                                view! {
                                    <div class="job-card" on:click=move |_| state.update(|s| s.open(idx))>
                                        <h2 class="job-card__title">{job.job_title}</h2>
                                        <p class="job-card__employer">{job.employer_name}</p>
                                        <p class="job-card__location">{location}</p>
                                        {link
                                            .map(|href| {
                                                view! {
                                                    <a
                                                        class="job-card__link"
                                                        href=href
                                                        target="_blank"
                                                        rel="noopener noreferrer"
                                                        on:click=move |ev| ev.stop_propagation()
                                                    >
                                                        "Job Link Here"
                                                    </a>
                                                }
                                            })}
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
            {move || {
                state
                    .get()
                    .selected
                    .map(|job| view! { <JobModal detail=JobDetail::from(&job) on_close=on_close/> })
            }}
        </div>
    }
}
