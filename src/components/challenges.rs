//! Placeholder panel for the upcoming challenges feature.

use leptos::prelude::*;

#[component]
pub fn Challenges() -> impl IntoView {
    view! {
        <section class="challenges">
            <h2 class="challenges__title">"CHALLENGES!"</h2>
            <div class="challenges__card challenges__card--not-ready">
                <p>"This feature isn't ready yet. Coming soon!"</p>
            </div>
        </section>
    }
}
