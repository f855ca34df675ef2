//! Landing page: curated listings and the challenges teaser.

use leptos::prelude::*;

use crate::components::challenges::Challenges;
use crate::components::curated_cards::CuratedCards;
use crate::state::session::Session;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<ReadSignal<Session>>();
    let greeting = move || {
        let session = session.get();
        format!("Welcome {}!", session.username().unwrap_or("User"))
    };

    view! {
        <div class="home-page">
            <CuratedCards/>
            <h1 class="home-page__title">{greeting}</h1>
            <Challenges/>
        </div>
    }
}
