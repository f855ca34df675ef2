//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::flash_banner::FlashBanner;
use crate::components::navbar::Navbar;
use crate::pages::{auth::AuthPage, home::HomePage, jobs::JobsPage, profile::ProfilePage, resume::ResumePage};
use crate::state::flash::Flash;
use crate::state::session::{Session, SessionHandle};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session signal and hands out two capabilities: a
/// `ReadSignal<Session>` for every view and a `SessionHandle` for the
/// writers. Session bootstrap runs once here, on mount. The `Flash` notice
/// lives here too so it survives route changes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(Session::default());
    let handle = SessionHandle::new(session);
    provide_context(handle.reader());
    provide_context(handle);
    provide_context(RwSignal::new(Flash::default()));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        crate::util::auth::bootstrap_session(
            &crate::net::api::HttpApi,
            &crate::util::token_storage::LocalTokenStorage,
            &handle,
        )
        .await;
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/jobpilot.css"/>
        <Title text="JobPilot"/>

        <Router>
            <Navbar/>
            <FlashBanner/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("resume-analyser") view=ResumePage/>
                <Route path=StaticSegment("jobs") view=JobsPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
                <Route path=StaticSegment("auth") view=AuthPage/>
            </Routes>
        </Router>
    }
}
