//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::components::route_outlet::RouteOutlet;
use crate::components::toast_stack::{ToastSink, ToastStack};
use crate::pages::not_found::NotFoundPage;
use crate::state::{auth::AuthState, toast::ToastState};

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
/// Provides the session and toast contexts, restores the persisted session
/// once mounted in the browser, and hands every path to [`RouteOutlet`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(auth);
    provide_context(toasts);

    // Effects only run in the browser, so SSR and the first hydrated paint
    // agree on an unrestored session.
    Effect::new(move || {
        auth.update(AuthState::restore);
    });

    // Surface login/hydration outcomes exactly once.
    Effect::new(move || {
        let pending = auth.with(AuthState::has_outcome);
        if pending {
            auth.update(|state| {
                state.store.take_outcome(&ToastSink(toasts));
            });
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/hrms.css"/>
        <Title text="HRMS"/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=RouteOutlet/>
                    <Route path=WildcardSegment("any") view=RouteOutlet/>
                </Routes>
            </main>
            <ToastStack/>
        </Router>
    }
}
