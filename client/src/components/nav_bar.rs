//! Top navigation bar for signed-in users.
//!
//! SYSTEM CONTEXT
//! ==============
//! Links come from [`nav_links`] for the user's role, so the bar never offers
//! a page the guard would refuse. Logout clears the local session first and
//! then tells the backend, matching the store's rule that the local session
//! ends whether or not the server call succeeds.

use leptos::prelude::*;
use session::{Action, User};

use crate::routes::nav_links;
use crate::state::auth::AuthState;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let display_name = move || auth.with(|a| a.user().map(User::display_name).unwrap_or_default());
    let role_label = move || auth.with(|a| a.user().and_then(User::role).map(|r| r.label()).unwrap_or_default());
    let links = move || {
        auth.with(|a| a.user().and_then(User::role))
            .map(nav_links)
            .unwrap_or_default()
            .iter()
            .map(|&(href, label)| view! { <a class="nav-bar__link" href=href>{label}</a> })
            .collect_view()
    };

    let on_logout = move |_| {
        let token = auth.with_untracked(|a| a.store.state().token().map(str::to_owned));
        auth.update(|a| {
            a.store.dispatch(Action::Logout);
        });

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Some(token) = token {
                crate::net::api::logout(&token).await;
            }
            if let Some(w) = web_sys::window() {
                let _ = w.location().set_href("/login");
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = token;
    };

    view! {
        <Show when=move || auth.with(AuthState::is_authenticated)>
            <header class="nav-bar">
                <a href="/" class="nav-bar__brand">"HRMS"</a>
                <nav class="nav-bar__links">{links}</nav>
                <span class="nav-bar__spacer"></span>
                <a href="/profile" class="nav-bar__user">{display_name}</a>
                <span class="nav-bar__role">{role_label}</span>
                <button class="btn nav-bar__logout" on:click=on_logout title="Sign out">
                    "Logout"
                </button>
            </header>
        </Show>
    }
}
