//! `/` sends each signed-in user to their role's dashboard.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use session::{Role, User};

use crate::state::auth::AuthState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if let Some(role) = auth.with(|a| a.user().and_then(User::role)) {
            navigate(role.home_path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <div class="page page--center">
            <Show
                when=move || auth.with(|a| a.user().and_then(User::role).is_some())
                fallback=|| view! { <p>"Your account has no role assigned. Contact HR."</p> }
            >
                <p>{move || auth.with(|a| a.user().and_then(User::role).map_or("", Role::label))} " workspace..."</p>
            </Show>
        </div>
    }
}
