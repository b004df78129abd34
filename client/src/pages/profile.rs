//! Read-only view of the signed-in user's profile.

use leptos::prelude::*;
use session::{Role, User};

use crate::state::auth::AuthState;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let field = move |read: fn(&User) -> String| move || auth.with(|a| a.user().map(read).unwrap_or_default());

    view! {
        <div class="page profile-page">
            <h1>"My profile"</h1>
            <dl class="profile-fields">
                <dt>"Name"</dt>
                <dd>{field(User::display_name)}</dd>
                <dt>"Email"</dt>
                <dd>{field(|u| u.email.clone())}</dd>
                <dt>"Role"</dt>
                <dd>{field(|u| u.role().map_or("Unknown", Role::label).to_owned())}</dd>
            </dl>
        </div>
    }
}
