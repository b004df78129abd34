use leptos::prelude::*;

/// Shown when the guard rejects a role.
#[component]
pub fn NotAuthorizedPage() -> impl IntoView {
    view! {
        <div class="page page--center">
            <h1>"Not authorized"</h1>
            <p>"Your role does not have access to that page."</p>
            <a class="btn" href="/">"Go to my dashboard"</a>
        </div>
    }
}
