use leptos::prelude::*;

/// Fallback for paths that match no route.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page page--center">
            <h1>"Page not found"</h1>
            <p>"The page you are looking for does not exist."</p>
            <a class="btn" href="/">"Home"</a>
        </div>
    }
}
