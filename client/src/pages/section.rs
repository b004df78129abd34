//! Placeholder screen for administrative sections.
//!
//! The HR and admin areas (departments, employees, reviews...) are routed and
//! guarded here; their CRUD screens live outside this app.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::routes::{Page, ROUTES};

#[component]
pub fn SectionPage(page: Page) -> impl IntoView {
    let location = use_location();
    let record = move || {
        let path = location.pathname.get();
        ROUTES.match_path(&path).and_then(|m| m.param("id").map(str::to_owned))
    };

    view! {
        <div class="page section-page">
            <h1>{page.title()}</h1>
            {move || record().map(|id| view! { <p class="section-page__record">"Record #" {id}</p> })}
        </div>
    }
}
