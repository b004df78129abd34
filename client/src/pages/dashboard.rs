//! Per-role landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Admin, HR and employee dashboards share this page. The quick links are the
//! role's navigation entries minus the dashboard itself.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use session::{Role, User};

use crate::routes::nav_links;
use crate::state::auth::AuthState;

/// Navigation entries worth surfacing as cards on `role`'s dashboard.
fn quick_links(role: Role) -> impl Iterator<Item = (&'static str, &'static str)> {
    nav_links(role).iter().copied().filter(move |(path, _)| *path != role.home_path())
}

fn greeting(name: &str) -> String {
    if name.is_empty() { "Welcome".to_owned() } else { format!("Welcome, {name}") }
}

#[component]
pub fn DashboardPage(role: Role) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let name = move || auth.with(|a| greeting(&a.user().map(User::display_name).unwrap_or_default()));

    view! {
        <div class="page dashboard-page">
            <header class="page__header">
                <h1>{name}</h1>
                <span class="badge">{role.label()}</span>
            </header>
            <div class="dashboard-grid">
                {quick_links(role)
                    .map(|(href, label)| {
                        view! {
                            <a class="dashboard-card" href=href>
                                <span class="dashboard-card__title">{label}</span>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
