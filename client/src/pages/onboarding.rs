//! Employee onboarding flow and the approval waiting room.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guard keeps pending and in-progress employees inside
//! `/employee/onboarding/*` and parks `PENDING_APPROVAL` users on the waiting
//! page. Status only changes server-side, so these pages only report it.

#[cfg(test)]
#[path = "onboarding_test.rs"]
mod onboarding_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use session::{OnboardingStatus, User};

use crate::state::auth::AuthState;

const ONBOARDING_ROOT: &str = "/employee/onboarding";

/// Step segment below the onboarding root, if any.
fn onboarding_step(path: &str) -> Option<&str> {
    path.strip_prefix(ONBOARDING_ROOT)?
        .strip_prefix('/')
        .map(|rest| rest.trim_end_matches('/'))
        .filter(|step| !step.is_empty())
}

fn status_text(status: Option<OnboardingStatus>) -> &'static str {
    match status {
        Some(OnboardingStatus::Pending) | None => "Let's get your employee file started.",
        Some(OnboardingStatus::InProgress) => "Pick up where you left off.",
        Some(OnboardingStatus::PendingApproval) => "Your details were submitted and are awaiting HR approval.",
        Some(OnboardingStatus::Completed) => "Onboarding is complete.",
    }
}

#[component]
pub fn OnboardingPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let step = move || onboarding_step(&location.pathname.get()).map(str::to_owned);
    let status = move || auth.with(|a| status_text(a.user().and_then(|u: &User| u.onboarding_status)));

    view! {
        <div class="page onboarding-page">
            <h1>"Onboarding"</h1>
            <p>{status}</p>
            {move || step().map(|s| view! { <p class="onboarding-page__step">"Step: " {s}</p> })}
        </div>
    }
}

#[component]
pub fn WaitingApprovalPage() -> impl IntoView {
    view! {
        <div class="page page--center">
            <h1>"Waiting for approval"</h1>
            <p>{status_text(Some(OnboardingStatus::PendingApproval))}</p>
            <p>"You will get full access once HR reviews your onboarding."</p>
        </div>
    }
}
