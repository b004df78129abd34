//! Guarded outlet that renders whichever page the current path maps to.
//!
//! SYSTEM CONTEXT
//! ==============
//! The router sends every path here. The outlet looks the path up in
//! [`ROUTES`], runs the session guard, and then either renders the page,
//! shows an interstitial while the session hydrates, or navigates away.
//!
//! Hydration is requested from an effect; the store refuses a second
//! `GetMeRequest` while one is loading, so re-renders cannot duplicate it.
//! A transient failure keeps the token, so the interstitial names the error
//! and offers a retry instead of waiting for the next navigation.

#[cfg(test)]
#[path = "route_outlet_test.rs"]
mod route_outlet_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};
use session::{Action, ApiError, GuardPaths, GuardState, RequestId, Resolution, SessionStorage, Transition, Verdict, resolve};

use crate::pages::not_found::NotFoundPage;
use crate::routes::{Page, ROUTES};
use crate::state::auth::AuthState;

/// Everything the outlet needs to know about one navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Outcome {
    pub verdict: Verdict,
    pub page: Option<Page>,
    /// The guard is waiting on hydration.
    pub hydrate: bool,
}

pub(crate) fn outcome_for<S: SessionStorage + Clone>(auth: &AuthState<S>, path: &str, paths: &GuardPaths) -> Outcome {
    if !auth.restored {
        return Outcome { verdict: Verdict::Loading, page: None, hydrate: false };
    }
    let resolution = resolve(&*ROUTES, &auth.store.guard_context(), path, paths);
    Outcome {
        verdict: resolution.verdict(paths),
        page: resolution.route_match().map(|m| m.route.view),
        hydrate: matches!(resolution, Resolution::Guarded(_, GuardState::Hydrating)),
    }
}

/// Text for a hydration failure that leaves the guard waiting. A 401 ends the
/// session instead and the guard sends the user to login.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) fn stalled_message(error: &ApiError) -> Option<String> {
    (!error.is_unauthorized()).then(|| format!("Could not load your account: {error}"))
}

/// Join pathname and query as the guard sees them.
pub(crate) fn full_path(pathname: &str, search: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() { pathname.to_owned() } else { format!("{pathname}?{search}") }
}

#[component]
pub fn RouteOutlet() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let (pathname, search) = (location.pathname, location.search);
    let navigate = use_navigate();
    let paths = GuardPaths::default();
    let stalled = RwSignal::new(None::<String>);

    let outcome = Memo::new(move |_| {
        let path = full_path(&pathname.get(), &search.get());
        auth.with(|state| outcome_for(state, &path, &paths))
    });

    // Storage is authoritative for whether a token exists at all.
    Effect::new(move || {
        pathname.track();
        let stale = auth.with_untracked(|state| {
            state.restored && state.store.state().token().is_some() && !state.store.guard_context().persisted_token
        });
        if stale {
            auth.update(|state| {
                state.store.reconcile();
            });
        }
    });

    Effect::new(move || {
        if outcome.get().hydrate {
            request_hydration(auth, stalled);
        }
    });

    Effect::new(move || {
        if let Verdict::Redirect(target) = outcome.get().verdict {
            navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    move || match outcome.get() {
        Outcome { verdict: Verdict::Render, page: Some(page), .. } => page.render(),
        Outcome { verdict: Verdict::NotFound, .. } => view! { <NotFoundPage/> }.into_any(),
        Outcome { hydrate: true, .. } => match stalled.get() {
            Some(message) => view! {
                <div class="route-loading route-loading--stalled">
                    <p>{message}</p>
                    <button class="btn" on:click=move |_| request_hydration(auth, stalled)>"Try again"</button>
                </div>
            }
            .into_any(),
            None => loading_view(),
        },
        _ => loading_view(),
    }
}

fn loading_view() -> AnyView {
    view! { <div class="route-loading">"Loading..."</div> }.into_any()
}

/// Start hydration if the store accepts it.
fn request_hydration(auth: RwSignal<AuthState>, stalled: RwSignal<Option<String>>) {
    stalled.set(None);
    let started = auth
        .try_update(|state| state.store.dispatch(Action::GetMeRequest))
        .and_then(Transition::started);
    if let Some(request) = started {
        spawn_hydration(auth, stalled, request);
    }
}

/// Fetch the current user for hydration `request` and report back to the store.
fn spawn_hydration(auth: RwSignal<AuthState>, stalled: RwSignal<Option<String>>, request: RequestId) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let token = auth.with_untracked(|state| state.store.state().token().map(str::to_owned));
        let result = match token {
            Some(token) => crate::net::api::fetch_current_user(&token).await,
            None => Err(ApiError::from_status(401, None)),
        };
        let action = match result {
            Ok(user) => Action::GetMeSuccess { request, user },
            Err(error) => {
                stalled.set(stalled_message(&error));
                Action::GetMeFailure { request, error }
            }
        };
        auth.update(|state| {
            state.store.dispatch(action);
        });
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (auth, stalled, request);
}
