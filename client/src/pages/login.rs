//! Login page: email + password sign-in and the password-reset notice.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submitting dispatches `LoginRequest`, performs the HTTP call, and reports
//! the result back to the session store. The page never touches storage
//! itself. Once a session exists it leaves for the `from` location the guard
//! recorded, or for the user's role home.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};
use session::guard::{from_param, return_target};
use session::{Action, ApiError, GuardPaths, RequestId, Transition, User};

use crate::state::auth::AuthState;

/// Trim and require both credentials.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Text shown when sign-in fails. A 401 here means bad credentials, not an
/// expired session.
fn login_failure_message(error: &ApiError) -> String {
    if error.is_unauthorized() {
        "Invalid email or password.".to_owned()
    } else {
        error.to_string()
    }
}

/// Completion action for login `request`. Failures reach the user only
/// through the store's outcome, which the app shows as a toast.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn login_completion(request: RequestId, result: Result<(String, User), ApiError>) -> Action {
    match result {
        Ok((token, user)) => Action::LoginSuccess { request, token, user },
        Err(e) => Action::LoginFailure { request, message: login_failure_message(&e) },
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = move || auth.with(|a| a.store.state().loading());

    Effect::new(move || {
        let search = location.search.get();
        let target = auth.with(|a| {
            a.user()
                .filter(|_| a.is_authenticated())
                .map(|user| return_target(from_param(&search).as_deref(), user, &GuardPaths::default()))
        });
        if let Some(target) = target {
            navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        info.set(String::new());
        let Some(request) = auth
            .try_update(|a| a.store.dispatch(Action::LoginRequest))
            .and_then(Transition::started)
        else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let action = login_completion(request, crate::net::api::login(&email_value, &password_value).await);
            password.set(String::new());
            auth.update(|a| {
                a.store.dispatch(action);
            });
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (email_value, password_value, request);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"HRMS"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@company.com"
                        autocomplete="username"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn login-button" type="submit" disabled=busy>
                        {move || if busy() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <a class="login-link" href="/forgot-password">"Forgot your password?"</a>
            </div>
        </div>
    }
}

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Reset password"</h1>
                <p class="login-card__subtitle">
                    "Password resets are handled by your HR department. Contact them to receive a new temporary password."
                </p>
                <a class="login-link" href="/login">"Back to sign in"</a>
            </div>
        </div>
    }
}
