//! Route guard: render, wait, or redirect.
//!
//! ARCHITECTURE
//! ============
//! [`resolve`] looks the path up in the route table, then [`evaluate`] walks
//! a short-circuiting chain for guarded routes:
//!
//! 1. authentication: a token in memory *and* in durable storage
//! 2. hydration: a token but no user yet, so wait for `GetMeRequest`
//! 3. role allow-list
//! 4. onboarding status (Employee only)
//! 5. render
//!
//! The guard is a pure function of its inputs. It never dispatches; the UI
//! layer turns [`GuardState::Hydrating`] into `Action::GetMeRequest`, which the
//! store ignores while a request is already loading.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use url::form_urlencoded;

use crate::routes::{RouteDecl, RouteMatch, RouteTable, strip_query};
use crate::user::{OnboardingStatus, Role, User};

/// Session facts the guard branches on.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GuardContext<'a> {
    pub token: Option<&'a str>,
    /// Whether durable storage holds a token. Authoritative over `token`.
    pub persisted_token: bool,
    pub user: Option<&'a User>,
    pub loading: bool,
}

/// Redirect targets used by the guard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardPaths {
    pub login: String,
    pub not_authorized: String,
    pub waiting_approval: String,
    /// Every path at or below this prefix belongs to the onboarding flow.
    pub onboarding_prefix: String,
    pub onboarding_entry: String,
}

impl Default for GuardPaths {
    fn default() -> Self {
        Self {
            login: "/login".to_owned(),
            not_authorized: "/no-authorized".to_owned(),
            waiting_approval: "/employee/waiting-approval".to_owned(),
            onboarding_prefix: "/employee/onboarding".to_owned(),
            onboarding_entry: "/employee/onboarding".to_owned(),
        }
    }
}

/// Where one navigation attempt on a guarded route ends up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardState {
    /// No usable credential. `from` is the attempted location.
    Unauthenticated { from: String },
    /// Credential present, user not loaded yet.
    Hydrating,
    /// User's role is not on the route's allow-list.
    RoleDenied,
    /// Employee whose onboarding status pins them to `target`.
    OnboardingGated { target: String },
    Permitted,
}

impl GuardState {
    #[must_use]
    pub fn verdict(&self, paths: &GuardPaths) -> Verdict {
        match self {
            Self::Unauthenticated { from } => Verdict::Redirect(login_redirect(&paths.login, from)),
            Self::Hydrating => Verdict::Loading,
            Self::RoleDenied => Verdict::Redirect(paths.not_authorized.clone()),
            Self::OnboardingGated { target } => Verdict::Redirect(target.clone()),
            Self::Permitted => Verdict::Render,
        }
    }
}

/// What the UI should do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Render,
    /// Show an interstitial; the session is hydrating.
    Loading,
    Redirect(String),
    NotFound,
}

/// Outcome of looking a path up and guarding it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution<'a, V> {
    NotFound,
    Public(RouteMatch<'a, V>),
    Guarded(RouteMatch<'a, V>, GuardState),
}

impl<V> Resolution<'_, V> {
    #[must_use]
    pub fn verdict(&self, paths: &GuardPaths) -> Verdict {
        match self {
            Self::NotFound => Verdict::NotFound,
            Self::Public(_) => Verdict::Render,
            Self::Guarded(_, state) => state.verdict(paths),
        }
    }

    /// Matched route, if any.
    #[must_use]
    pub fn route_match(&self) -> Option<&RouteMatch<'_, V>> {
        match self {
            Self::NotFound => None,
            Self::Public(m) | Self::Guarded(m, _) => Some(m),
        }
    }
}

/// Match `path` in `table` and guard it. Unknown paths are `NotFound` whatever
/// the session looks like; public routes bypass the guard.
pub fn resolve<'a, V>(
    table: &'a RouteTable<V>,
    ctx: &GuardContext<'_>,
    path: &str,
    paths: &GuardPaths,
) -> Resolution<'a, V> {
    let Some(matched) = table.match_path(path) else {
        return Resolution::NotFound;
    };
    if !matched.route.authenticated {
        return Resolution::Public(matched);
    }
    let state = evaluate(ctx, matched.route, path, paths);
    Resolution::Guarded(matched, state)
}

/// Run the guard chain for one guarded route.
pub fn evaluate<V>(ctx: &GuardContext<'_>, route: &RouteDecl<V>, path: &str, paths: &GuardPaths) -> GuardState {
    if ctx.token.is_none() || !ctx.persisted_token {
        return GuardState::Unauthenticated { from: path.to_owned() };
    }
    let Some(user) = ctx.user else {
        return GuardState::Hydrating;
    };
    if !route.admits(user.role()) {
        return GuardState::RoleDenied;
    }
    if let Some(target) = onboarding_target(user, path, paths) {
        return GuardState::OnboardingGated { target };
    }
    GuardState::Permitted
}

fn onboarding_target(user: &User, path: &str, paths: &GuardPaths) -> Option<String> {
    if user.role() != Some(Role::Employee) {
        return None;
    }
    let path = strip_query(path);
    match user.onboarding_status? {
        OnboardingStatus::PendingApproval if !same_path(path, &paths.waiting_approval) => {
            Some(paths.waiting_approval.clone())
        }
        OnboardingStatus::Pending | OnboardingStatus::InProgress if !is_under(path, &paths.onboarding_prefix) => {
            Some(paths.onboarding_entry.clone())
        }
        _ => None,
    }
}

fn trim_slash(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

fn same_path(a: &str, b: &str) -> bool {
    trim_slash(a) == trim_slash(b)
}

/// `path` equals `prefix` or sits below it on a segment boundary.
fn is_under(path: &str, prefix: &str) -> bool {
    let path = trim_slash(path);
    let prefix = trim_slash(prefix);
    path == prefix
        || path
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/') || prefix == "/")
}

/// Login URL that remembers where the user was headed.
#[must_use]
pub fn login_redirect(login: &str, from: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("from", from)
        .finish();
    format!("{login}?{query}")
}

/// Pull the `from` parameter out of a query string (leading `?` optional).
#[must_use]
pub fn from_param(query: &str) -> Option<String> {
    form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
        .find(|(key, _)| key == "from")
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Where to go after login: the remembered location when it is a local path,
/// otherwise the role's home page.
#[must_use]
pub fn return_target(from: Option<&str>, user: &User, paths: &GuardPaths) -> String {
    from.filter(|f| is_local_path(f))
        .filter(|f| !same_path(strip_query(f), &paths.login))
        .map_or_else(
            || user.role().map_or("/", Role::home_path).to_owned(),
            str::to_owned,
        )
}

fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.contains('\\')
}
