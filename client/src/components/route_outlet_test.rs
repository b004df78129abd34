use session::{MemoryStorage, SessionStore, User};

use super::*;

fn restored(storage: MemoryStorage) -> AuthState<MemoryStorage> {
    let mut auth = AuthState::unrestored(storage);
    auth.restore();
    auth
}

fn user(role_id: i64) -> User {
    serde_json::from_str(&format!(r#"{{"id":9,"role_id":{role_id}}}"#)).unwrap()
}

fn logged_in(role_id: i64) -> AuthState<MemoryStorage> {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::new(storage.clone());
    let request = store.dispatch(Action::LoginRequest).started().unwrap();
    store.dispatch(Action::LoginSuccess { request, token: "t1".to_owned(), user: user(role_id) });
    restored(storage)
}

fn token_only() -> AuthState<MemoryStorage> {
    let storage = MemoryStorage::new();
    storage.set(session::storage::TOKEN_KEY, "t1").unwrap();
    restored(storage)
}

#[test]
fn full_path_joins_query() {
    assert_eq!(full_path("/hr/employees", ""), "/hr/employees");
    assert_eq!(full_path("/hr/employees", "?page=2"), "/hr/employees?page=2");
    assert_eq!(full_path("/hr/employees", "page=2"), "/hr/employees?page=2");
}

#[test]
fn unrestored_session_waits() {
    let auth = AuthState::unrestored(MemoryStorage::new());
    let outcome = outcome_for(&auth, "/profile", &GuardPaths::default());
    assert_eq!(outcome, Outcome { verdict: Verdict::Loading, page: None, hydrate: false });
}

#[test]
fn logged_out_visitor_is_sent_to_login() {
    let auth = restored(MemoryStorage::new());
    let outcome = outcome_for(&auth, "/profile", &GuardPaths::default());
    assert_eq!(outcome.verdict, Verdict::Redirect("/login?from=%2Fprofile".to_owned()));
    assert!(!outcome.hydrate);
}

#[test]
fn token_without_user_requests_hydration() {
    let auth = token_only();
    let outcome = outcome_for(&auth, "/profile", &GuardPaths::default());
    assert_eq!(outcome.verdict, Verdict::Loading);
    assert_eq!(outcome.page, Some(Page::Profile));
    assert!(outcome.hydrate);
}

#[test]
fn permitted_route_renders_its_page() {
    let auth = logged_in(2);
    let outcome = outcome_for(&auth, "/hr/reviews", &GuardPaths::default());
    assert_eq!(outcome.verdict, Verdict::Render);
    assert_eq!(outcome.page, Some(Page::Reviews));
}

#[test]
fn admin_is_denied_hr_only_page() {
    let auth = logged_in(1);
    let outcome = outcome_for(&auth, "/hr/career-events", &GuardPaths::default());
    assert_eq!(outcome.verdict, Verdict::Redirect("/no-authorized".to_owned()));
}

#[test]
fn unknown_path_is_not_found() {
    let auth = logged_in(1);
    let outcome = outcome_for(&auth, "/nope", &GuardPaths::default());
    assert_eq!(outcome.verdict, Verdict::NotFound);
    assert_eq!(outcome.page, None);
}

#[test]
fn transient_hydration_failure_names_the_error() {
    let message = stalled_message(&ApiError::from_status(503, None)).unwrap();
    assert_eq!(message, "Could not load your account: Server error (503). Please try again.");
    let message = stalled_message(&ApiError::Network("offline".to_owned())).unwrap();
    assert!(message.ends_with("network error: offline"), "{message}");
}

#[test]
fn rejected_credential_does_not_stall() {
    assert_eq!(stalled_message(&ApiError::from_status(401, None)), None);
}

#[test]
fn transient_failure_leaves_route_waiting_and_retry_is_accepted() {
    let mut auth = token_only();
    let request = auth.store.dispatch(Action::GetMeRequest).started().unwrap();
    auth.store.dispatch(Action::GetMeFailure { request, error: ApiError::from_status(503, None) });

    let outcome = outcome_for(&auth, "/profile", &GuardPaths::default());
    assert!(outcome.hydrate);
    assert_eq!(outcome.verdict, Verdict::Loading);
    assert!(auth.store.dispatch(Action::GetMeRequest).started().is_some());
}
