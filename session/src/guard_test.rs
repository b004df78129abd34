use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Page {
    Login,
    AdminDashboard,
    HrDashboard,
    EmployeeDashboard,
    Onboarding,
    WaitingApproval,
    Profile,
}

fn table() -> RouteTable<Page> {
    RouteTable::new(vec![
        RouteDecl::public("/login", Page::Login),
        RouteDecl::protected("/admin/dashboard", Page::AdminDashboard).roles(&[Role::Admin]),
        RouteDecl::protected("/hr/dashboard", Page::HrDashboard).roles(&[Role::Hr]),
        RouteDecl::protected("/employee/dashboard", Page::EmployeeDashboard).roles(&[Role::Employee]),
        RouteDecl::protected("/employee/onboarding/*", Page::Onboarding).roles(&[Role::Employee]),
        RouteDecl::protected("/employee/waiting-approval", Page::WaitingApproval).roles(&[Role::Employee]),
        RouteDecl::protected("/profile", Page::Profile),
    ])
}

fn user(role_id: i64, status: Option<OnboardingStatus>) -> User {
    let mut user: User = serde_json::from_str(&format!(r#"{{"id":7,"role_id":{role_id}}}"#)).unwrap();
    user.onboarding_status = status;
    user
}

fn ctx<'a>(token: Option<&'a str>, user: Option<&'a User>) -> GuardContext<'a> {
    GuardContext { token, persisted_token: token.is_some(), user, loading: false }
}

fn verdict(ctx: &GuardContext<'_>, path: &str) -> Verdict {
    let paths = GuardPaths::default();
    resolve(&table(), ctx, path, &paths).verdict(&paths)
}

fn redirect(target: &str) -> Verdict {
    Verdict::Redirect(target.to_owned())
}

// =============================================================
// lookup
// =============================================================

#[test]
fn unknown_path_is_not_found_regardless_of_session() {
    let admin = user(1, None);
    assert_eq!(verdict(&ctx(None, None), "/payroll"), Verdict::NotFound);
    assert_eq!(verdict(&ctx(Some("t1"), Some(&admin)), "/payroll"), Verdict::NotFound);
}

#[test]
fn public_route_bypasses_guard() {
    assert_eq!(verdict(&ctx(None, None), "/login"), Verdict::Render);
    let paths = GuardPaths::default();
    let t = table();
    let resolution = resolve(&t, &ctx(None, None), "/login", &paths);
    assert!(matches!(resolution, Resolution::Public(_)));
    assert_eq!(resolution.route_match().map(|m| m.route.view), Some(Page::Login));
}

// =============================================================
// authentication
// =============================================================

#[test]
fn missing_token_redirects_to_login_whatever_the_user() {
    let admin = user(1, None);
    for session in [ctx(None, None), ctx(None, Some(&admin))] {
        assert_eq!(
            verdict(&session, "/admin/dashboard"),
            redirect("/login?from=%2Fadmin%2Fdashboard")
        );
    }
}

#[test]
fn login_redirect_preserves_query() {
    assert_eq!(
        verdict(&ctx(None, None), "/profile?tab=security"),
        redirect("/login?from=%2Fprofile%3Ftab%3Dsecurity")
    );
}

#[test]
fn storage_without_token_overrides_memory() {
    let admin = user(1, None);
    let session = GuardContext { persisted_token: false, ..ctx(Some("t1"), Some(&admin)) };
    assert!(matches!(
        evaluate(&session, &table().routes()[1], "/admin/dashboard", &GuardPaths::default()),
        GuardState::Unauthenticated { .. }
    ));
}

// =============================================================
// hydration
// =============================================================

#[test]
fn token_without_user_is_hydrating() {
    assert_eq!(verdict(&ctx(Some("t1"), None), "/profile"), Verdict::Loading);
    let loading = GuardContext { loading: true, ..ctx(Some("t1"), None) };
    assert_eq!(verdict(&loading, "/profile"), Verdict::Loading);
}

// =============================================================
// roles
// =============================================================

#[test]
fn role_outside_allow_list_is_denied() {
    let admin = user(1, None);
    assert_eq!(verdict(&ctx(Some("t1"), Some(&admin)), "/hr/dashboard"), redirect("/no-authorized"));
}

#[test]
fn unknown_role_is_denied_by_allow_list_but_not_by_open_route() {
    let odd = user(9, None);
    let session = ctx(Some("t1"), Some(&odd));
    assert_eq!(verdict(&session, "/hr/dashboard"), redirect("/no-authorized"));
    assert_eq!(verdict(&session, "/profile"), Verdict::Render);
}

#[test]
fn role_in_allow_list_renders() {
    let hr = user(2, None);
    assert_eq!(verdict(&ctx(Some("t1"), Some(&hr)), "/hr/dashboard"), Verdict::Render);
}

#[test]
fn role_check_runs_before_onboarding_check() {
    let pending = user(3, Some(OnboardingStatus::Pending));
    assert_eq!(verdict(&ctx(Some("t1"), Some(&pending)), "/hr/dashboard"), redirect("/no-authorized"));
}

// =============================================================
// onboarding
// =============================================================

#[test]
fn pending_approval_pins_to_waiting_page() {
    let employee = user(3, Some(OnboardingStatus::PendingApproval));
    let session = ctx(Some("t1"), Some(&employee));
    assert_eq!(verdict(&session, "/employee/dashboard"), redirect("/employee/waiting-approval"));
    assert_eq!(verdict(&session, "/employee/onboarding/step-1"), redirect("/employee/waiting-approval"));
    assert_eq!(verdict(&session, "/profile"), redirect("/employee/waiting-approval"));
    assert_eq!(verdict(&session, "/employee/waiting-approval"), Verdict::Render);
    assert_eq!(verdict(&session, "/employee/waiting-approval/"), Verdict::Render);
}

#[test]
fn in_progress_pins_to_onboarding_flow() {
    let employee = user(3, Some(OnboardingStatus::InProgress));
    let session = ctx(Some("t1"), Some(&employee));
    assert_eq!(verdict(&session, "/employee/dashboard"), redirect("/employee/onboarding"));
    assert_eq!(verdict(&session, "/employee/onboarding/step-2"), Verdict::Render);
    assert_eq!(verdict(&session, "/employee/onboarding"), Verdict::Render);
}

#[test]
fn pending_behaves_like_in_progress() {
    let employee = user(3, Some(OnboardingStatus::Pending));
    let session = ctx(Some("t1"), Some(&employee));
    assert_eq!(verdict(&session, "/profile"), redirect("/employee/onboarding"));
    assert_eq!(verdict(&session, "/employee/onboarding/step-1?draft=1"), Verdict::Render);
}

#[test]
fn completed_or_missing_status_is_not_gated() {
    for status in [Some(OnboardingStatus::Completed), None] {
        let employee = user(3, status);
        assert_eq!(verdict(&ctx(Some("t1"), Some(&employee)), "/employee/dashboard"), Verdict::Render);
    }
}

#[test]
fn onboarding_status_ignored_for_non_employees() {
    let hr = user(2, Some(OnboardingStatus::InProgress));
    assert_eq!(verdict(&ctx(Some("t1"), Some(&hr)), "/hr/dashboard"), Verdict::Render);
}

#[test]
fn prefix_check_respects_segment_boundary() {
    assert!(is_under("/employee/onboarding", "/employee/onboarding"));
    assert!(is_under("/employee/onboarding/step-3", "/employee/onboarding/"));
    assert!(!is_under("/employee/onboarding-legacy", "/employee/onboarding"));
    assert!(!is_under("/employee", "/employee/onboarding"));
}

#[test]
fn evaluation_is_deterministic() {
    let employee = user(3, Some(OnboardingStatus::InProgress));
    let session = ctx(Some("t1"), Some(&employee));
    let first = verdict(&session, "/employee/dashboard");
    for _ in 0..10 {
        assert_eq!(verdict(&session, "/employee/dashboard"), first);
    }
}

// =============================================================
// login round trip helpers
// =============================================================

#[test]
fn from_param_decodes_login_redirect() {
    let url = login_redirect("/login", "/hr/employees?page=2");
    let query = url.split_once('?').map(|(_, q)| q).unwrap();
    assert_eq!(from_param(query).as_deref(), Some("/hr/employees?page=2"));
    assert_eq!(from_param("?from=%2Fprofile").as_deref(), Some("/profile"));
    assert_eq!(from_param("other=1"), None);
    assert_eq!(from_param("from="), None);
}

#[test]
fn return_target_prefers_local_from() {
    let hr = user(2, None);
    let paths = GuardPaths::default();
    assert_eq!(return_target(Some("/hr/employees"), &hr, &paths), "/hr/employees");
}

#[test]
fn return_target_rejects_foreign_or_login_targets() {
    let hr = user(2, None);
    let paths = GuardPaths::default();
    for from in ["https://evil.example", "//evil.example", "/\\evil", "/login?from=%2F", "relative"] {
        assert_eq!(return_target(Some(from), &hr, &paths), "/hr/dashboard", "from={from}");
    }
    assert_eq!(return_target(None, &hr, &paths), "/hr/dashboard");
}

#[test]
fn return_target_for_unknown_role_is_root() {
    let odd = user(42, None);
    assert_eq!(return_target(None, &odd, &GuardPaths::default()), "/");
}
