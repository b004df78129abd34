use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum View {
    Login,
    Employees,
    Employee,
    NewEmployee,
    Onboarding,
    Anything,
}

fn table() -> RouteTable<View> {
    RouteTable::new(vec![
        RouteDecl::public("/login", View::Login),
        RouteDecl::protected("/hr/employees", View::Employees).roles(&[Role::Admin, Role::Hr]),
        RouteDecl::protected("/hr/employees/:id", View::Employee).roles(&[Role::Admin, Role::Hr]),
        RouteDecl::protected("/hr/employees/new", View::NewEmployee).roles(&[Role::Hr]),
        RouteDecl::protected("/employee/onboarding/*", View::Onboarding).roles(&[Role::Employee]),
    ])
}

fn view_for(table: &RouteTable<View>, path: &str) -> Option<View> {
    table.match_path(path).map(|m| m.route.view)
}

// =============================================================
// matching
// =============================================================

#[test]
fn matches_literal_route() {
    assert_eq!(view_for(&table(), "/login"), Some(View::Login));
}

#[test]
fn ignores_query_fragment_and_trailing_slash() {
    let t = table();
    assert_eq!(view_for(&t, "/login?from=%2Fhr"), Some(View::Login));
    assert_eq!(view_for(&t, "/login#top"), Some(View::Login));
    assert_eq!(view_for(&t, "/hr/employees/"), Some(View::Employees));
}

#[test]
fn captures_named_param() {
    let t = table();
    let m = t.match_path("/hr/employees/42").unwrap();
    assert_eq!(m.route.view, View::Employee);
    assert_eq!(m.param("id"), Some("42"));
    assert_eq!(m.param("missing"), None);
}

#[test]
fn literal_beats_param_regardless_of_order() {
    assert_eq!(view_for(&table(), "/hr/employees/new"), Some(View::NewEmployee));
}

#[test]
fn wildcard_matches_empty_and_nested_tail() {
    let t = table();
    let m = t.match_path("/employee/onboarding").unwrap();
    assert_eq!(m.route.view, View::Onboarding);
    assert_eq!(m.param("*"), Some(""));

    let m = t.match_path("/employee/onboarding/step-2/documents").unwrap();
    assert_eq!(m.param("*"), Some("step-2/documents"));
}

#[test]
fn unmatched_path_is_none() {
    let t = table();
    assert_eq!(view_for(&t, "/payroll"), None);
    assert_eq!(view_for(&t, "/hr/employees/1/edit"), None);
    assert_eq!(view_for(&t, "/"), None);
}

#[test]
fn ties_resolve_to_declaration_order() {
    let t = RouteTable::new(vec![
        RouteDecl::protected("/:section", View::Employees),
        RouteDecl::protected("/*", View::Anything),
        RouteDecl::protected("/:other", View::Employee),
    ]);
    assert_eq!(view_for(&t, "/x"), Some(View::Employees));
    assert_eq!(view_for(&t, "/x/y"), Some(View::Anything));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Area {
    Root,
    CatchAll,
    Reports,
    ReportsTail,
    SectionNew,
    HrTail,
}

fn overlapping() -> RouteTable<Area> {
    RouteTable::new(vec![
        RouteDecl::protected("/*", Area::CatchAll),
        RouteDecl::protected("/", Area::Root),
        RouteDecl::protected("/reports/*", Area::ReportsTail),
        RouteDecl::protected("/reports", Area::Reports),
        RouteDecl::protected("/:section/new", Area::SectionNew),
        RouteDecl::protected("/hr/*", Area::HrTail),
    ])
}

#[test]
fn exact_root_beats_catch_all() {
    let t = overlapping();
    assert_eq!(t.match_path("/").map(|m| m.route.view), Some(Area::Root));
    assert_eq!(t.match_path("/elsewhere").map(|m| m.route.view), Some(Area::CatchAll));
}

#[test]
fn exact_literal_beats_wildcard_with_empty_tail() {
    let t = overlapping();
    assert_eq!(t.match_path("/reports").map(|m| m.route.view), Some(Area::Reports));
    assert_eq!(t.match_path("/reports/2024").map(|m| m.route.view), Some(Area::ReportsTail));
}

#[test]
fn earlier_literal_segment_outranks_longer_param_pattern() {
    let t = overlapping();
    assert_eq!(t.match_path("/hr/new").map(|m| m.route.view), Some(Area::HrTail));
    assert_eq!(t.match_path("/payroll/new").map(|m| m.route.view), Some(Area::SectionNew));
}

// =============================================================
// allow-lists
// =============================================================

#[test]
fn admits_checks_allow_list() {
    let open = RouteDecl::protected("/profile", ());
    assert!(open.admits(Some(Role::Employee)));
    assert!(open.admits(None));

    let hr_only = RouteDecl::protected("/hr", ()).roles(&[Role::Hr]);
    assert!(hr_only.admits(Some(Role::Hr)));
    assert!(!hr_only.admits(Some(Role::Admin)));
    assert!(!hr_only.admits(None));
}

// =============================================================
// validation
// =============================================================

#[test]
fn sample_table_is_valid() {
    assert_eq!(table().validate(), Ok(()));
}

#[test]
fn validate_rejects_relative_path() {
    let t = RouteTable::new(vec![RouteDecl::public("login", ())]);
    assert_eq!(t.validate(), Err(RouteTableError::NotAbsolute("login".to_owned())));
}

#[test]
fn validate_rejects_inner_wildcard() {
    let t = RouteTable::new(vec![RouteDecl::public("/a/*/b", ())]);
    assert_eq!(t.validate(), Err(RouteTableError::MisplacedWildcard("/a/*/b".to_owned())));
}

#[test]
fn validate_rejects_unnamed_param() {
    let t = RouteTable::new(vec![RouteDecl::public("/a/:", ())]);
    assert_eq!(t.validate(), Err(RouteTableError::EmptyParam("/a/:".to_owned())));
}

#[test]
fn validate_rejects_duplicate_shapes() {
    let t = RouteTable::new(vec![
        RouteDecl::public("/a/:id", ()),
        RouteDecl::public("/a/:slug/", ()),
    ]);
    assert_eq!(t.validate(), Err(RouteTableError::Duplicate("/a/:slug/".to_owned())));
}

#[test]
fn validate_rejects_empty_allow_list() {
    let t = RouteTable::new(vec![RouteDecl::protected("/locked", ()).roles(&[])]);
    assert_eq!(t.validate(), Err(RouteTableError::EmptyAllowList("/locked".to_owned())));
}

#[test]
fn strip_query_handles_plain_path() {
    assert_eq!(strip_query("/a/b"), "/a/b");
    assert_eq!(strip_query("/a?b#c"), "/a");
}
