//! The application's route table.
//!
//! Every page is registered here and nowhere else. The outlet looks paths up
//! in [`ROUTES`] and the guard enforces `authenticated` and the role lists.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::sync::LazyLock;

use leptos::prelude::*;
use session::{Role, RouteDecl, RouteTable};

use crate::pages::{
    dashboard::DashboardPage,
    home::HomePage,
    login::{ForgotPasswordPage, LoginPage},
    not_authorized::NotAuthorizedPage,
    onboarding::{OnboardingPage, WaitingApprovalPage},
    profile::ProfilePage,
    section::SectionPage,
};

const ADMIN: &[Role] = &[Role::Admin];
const STAFF: &[Role] = &[Role::Admin, Role::Hr];
const HR: &[Role] = &[Role::Hr];
const EMPLOYEE: &[Role] = &[Role::Employee];

/// Views the route table can point at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Login,
    ForgotPassword,
    NotAuthorized,
    Home,
    Profile,
    AdminDashboard,
    Departments,
    JobTitles,
    HrDashboard,
    Employees,
    NewEmployee,
    EmployeeDetail,
    CareerEvents,
    Reviews,
    EmployeeDashboard,
    Onboarding,
    WaitingApproval,
}

impl Page {
    pub fn render(self) -> AnyView {
        match self {
            Self::Login => view! { <LoginPage/> }.into_any(),
            Self::ForgotPassword => view! { <ForgotPasswordPage/> }.into_any(),
            Self::NotAuthorized => view! { <NotAuthorizedPage/> }.into_any(),
            Self::Home => view! { <HomePage/> }.into_any(),
            Self::Profile => view! { <ProfilePage/> }.into_any(),
            Self::AdminDashboard => view! { <DashboardPage role=Role::Admin/> }.into_any(),
            Self::HrDashboard => view! { <DashboardPage role=Role::Hr/> }.into_any(),
            Self::EmployeeDashboard => view! { <DashboardPage role=Role::Employee/> }.into_any(),
            Self::Onboarding => view! { <OnboardingPage/> }.into_any(),
            Self::WaitingApproval => view! { <WaitingApprovalPage/> }.into_any(),
            Self::Departments
            | Self::JobTitles
            | Self::Employees
            | Self::NewEmployee
            | Self::EmployeeDetail
            | Self::CareerEvents
            | Self::Reviews => view! { <SectionPage page=self/> }.into_any(),
        }
    }

    /// Heading for administrative section pages.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Sign in",
            Self::ForgotPassword => "Reset password",
            Self::NotAuthorized => "Not authorized",
            Self::Home => "Home",
            Self::Profile => "My profile",
            Self::AdminDashboard | Self::HrDashboard | Self::EmployeeDashboard => "Dashboard",
            Self::Departments => "Departments",
            Self::JobTitles => "Job titles",
            Self::Employees => "Employees",
            Self::NewEmployee => "New employee",
            Self::EmployeeDetail => "Employee",
            Self::CareerEvents => "Career events",
            Self::Reviews => "Reviews",
            Self::Onboarding => "Onboarding",
            Self::WaitingApproval => "Waiting for approval",
        }
    }
}

/// Build the table. Public pages first, then by area.
#[must_use]
pub fn route_table() -> RouteTable<Page> {
    RouteTable::new(vec![
        RouteDecl::public("/login", Page::Login),
        RouteDecl::public("/forgot-password", Page::ForgotPassword),
        RouteDecl::public("/no-authorized", Page::NotAuthorized),
        RouteDecl::protected("/", Page::Home),
        RouteDecl::protected("/profile", Page::Profile),
        RouteDecl::protected("/admin/dashboard", Page::AdminDashboard).roles(ADMIN),
        RouteDecl::protected("/admin/departments", Page::Departments).roles(ADMIN),
        RouteDecl::protected("/admin/job-titles", Page::JobTitles).roles(ADMIN),
        RouteDecl::protected("/hr/dashboard", Page::HrDashboard).roles(HR),
        RouteDecl::protected("/hr/employees", Page::Employees).roles(STAFF),
        RouteDecl::protected("/hr/employees/new", Page::NewEmployee).roles(HR),
        RouteDecl::protected("/hr/employees/:id", Page::EmployeeDetail).roles(STAFF),
        RouteDecl::protected("/hr/career-events", Page::CareerEvents).roles(HR),
        RouteDecl::protected("/hr/reviews", Page::Reviews).roles(STAFF),
        RouteDecl::protected("/employee/dashboard", Page::EmployeeDashboard).roles(EMPLOYEE),
        RouteDecl::protected("/employee/onboarding/*", Page::Onboarding).roles(EMPLOYEE),
        RouteDecl::protected("/employee/waiting-approval", Page::WaitingApproval).roles(EMPLOYEE),
    ])
}

pub static ROUTES: LazyLock<RouteTable<Page>> = LazyLock::new(route_table);

/// Navigation links shown to `role`, as `(path, label)`.
#[must_use]
pub fn nav_links(role: Role) -> &'static [(&'static str, &'static str)] {
    match role {
        Role::Admin => &[
            ("/admin/dashboard", "Dashboard"),
            ("/admin/departments", "Departments"),
            ("/admin/job-titles", "Job titles"),
            ("/hr/employees", "Employees"),
            ("/hr/reviews", "Reviews"),
        ],
        Role::Hr => &[
            ("/hr/dashboard", "Dashboard"),
            ("/hr/employees", "Employees"),
            ("/hr/employees/new", "New employee"),
            ("/hr/career-events", "Career events"),
            ("/hr/reviews", "Reviews"),
        ],
        Role::Employee => &[("/employee/dashboard", "Dashboard"), ("/profile", "Profile")],
    }
}
