//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages are rendered by the route outlet after the guard has admitted the
//! navigation, so none of them re-check authentication or roles.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod not_authorized;
pub mod not_found;
pub mod onboarding;
pub mod profile;
pub mod section;
