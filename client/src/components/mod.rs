//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the app chrome around the routed page and read or write
//! the session and toast signals provided by `app::App`.

pub mod nav_bar;
pub mod route_outlet;
pub mod toast_stack;
