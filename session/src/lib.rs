//! # session
//!
//! Session state machine and route guard for the HRMS single-page app.
//!
//! This crate owns who is logged in (token + user), how that survives a
//! reload (durable storage), and whether a given navigation may render. It is
//! UI-agnostic: the `client` crate wires it into Leptos, and everything here
//! is testable on the native target.
//!
//! ARCHITECTURE
//! ============
//! - [`store::SessionStore`] is the single mutation point. Transitions go
//!   through [`store::SessionStore::dispatch`]; readers use selectors.
//! - [`routes::RouteTable`] is pure data: path patterns, role requirements,
//!   and an opaque view handle.
//! - [`guard::resolve`] is a pure function of `(session, route, path)`.

pub mod error;
pub mod guard;
pub mod notify;
pub mod routes;
pub mod state;
pub mod storage;
pub mod store;
pub mod user;

pub use error::{ApiError, RouteTableError, StorageError};
pub use guard::{GuardContext, GuardPaths, GuardState, Resolution, Verdict, resolve};
pub use notify::{Notice, NoticeLevel, NotificationSink};
pub use routes::{RouteDecl, RouteMatch, RouteTable};
pub use state::SessionState;
pub use storage::{MemoryStorage, SessionStorage};
pub use store::{Action, RequestId, SessionStore, Transition};
pub use user::{OnboardingStatus, Role, User};
