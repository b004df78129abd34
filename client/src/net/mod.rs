//! Networking modules for the HRMS REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and normalizes failures into
//! `session::ApiError`; `types` holds the request/response bodies.

pub mod api;
pub mod types;
