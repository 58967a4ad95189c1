//! HTTP controller endpoints for the relief web API.
//!
//! Handlers extract the caller's [`RequestContext`](crate::server::model::context::RequestContext),
//! path parameters and JSON body, call a single service method and map the result to a
//! status code. Every handler is annotated with utoipa for the OpenAPI document.

pub mod aid;
/// Relief center endpoints
pub mod relief_center;
/// Donation and stock endpoints
pub mod resource;
/// User lookup, role change and removal
pub mod user;
/// Volunteer lifecycle and task endpoints
pub mod volunteer;
