//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Handlers sharing a path are registered together so their methods end up on one route.
/// Apart from volunteer registration, every endpoint expects the caller identity headers
/// set by the upstream authenticator.
///
/// # Registered Endpoints
/// - `/api/donations` - Donate stock, list own donations, list all donations
/// - `/api/resources` - Manual stock credit and resource lookup
/// - `/api/centers` - Relief centers, their stock and volunteer recount
/// - `/api/volunteers` - Registration, status, reassignment, removal and assigned tasks
/// - `/api/users` - Lookup, role change and removal
/// - `/api/aid-requests` - Aid requests, per-user listing and their preparation
/// - `/api/preparations`, `/api/resource-usages` - Dispatch planning
/// - `/api/rescue-trackings` - Rescue execution
///
/// # OpenAPI Documentation
/// The OpenAPI specification is available at `/api/docs/openapi.json` and Swagger UI is
/// served at `/api/docs`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Relief", description = "Disaster relief coordination API"), tags(
        (name = controller::resource::RESOURCE_TAG, description = "Donations and resource stock"),
        (name = controller::relief_center::CENTER_TAG, description = "Relief centers and capacity"),
        (name = controller::volunteer::VOLUNTEER_TAG, description = "Volunteer lifecycle"),
        (name = controller::user::USER_TAG, description = "User accounts and roles"),
        (name = controller::aid::AID_TAG, description = "Aid requests, preparations and rescues"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::resource::create_donation,
            controller::resource::list_donations
        ))
        .routes(routes!(controller::resource::list_all_donations))
        .routes(routes!(controller::resource::credit_stock))
        .routes(routes!(controller::resource::get_resource))
        .routes(routes!(controller::resource::list_center_resources))
        .routes(routes!(
            controller::relief_center::create_center,
            controller::relief_center::list_centers
        ))
        .routes(routes!(
            controller::relief_center::get_center,
            controller::relief_center::delete_center
        ))
        .routes(routes!(controller::relief_center::recount_center))
        .routes(routes!(controller::volunteer::register_volunteer))
        .routes(routes!(
            controller::volunteer::get_volunteer,
            controller::volunteer::delete_volunteer
        ))
        .routes(routes!(controller::volunteer::update_volunteer_status))
        .routes(routes!(controller::volunteer::reassign_volunteer))
        .routes(routes!(controller::volunteer::list_preparation_tasks))
        .routes(routes!(controller::volunteer::list_tracking_tasks))
        .routes(routes!(
            controller::user::get_user,
            controller::user::delete_user
        ))
        .routes(routes!(controller::user::change_user_role))
        .routes(routes!(
            controller::aid::request::create_aid_request,
            controller::aid::request::list_aid_requests
        ))
        .routes(routes!(controller::aid::request::list_user_aid_requests))
        .routes(routes!(controller::aid::request::get_aid_request))
        .routes(routes!(controller::aid::request::update_aid_request_status))
        .routes(routes!(controller::aid::preparation::create_preparation))
        .routes(routes!(controller::aid::preparation::get_preparation))
        .routes(routes!(controller::aid::preparation::update_preparation_times))
        .routes(routes!(controller::aid::preparation::update_preparation_status))
        .routes(routes!(
            controller::aid::preparation::add_resource_usage,
            controller::aid::preparation::list_resource_usage
        ))
        .routes(routes!(
            controller::aid::preparation::update_resource_usage,
            controller::aid::preparation::delete_resource_usage
        ))
        .routes(routes!(
            controller::aid::preparation::add_preparation_volunteer,
            controller::aid::preparation::list_preparation_volunteers
        ))
        .routes(routes!(controller::aid::preparation::remove_preparation_volunteer))
        .routes(routes!(controller::aid::tracking::create_tracking))
        .routes(routes!(
            controller::aid::tracking::get_tracking,
            controller::aid::tracking::update_tracking
        ))
        .routes(routes!(
            controller::aid::tracking::assign_tracking_volunteer,
            controller::aid::tracking::list_tracking_volunteers
        ))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
