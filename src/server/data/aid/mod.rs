//! Repositories for aid requests and the preparation and tracking records created from them.

/// `aid_preparation` rows with their resource usages and volunteer assignments
pub mod preparation;
/// `aid_request` rows
pub mod request;
/// `rescue_tracking` rows and their volunteer assignments
pub mod tracking;
