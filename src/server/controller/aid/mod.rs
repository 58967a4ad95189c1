//! Aid request, preparation and rescue tracking endpoints.

/// Dispatch planning: times, status, resource usage and volunteers
pub mod preparation;
/// Filing, listing and triage of aid requests
pub mod request;
/// In-field rescue execution
pub mod tracking;

/// OpenAPI tag of the aid lifecycle endpoints
pub static AID_TAG: &str = "aid";
