//! Factory functions for generating in-memory relief models.
//!
//! These are model instances with standard test values that don't require
//! database interaction, suitable for unit tests of pure logic.

use chrono::Utc;
use entity::sea_orm_active_enums::{AidRequestStatus, TrackingStatus};

/// Create an aid request model in the given status.
///
/// # Arguments
/// - `id` - Request ID
/// - `status` - Lifecycle status of the request
pub fn mock_aid_request_model(id: i32, status: AidRequestStatus) -> entity::aid_request::Model {
    let now = Utc::now().naive_utc();
    entity::aid_request::Model {
        id,
        user_id: 1,
        area_id: 1,
        request_type: "Medical".to_string(),
        description: "Test request".to_string(),
        urgency: "High".to_string(),
        status,
        people_count: 4,
        request_date: now,
        response_time: None,
        created_at: now,
        updated_at: now,
    }
}

/// Create a rescue tracking model in the given status.
///
/// A completed tracking carries a completion time, any other status does not.
pub fn mock_tracking_model(
    id: i32,
    request_id: i32,
    status: TrackingStatus,
) -> entity::rescue_tracking::Model {
    let now = Utc::now().naive_utc();
    entity::rescue_tracking::Model {
        id,
        request_id,
        status,
        start_time: Some(now),
        completion_time: (status == TrackingStatus::Completed).then_some(now),
        people_helped: 0,
        created_at: now,
        updated_at: now,
    }
}

/// Create a resource model with the given quantity and no expiry.
pub fn mock_resource_model(
    id: i32,
    center_id: i32,
    resource_type: &str,
    quantity: i32,
) -> entity::resource::Model {
    let now = Utc::now().naive_utc();
    entity::resource::Model {
        id,
        center_id,
        resource_type: resource_type.to_string(),
        type_key: resource_type.trim().to_lowercase(),
        quantity,
        expires_at: None,
        version: 0,
        created_at: now,
        updated_at: now,
    }
}
