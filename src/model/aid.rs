use chrono::NaiveDateTime;
use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AidRequestDto {
    pub id: i32,
    pub user_id: i32,
    pub area_id: i32,
    pub request_type: String,
    pub description: String,
    pub urgency: String,
    pub status: String,
    pub people_count: i32,
    pub request_date: NaiveDateTime,
    pub response_time: Option<NaiveDateTime>,
}

impl From<entity::aid_request::Model> for AidRequestDto {
    fn from(model: entity::aid_request::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            area_id: model.area_id,
            request_type: model.request_type,
            description: model.description,
            urgency: model.urgency,
            status: model.status.to_value(),
            people_count: model.people_count,
            request_date: model.request_date,
            response_time: model.response_time,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateAidRequestDto {
    pub area_id: i32,
    pub request_type: String,
    pub description: String,
    pub urgency: String,
    pub people_count: i32,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AidPreparationDto {
    pub id: i32,
    pub request_id: i32,
    pub departure_time: Option<NaiveDateTime>,
    pub estimated_arrival: Option<NaiveDateTime>,
    pub status: String,
}

impl From<entity::aid_preparation::Model> for AidPreparationDto {
    fn from(model: entity::aid_preparation::Model) -> Self {
        Self {
            id: model.id,
            request_id: model.request_id,
            departure_time: model.departure_time,
            estimated_arrival: model.estimated_arrival,
            status: model.status.to_value(),
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdatePreparationTimesDto {
    pub departure_time: Option<NaiveDateTime>,
    pub estimated_arrival: Option<NaiveDateTime>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ResourceUsageRequestDto {
    pub resource_id: i32,
    pub quantity: i32,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ResourceUsageDto {
    pub id: i32,
    pub preparation_id: i32,
    pub resource_id: i32,
    pub quantity_used: i32,
}

impl From<entity::aid_preparation_resource::Model> for ResourceUsageDto {
    fn from(model: entity::aid_preparation_resource::Model) -> Self {
        Self {
            id: model.id,
            preparation_id: model.preparation_id,
            resource_id: model.resource_id,
            quantity_used: model.quantity_used,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AssignVolunteerDto {
    pub volunteer_id: i32,
}

/// A volunteer attached to a preparation or tracking record
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AssignmentDto {
    pub id: i32,
    /// Preparation or tracking ID the volunteer is attached to
    pub parent_id: i32,
    pub volunteer_id: i32,
}

impl From<entity::aid_preparation_volunteer::Model> for AssignmentDto {
    fn from(model: entity::aid_preparation_volunteer::Model) -> Self {
        Self {
            id: model.id,
            parent_id: model.preparation_id,
            volunteer_id: model.volunteer_id,
        }
    }
}

impl From<entity::rescue_tracking_volunteer::Model> for AssignmentDto {
    fn from(model: entity::rescue_tracking_volunteer::Model) -> Self {
        Self {
            id: model.id,
            parent_id: model.tracking_id,
            volunteer_id: model.volunteer_id,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RescueTrackingDto {
    pub id: i32,
    pub request_id: i32,
    pub status: String,
    pub start_time: Option<NaiveDateTime>,
    pub completion_time: Option<NaiveDateTime>,
    pub people_helped: i32,
}

impl From<entity::rescue_tracking::Model> for RescueTrackingDto {
    fn from(model: entity::rescue_tracking::Model) -> Self {
        Self {
            id: model.id,
            request_id: model.request_id,
            status: model.status.to_value(),
            start_time: model.start_time,
            completion_time: model.completion_time,
            people_helped: model.people_helped,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateRescueTrackingDto {
    pub request_id: i32,
    /// Pending or In Progress
    pub status: String,
    pub start_time: Option<NaiveDateTime>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateRescueTrackingDto {
    pub status: Option<String>,
    pub people_helped: Option<i32>,
    pub completion_time: Option<NaiveDateTime>,
}

/// A preparation a volunteer is assigned to, with the request it serves
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PreparationTaskDto {
    pub task: AidPreparationDto,
    pub request: AidRequestDto,
}

impl From<(entity::aid_preparation::Model, entity::aid_request::Model)> for PreparationTaskDto {
    fn from((task, request): (entity::aid_preparation::Model, entity::aid_request::Model)) -> Self {
        Self {
            task: task.into(),
            request: request.into(),
        }
    }
}

/// A rescue tracking a volunteer is assigned to, with the request it serves
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TrackingTaskDto {
    pub task: RescueTrackingDto,
    pub request: AidRequestDto,
}

impl From<(entity::rescue_tracking::Model, entity::aid_request::Model)> for TrackingTaskDto {
    fn from((task, request): (entity::rescue_tracking::Model, entity::aid_request::Model)) -> Self {
        Self {
            task: task.into(),
            request: request.into(),
        }
    }
}
