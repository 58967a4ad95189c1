use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub phone_no: String,
    pub role: String,
}

impl From<entity::app_user::Model> for UserDto {
    fn from(model: entity::app_user::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            name: model.name,
            phone_no: model.phone_no,
            role: model.role.to_value(),
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct VolunteerDto {
    pub id: i32,
    pub user_id: i32,
    pub assigned_center_id: Option<i32>,
    pub status: String,
}

impl From<entity::volunteer::Model> for VolunteerDto {
    fn from(model: entity::volunteer::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            assigned_center_id: model.assigned_center_id,
            status: model.status.to_value(),
        }
    }
}

/// Self-registration of a new volunteer account
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RegisterVolunteerDto {
    pub email: String,
    pub name: String,
    pub phone_no: String,
    pub center_id: i32,
    pub skill_ids: Vec<i32>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ChangeUserRoleDto {
    /// One of Admin, Volunteer, User
    pub role: String,
    /// Required when the new role is Volunteer
    pub center_id: Option<i32>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ReassignVolunteerDto {
    pub center_id: i32,
}
