use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ReliefCenterDto {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub volunteer_count: i32,
    pub max_capacity: i32,
    pub manager_id: Option<i32>,
}

impl From<entity::relief_center::Model> for ReliefCenterDto {
    fn from(model: entity::relief_center::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            location: model.location,
            volunteer_count: model.volunteer_count,
            max_capacity: model.max_capacity,
            manager_id: model.manager_id,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateReliefCenterDto {
    pub name: String,
    pub location: String,
    pub max_capacity: i32,
    pub manager_id: Option<i32>,
}
