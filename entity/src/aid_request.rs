use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::AidRequestStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "aid_request")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub area_id: i32,
    pub request_type: String,
    pub description: String,
    pub urgency: String,
    pub status: AidRequestStatus,
    pub people_count: i32,
    pub request_date: DateTime,
    /// Set the first time the request leaves `Pending`
    pub response_time: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::app_user::Entity",
        from = "Column::UserId",
        to = "super::app_user::Column::Id",
        on_delete = "Cascade"
    )]
    Requester,
    #[sea_orm(has_one = "super::aid_preparation::Entity")]
    AidPreparation,
    #[sea_orm(has_one = "super::rescue_tracking::Entity")]
    RescueTracking,
}

impl Related<super::app_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Requester.def()
    }
}

impl Related<super::aid_preparation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AidPreparation.def()
    }
}

impl Related<super::rescue_tracking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RescueTracking.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
