use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::TrackingStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "rescue_tracking")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub request_id: i32,
    pub status: TrackingStatus,
    pub start_time: Option<DateTime>,
    pub completion_time: Option<DateTime>,
    pub people_helped: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::aid_request::Entity",
        from = "Column::RequestId",
        to = "super::aid_request::Column::Id",
        on_delete = "Cascade"
    )]
    AidRequest,
    #[sea_orm(has_many = "super::rescue_tracking_volunteer::Entity")]
    RescueTrackingVolunteer,
}

impl Related<super::aid_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AidRequest.def()
    }
}

impl Related<super::rescue_tracking_volunteer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RescueTrackingVolunteer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
