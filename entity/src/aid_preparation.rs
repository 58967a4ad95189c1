use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::PreparationStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "aid_preparation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub request_id: i32,
    pub departure_time: Option<DateTime>,
    pub estimated_arrival: Option<DateTime>,
    pub status: PreparationStatus,
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
    #[sea_orm(has_many = "super::aid_preparation_resource::Entity")]
    AidPreparationResource,
    #[sea_orm(has_many = "super::aid_preparation_volunteer::Entity")]
    AidPreparationVolunteer,
}

impl Related<super::aid_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AidRequest.def()
    }
}

impl Related<super::aid_preparation_resource::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AidPreparationResource.def()
    }
}

impl Related<super::aid_preparation_volunteer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AidPreparationVolunteer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
