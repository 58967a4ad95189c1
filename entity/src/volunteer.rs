use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::VolunteerStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "volunteer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub user_id: i32,
    pub assigned_center_id: Option<i32>,
    pub status: VolunteerStatus,
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
    AppUser,
    #[sea_orm(
        belongs_to = "super::relief_center::Entity",
        from = "Column::AssignedCenterId",
        to = "super::relief_center::Column::Id",
        on_delete = "Cascade"
    )]
    ReliefCenter,
}

impl Related<super::app_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AppUser.def()
    }
}

impl Related<super::relief_center::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReliefCenter.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
