use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "donation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub donor_user_id: i32,
    pub center_id: i32,
    pub donation_type: String,
    pub quantity: i32,
    pub received_at: DateTime,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::app_user::Entity",
        from = "Column::DonorUserId",
        to = "super::app_user::Column::Id",
        on_delete = "Cascade"
    )]
    Donor,
    #[sea_orm(
        belongs_to = "super::relief_center::Entity",
        from = "Column::CenterId",
        to = "super::relief_center::Column::Id",
        on_delete = "Cascade"
    )]
    ReliefCenter,
}

impl Related<super::app_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Donor.def()
    }
}

impl Related<super::relief_center::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReliefCenter.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
