use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "resource")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub center_id: i32,
    pub resource_type: String,
    /// Trimmed, lowercased `resource_type` used to match credits to existing stock
    pub type_key: String,
    pub quantity: i32,
    pub expires_at: Option<DateTime>,
    pub version: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::relief_center::Entity",
        from = "Column::CenterId",
        to = "super::relief_center::Column::Id",
        on_delete = "Cascade"
    )]
    ReliefCenter,
}

impl Related<super::relief_center::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReliefCenter.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
