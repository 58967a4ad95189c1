use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "aid_preparation_resource")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub preparation_id: i32,
    pub resource_id: i32,
    pub quantity_used: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::aid_preparation::Entity",
        from = "Column::PreparationId",
        to = "super::aid_preparation::Column::Id",
        on_delete = "Cascade"
    )]
    AidPreparation,
    #[sea_orm(
        belongs_to = "super::resource::Entity",
        from = "Column::ResourceId",
        to = "super::resource::Column::Id",
        on_delete = "Cascade"
    )]
    Resource,
}

impl Related<super::aid_preparation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AidPreparation.def()
    }
}

impl Related<super::resource::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Resource.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
