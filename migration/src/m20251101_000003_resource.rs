use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000002_relief_center::ReliefCenter;

static IDX_RESOURCE_CENTER_TYPE_KEY: &str = "idx-resource-center_id-type_key";
static FK_RESOURCE_CENTER_ID: &str = "fk-resource-center_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Resource::Table)
                    .if_not_exists()
                    .col(pk_auto(Resource::Id))
                    .col(integer(Resource::CenterId))
                    .col(string(Resource::ResourceType))
                    .col(string(Resource::TypeKey))
                    .col(integer(Resource::Quantity))
                    .col(timestamp_null(Resource::ExpiresAt))
                    .col(integer(Resource::Version).default(0))
                    .col(timestamp(Resource::CreatedAt))
                    .col(timestamp(Resource::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_RESOURCE_CENTER_ID)
                            .from(Resource::Table, Resource::CenterId)
                            .to(ReliefCenter::Table, ReliefCenter::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_RESOURCE_CENTER_TYPE_KEY)
                    .table(Resource::Table)
                    .col(Resource::CenterId)
                    .col(Resource::TypeKey)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Resource::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Resource {
    Table,
    Id,
    CenterId,
    ResourceType,
    TypeKey,
    Quantity,
    ExpiresAt,
    Version,
    CreatedAt,
    UpdatedAt,
}
