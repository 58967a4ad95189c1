use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000003_resource::Resource, m20251101_000009_aid_preparation::AidPreparation,
};

static IDX_PREPARATION_RESOURCE_PREPARATION_ID: &str =
    "idx-aid_preparation_resource-preparation_id";
static FK_PREPARATION_RESOURCE_PREPARATION_ID: &str = "fk-aid_preparation_resource-preparation_id";
static FK_PREPARATION_RESOURCE_RESOURCE_ID: &str = "fk-aid_preparation_resource-resource_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AidPreparationResource::Table)
                    .if_not_exists()
                    .col(pk_auto(AidPreparationResource::Id))
                    .col(integer(AidPreparationResource::PreparationId))
                    .col(integer(AidPreparationResource::ResourceId))
                    .col(integer(AidPreparationResource::QuantityUsed))
                    .col(timestamp(AidPreparationResource::CreatedAt))
                    .col(timestamp(AidPreparationResource::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PREPARATION_RESOURCE_PREPARATION_ID)
                            .from(
                                AidPreparationResource::Table,
                                AidPreparationResource::PreparationId,
                            )
                            .to(AidPreparation::Table, AidPreparation::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PREPARATION_RESOURCE_RESOURCE_ID)
                            .from(
                                AidPreparationResource::Table,
                                AidPreparationResource::ResourceId,
                            )
                            .to(Resource::Table, Resource::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PREPARATION_RESOURCE_PREPARATION_ID)
                    .table(AidPreparationResource::Table)
                    .col(AidPreparationResource::PreparationId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(AidPreparationResource::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum AidPreparationResource {
    Table,
    Id,
    PreparationId,
    ResourceId,
    QuantityUsed,
    CreatedAt,
    UpdatedAt,
}
