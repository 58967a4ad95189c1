use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000008_aid_request::AidRequest;

static FK_AID_PREPARATION_REQUEST_ID: &str = "fk-aid_preparation-request_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AidPreparation::Table)
                    .if_not_exists()
                    .col(pk_auto(AidPreparation::Id))
                    .col(integer_uniq(AidPreparation::RequestId))
                    .col(timestamp_null(AidPreparation::DepartureTime))
                    .col(timestamp_null(AidPreparation::EstimatedArrival))
                    .col(string(AidPreparation::Status))
                    .col(timestamp(AidPreparation::CreatedAt))
                    .col(timestamp(AidPreparation::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_AID_PREPARATION_REQUEST_ID)
                            .from(AidPreparation::Table, AidPreparation::RequestId)
                            .to(AidRequest::Table, AidRequest::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AidPreparation::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AidPreparation {
    Table,
    Id,
    RequestId,
    DepartureTime,
    EstimatedArrival,
    Status,
    CreatedAt,
    UpdatedAt,
}
