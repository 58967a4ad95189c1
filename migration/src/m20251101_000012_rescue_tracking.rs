use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000008_aid_request::AidRequest;

static FK_RESCUE_TRACKING_REQUEST_ID: &str = "fk-rescue_tracking-request_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RescueTracking::Table)
                    .if_not_exists()
                    .col(pk_auto(RescueTracking::Id))
                    .col(integer_uniq(RescueTracking::RequestId))
                    .col(string(RescueTracking::Status))
                    .col(timestamp_null(RescueTracking::StartTime))
                    .col(timestamp_null(RescueTracking::CompletionTime))
                    .col(integer(RescueTracking::PeopleHelped).default(0))
                    .col(timestamp(RescueTracking::CreatedAt))
                    .col(timestamp(RescueTracking::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_RESCUE_TRACKING_REQUEST_ID)
                            .from(RescueTracking::Table, RescueTracking::RequestId)
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
            .drop_table(Table::drop().table(RescueTracking::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum RescueTracking {
    Table,
    Id,
    RequestId,
    Status,
    StartTime,
    CompletionTime,
    PeopleHelped,
    CreatedAt,
    UpdatedAt,
}
