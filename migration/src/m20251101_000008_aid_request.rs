use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_app_user::AppUser;

static IDX_AID_REQUEST_USER_AREA: &str = "idx-aid_request-user_id-area_id";
static FK_AID_REQUEST_USER_ID: &str = "fk-aid_request-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AidRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(AidRequest::Id))
                    .col(integer(AidRequest::UserId))
                    .col(integer(AidRequest::AreaId))
                    .col(string(AidRequest::RequestType))
                    .col(text(AidRequest::Description))
                    .col(string(AidRequest::Urgency))
                    .col(string(AidRequest::Status))
                    .col(integer(AidRequest::PeopleCount))
                    .col(timestamp(AidRequest::RequestDate))
                    .col(timestamp_null(AidRequest::ResponseTime))
                    .col(timestamp(AidRequest::CreatedAt))
                    .col(timestamp(AidRequest::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_AID_REQUEST_USER_ID)
                            .from(AidRequest::Table, AidRequest::UserId)
                            .to(AppUser::Table, AppUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_AID_REQUEST_USER_AREA)
                    .table(AidRequest::Table)
                    .col(AidRequest::UserId)
                    .col(AidRequest::AreaId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AidRequest::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AidRequest {
    Table,
    Id,
    UserId,
    AreaId,
    RequestType,
    Description,
    Urgency,
    Status,
    PeopleCount,
    RequestDate,
    ResponseTime,
    CreatedAt,
    UpdatedAt,
}
