use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000001_app_user::AppUser, m20251101_000002_relief_center::ReliefCenter,
};

static IDX_VOLUNTEER_CENTER_STATUS: &str = "idx-volunteer-assigned_center_id-status";
static FK_VOLUNTEER_USER_ID: &str = "fk-volunteer-user_id";
static FK_VOLUNTEER_CENTER_ID: &str = "fk-volunteer-assigned_center_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Volunteer::Table)
                    .if_not_exists()
                    .col(pk_auto(Volunteer::Id))
                    .col(integer_uniq(Volunteer::UserId))
                    .col(integer_null(Volunteer::AssignedCenterId))
                    .col(string(Volunteer::Status))
                    .col(timestamp(Volunteer::CreatedAt))
                    .col(timestamp(Volunteer::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_VOLUNTEER_USER_ID)
                            .from(Volunteer::Table, Volunteer::UserId)
                            .to(AppUser::Table, AppUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_VOLUNTEER_CENTER_ID)
                            .from(Volunteer::Table, Volunteer::AssignedCenterId)
                            .to(ReliefCenter::Table, ReliefCenter::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Backs the active-volunteer recount per center
        manager
            .create_index(
                Index::create()
                    .name(IDX_VOLUNTEER_CENTER_STATUS)
                    .table(Volunteer::Table)
                    .col(Volunteer::AssignedCenterId)
                    .col(Volunteer::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Volunteer::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Volunteer {
    Table,
    Id,
    UserId,
    AssignedCenterId,
    Status,
    CreatedAt,
    UpdatedAt,
}
