use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_app_user::AppUser;

static IDX_RELIEF_CENTER_NAME: &str = "idx-relief_center-lower_name";
static FK_RELIEF_CENTER_MANAGER_ID: &str = "fk-relief_center-manager_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ReliefCenter::Table)
                    .if_not_exists()
                    .col(pk_auto(ReliefCenter::Id))
                    .col(string(ReliefCenter::Name))
                    .col(string(ReliefCenter::Location))
                    .col(integer(ReliefCenter::VolunteerCount).default(0))
                    .col(integer(ReliefCenter::MaxCapacity))
                    .col(integer_null(ReliefCenter::ManagerId))
                    .col(integer(ReliefCenter::Version).default(0))
                    .col(timestamp(ReliefCenter::CreatedAt))
                    .col(timestamp(ReliefCenter::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_RELIEF_CENTER_MANAGER_ID)
                            .from(ReliefCenter::Table, ReliefCenter::ManagerId)
                            .to(AppUser::Table, AppUser::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Names are unique regardless of case
        manager
            .get_connection()
            .execute_unprepared(&format!(
                "CREATE UNIQUE INDEX IF NOT EXISTS \"{}\" ON relief_center (LOWER(name))",
                IDX_RELIEF_CENTER_NAME
            ))
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ReliefCenter::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ReliefCenter {
    Table,
    Id,
    Name,
    Location,
    VolunteerCount,
    MaxCapacity,
    ManagerId,
    Version,
    CreatedAt,
    UpdatedAt,
}
