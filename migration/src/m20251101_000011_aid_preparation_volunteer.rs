use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000006_volunteer::Volunteer, m20251101_000009_aid_preparation::AidPreparation,
};

static IDX_PREPARATION_VOLUNTEER_PAIR: &str =
    "idx-aid_preparation_volunteer-preparation_id-volunteer_id";
static FK_PREPARATION_VOLUNTEER_PREPARATION_ID: &str =
    "fk-aid_preparation_volunteer-preparation_id";
static FK_PREPARATION_VOLUNTEER_VOLUNTEER_ID: &str = "fk-aid_preparation_volunteer-volunteer_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AidPreparationVolunteer::Table)
                    .if_not_exists()
                    .col(pk_auto(AidPreparationVolunteer::Id))
                    .col(integer(AidPreparationVolunteer::PreparationId))
                    .col(integer(AidPreparationVolunteer::VolunteerId))
                    .col(timestamp(AidPreparationVolunteer::CreatedAt))
                    .col(timestamp(AidPreparationVolunteer::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PREPARATION_VOLUNTEER_PREPARATION_ID)
                            .from(
                                AidPreparationVolunteer::Table,
                                AidPreparationVolunteer::PreparationId,
                            )
                            .to(AidPreparation::Table, AidPreparation::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PREPARATION_VOLUNTEER_VOLUNTEER_ID)
                            .from(
                                AidPreparationVolunteer::Table,
                                AidPreparationVolunteer::VolunteerId,
                            )
                            .to(Volunteer::Table, Volunteer::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PREPARATION_VOLUNTEER_PAIR)
                    .table(AidPreparationVolunteer::Table)
                    .col(AidPreparationVolunteer::PreparationId)
                    .col(AidPreparationVolunteer::VolunteerId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(AidPreparationVolunteer::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum AidPreparationVolunteer {
    Table,
    Id,
    PreparationId,
    VolunteerId,
    CreatedAt,
    UpdatedAt,
}
