use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000006_volunteer::Volunteer, m20251101_000012_rescue_tracking::RescueTracking,
};

static IDX_TRACKING_VOLUNTEER_PAIR: &str =
    "idx-rescue_tracking_volunteer-tracking_id-volunteer_id";
static FK_TRACKING_VOLUNTEER_TRACKING_ID: &str = "fk-rescue_tracking_volunteer-tracking_id";
static FK_TRACKING_VOLUNTEER_VOLUNTEER_ID: &str = "fk-rescue_tracking_volunteer-volunteer_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RescueTrackingVolunteer::Table)
                    .if_not_exists()
                    .col(pk_auto(RescueTrackingVolunteer::Id))
                    .col(integer(RescueTrackingVolunteer::TrackingId))
                    .col(integer(RescueTrackingVolunteer::VolunteerId))
                    .col(timestamp(RescueTrackingVolunteer::CreatedAt))
                    .col(timestamp(RescueTrackingVolunteer::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TRACKING_VOLUNTEER_TRACKING_ID)
                            .from(
                                RescueTrackingVolunteer::Table,
                                RescueTrackingVolunteer::TrackingId,
                            )
                            .to(RescueTracking::Table, RescueTracking::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TRACKING_VOLUNTEER_VOLUNTEER_ID)
                            .from(
                                RescueTrackingVolunteer::Table,
                                RescueTrackingVolunteer::VolunteerId,
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
                    .name(IDX_TRACKING_VOLUNTEER_PAIR)
                    .table(RescueTrackingVolunteer::Table)
                    .col(RescueTrackingVolunteer::TrackingId)
                    .col(RescueTrackingVolunteer::VolunteerId)
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
                    .table(RescueTrackingVolunteer::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum RescueTrackingVolunteer {
    Table,
    Id,
    TrackingId,
    VolunteerId,
    CreatedAt,
    UpdatedAt,
}
