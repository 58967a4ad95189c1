use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000001_app_user::AppUser, m20251101_000002_relief_center::ReliefCenter,
};

static IDX_DONATION_DONOR_USER_ID: &str = "idx-donation-donor_user_id";
static FK_DONATION_DONOR_USER_ID: &str = "fk-donation-donor_user_id";
static FK_DONATION_CENTER_ID: &str = "fk-donation-center_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Donation::Table)
                    .if_not_exists()
                    .col(pk_auto(Donation::Id))
                    .col(integer(Donation::DonorUserId))
                    .col(integer(Donation::CenterId))
                    .col(string(Donation::DonationType))
                    .col(integer(Donation::Quantity))
                    .col(timestamp(Donation::ReceivedAt))
                    .col(timestamp(Donation::CreatedAt))
                    .col(timestamp(Donation::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_DONATION_DONOR_USER_ID)
                            .from(Donation::Table, Donation::DonorUserId)
                            .to(AppUser::Table, AppUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_DONATION_CENTER_ID)
                            .from(Donation::Table, Donation::CenterId)
                            .to(ReliefCenter::Table, ReliefCenter::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DONATION_DONOR_USER_ID)
                    .table(Donation::Table)
                    .col(Donation::DonorUserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Donation::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Donation {
    Table,
    Id,
    DonorUserId,
    CenterId,
    DonationType,
    Quantity,
    ReceivedAt,
    CreatedAt,
    UpdatedAt,
}
