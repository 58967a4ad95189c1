pub use sea_orm_migration::prelude::*;

mod m20251101_000001_app_user;
mod m20251101_000002_relief_center;
mod m20251101_000003_resource;
mod m20251101_000004_donation;
mod m20251101_000005_skill;
mod m20251101_000006_volunteer;
mod m20251101_000007_volunteer_skill;
mod m20251101_000008_aid_request;
mod m20251101_000009_aid_preparation;
mod m20251101_000010_aid_preparation_resource;
mod m20251101_000011_aid_preparation_volunteer;
mod m20251101_000012_rescue_tracking;
mod m20251101_000013_rescue_tracking_volunteer;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_app_user::Migration),
            Box::new(m20251101_000002_relief_center::Migration),
            Box::new(m20251101_000003_resource::Migration),
            Box::new(m20251101_000004_donation::Migration),
            Box::new(m20251101_000005_skill::Migration),
            Box::new(m20251101_000006_volunteer::Migration),
            Box::new(m20251101_000007_volunteer_skill::Migration),
            Box::new(m20251101_000008_aid_request::Migration),
            Box::new(m20251101_000009_aid_preparation::Migration),
            Box::new(m20251101_000010_aid_preparation_resource::Migration),
            Box::new(m20251101_000011_aid_preparation_volunteer::Migration),
            Box::new(m20251101_000012_rescue_tracking::Migration),
            Box::new(m20251101_000013_rescue_tracking_volunteer::Migration),
        ]
    }
}
