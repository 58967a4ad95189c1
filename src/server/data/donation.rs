use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

/// Repository for donation records
pub struct DonationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DonationRepository<'a, C> {
    /// Creates a new instance of [`DonationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a donation received at `received_at`
    pub async fn create(
        &self,
        donor_user_id: i32,
        center_id: i32,
        donation_type: &str,
        quantity: i32,
        received_at: NaiveDateTime,
    ) -> Result<entity::donation::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let donation = entity::donation::ActiveModel {
            donor_user_id: ActiveValue::Set(donor_user_id),
            center_id: ActiveValue::Set(center_id),
            donation_type: ActiveValue::Set(donation_type.to_string()),
            quantity: ActiveValue::Set(quantity),
            received_at: ActiveValue::Set(received_at),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        donation.insert(self.db).await
    }

    /// Donations made by a user, newest first
    pub async fn get_many_by_donor(
        &self,
        donor_user_id: i32,
    ) -> Result<Vec<entity::donation::Model>, DbErr> {
        entity::prelude::Donation::find()
            .filter(entity::donation::Column::DonorUserId.eq(donor_user_id))
            .order_by_desc(entity::donation::Column::ReceivedAt)
            .all(self.db)
            .await
    }

    /// Donations to every center, newest first
    pub async fn get_all(&self) -> Result<Vec<entity::donation::Model>, DbErr> {
        entity::prelude::Donation::find()
            .order_by_desc(entity::donation::Column::ReceivedAt)
            .order_by_desc(entity::donation::Column::Id)
            .all(self.db)
            .await
    }
}
