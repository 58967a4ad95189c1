//! Donations and manual stock credits.

use chrono::{Months, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        center::ReliefCenterRepository, donation::DonationRepository, user::UserRepository,
    },
    error::{domain::DomainError, Error},
    model::{
        context::RequestContext,
        db::{DonationModel, ResourceModel},
    },
    service::{ledger::ResourceLedger, unit_of_work::UnitOfWork},
};

/// Months a donated resource stays usable after it is received
const DONATION_SHELF_LIFE_MONTHS: u32 = 6;

/// Donations and manual stock changes on top of [`ResourceLedger`]
pub struct ResourceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ResourceService<'a> {
    /// Creates a new instance of [`ResourceService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a donation by the caller and credits it to the center's stock
    ///
    /// A resource row created by the donation expires six months after it was received.
    ///
    /// # Returns
    /// - `Ok((DonationModel, ResourceModel))` - The donation and the credited resource
    /// - `Err(Error::DomainError)` - Unknown donor, unknown center or invalid quantity, nothing is written
    pub async fn create_donation(
        &self,
        ctx: &RequestContext,
        center_id: i32,
        donation_type: &str,
        quantity: i32,
    ) -> Result<(DonationModel, ResourceModel), Error> {
        let donor_user_id = ctx.user_id();
        let donation_type = donation_type.trim().to_string();

        let uow = UnitOfWork::new(self.db);
        let (donation, resource) = uow
            .execute(
                &format!("donation to center ID {}", center_id),
                |txn| {
                    let donation_type = donation_type.clone();
                    Box::pin(async move {
                        if UserRepository::new(txn)
                            .get_by_id(donor_user_id)
                            .await?
                            .is_none()
                        {
                            return Err(DomainError::UserNotFound(donor_user_id).into());
                        }
                        if ReliefCenterRepository::new(txn)
                            .get_by_id(center_id)
                            .await?
                            .is_none()
                        {
                            return Err(DomainError::CenterNotFound(center_id).into());
                        }
                        if quantity <= 0 {
                            return Err(
                                DomainError::validation("quantity", "must be greater than 0")
                                    .into(),
                            );
                        }

                        let received_at = Utc::now().naive_utc();
                        let donation = DonationRepository::new(txn)
                            .create(donor_user_id, center_id, &donation_type, quantity, received_at)
                            .await?;

                        let expires_at =
                            received_at.checked_add_months(Months::new(DONATION_SHELF_LIFE_MONTHS));
                        let resource = ResourceLedger::credit(
                            txn,
                            center_id,
                            &donation_type,
                            quantity,
                            expires_at,
                        )
                        .await?;

                        Ok((donation, resource))
                    })
                },
            )
            .await?;

        tracing::info!(
            "User ID {} donated {} {} to center ID {}",
            donor_user_id,
            quantity,
            donation.donation_type,
            center_id
        );

        Ok((donation, resource))
    }

    /// Manual stock credit by an administrator
    pub async fn credit_stock(
        &self,
        ctx: &RequestContext,
        center_id: i32,
        resource_type: &str,
        quantity: i32,
        expires_at: Option<chrono::NaiveDateTime>,
    ) -> Result<ResourceModel, Error> {
        ctx.require_admin("credit stock")?;

        let resource_type = resource_type.to_string();

        let uow = UnitOfWork::new(self.db);
        uow.execute(&format!("stock credit to center ID {}", center_id), |txn| {
            let resource_type = resource_type.clone();
            Box::pin(async move {
                ResourceLedger::credit(txn, center_id, &resource_type, quantity, expires_at).await
            })
        })
        .await
    }

    /// Donations made by the caller, newest first
    pub async fn list_donations(&self, ctx: &RequestContext) -> Result<Vec<DonationModel>, Error> {
        Ok(DonationRepository::new(self.db)
            .get_many_by_donor(ctx.user_id())
            .await?)
    }

    /// Donations to every center, newest first
    pub async fn list_all_donations(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<DonationModel>, Error> {
        ctx.require_admin("list all donations")?;

        Ok(DonationRepository::new(self.db).get_all().await?)
    }

    /// Stock held by a center, see [`ResourceLedger::query`]
    pub async fn list_resources(&self, center_id: i32) -> Result<Vec<ResourceModel>, Error> {
        ResourceLedger::query(self.db, center_id).await
    }

    /// Looks up a single resource row
    pub async fn get_resource(&self, resource_id: i32) -> Result<ResourceModel, Error> {
        ResourceLedger::get(self.db, resource_id).await
    }
}
