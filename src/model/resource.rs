use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ResourceDto {
    pub id: i32,
    pub center_id: i32,
    pub resource_type: String,
    pub quantity: i32,
    pub expires_at: Option<NaiveDateTime>,
    pub updated_at: NaiveDateTime,
}

impl From<entity::resource::Model> for ResourceDto {
    fn from(model: entity::resource::Model) -> Self {
        Self {
            id: model.id,
            center_id: model.center_id,
            resource_type: model.resource_type,
            quantity: model.quantity,
            expires_at: model.expires_at,
            updated_at: model.updated_at,
        }
    }
}

/// Manual stock credit by an administrator
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreditStockDto {
    pub center_id: i32,
    pub resource_type: String,
    pub quantity: i32,
    pub expires_at: Option<NaiveDateTime>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateDonationDto {
    pub center_id: i32,
    pub donation_type: String,
    pub quantity: i32,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DonationDto {
    pub id: i32,
    pub donor_user_id: i32,
    pub center_id: i32,
    pub donation_type: String,
    pub quantity: i32,
    pub received_at: NaiveDateTime,
}

impl From<entity::donation::Model> for DonationDto {
    fn from(model: entity::donation::Model) -> Self {
        Self {
            id: model.id,
            donor_user_id: model.donor_user_id,
            center_id: model.center_id,
            donation_type: model.donation_type,
            quantity: model.quantity,
            received_at: model.received_at,
        }
    }
}

/// A recorded donation together with the stock it was credited to
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DonationReceiptDto {
    pub donation: DonationDto,
    pub resource: ResourceDto,
}
