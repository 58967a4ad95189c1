//! SeaORM entity models for the relief coordination schema.

pub mod prelude;

pub mod aid_preparation;
pub mod aid_preparation_resource;
pub mod aid_preparation_volunteer;
pub mod aid_request;
pub mod app_user;
pub mod donation;
pub mod relief_center;
pub mod rescue_tracking;
pub mod rescue_tracking_volunteer;
pub mod resource;
pub mod sea_orm_active_enums;
pub mod skill;
pub mod volunteer;
pub mod volunteer_skill;
