//! Database model type aliases.
//!
//! Short names for the SeaORM entity models used throughout the services, so signatures
//! don't need to spell out the `entity` crate paths.

/// An account in the system; the role decides which operations the caller may perform
pub type UserModel = entity::app_user::Model;

/// A physical relief site. `volunteer_count` is derived from its active volunteers.
pub type ReliefCenterModel = entity::relief_center::Model;

/// Stock of one resource type at one center
pub type ResourceModel = entity::resource::Model;

/// Record of a donation credited to a center
pub type DonationModel = entity::donation::Model;

/// Volunteer profile of a user, optionally assigned to a center
pub type VolunteerModel = entity::volunteer::Model;

/// Entry of the skill catalogue
pub type SkillModel = entity::skill::Model;

/// A request for help raised by a user for an affected area
pub type AidRequestModel = entity::aid_request::Model;

/// Dispatch-planning record, at most one per aid request
pub type AidPreparationModel = entity::aid_preparation::Model;

/// Debit record tying a preparation to the stock it consumed
pub type ResourceUsageModel = entity::aid_preparation_resource::Model;

/// Assignment of a volunteer to an aid preparation
pub type PreparationVolunteerModel = entity::aid_preparation_volunteer::Model;

/// In-field execution record, at most one per aid request
pub type RescueTrackingModel = entity::rescue_tracking::Model;

/// Assignment of a volunteer to a rescue tracking
pub type TrackingVolunteerModel = entity::rescue_tracking_volunteer::Model;
