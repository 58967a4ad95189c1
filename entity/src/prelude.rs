pub use super::aid_preparation::Entity as AidPreparation;
pub use super::aid_preparation_resource::Entity as AidPreparationResource;
pub use super::aid_preparation_volunteer::Entity as AidPreparationVolunteer;
pub use super::aid_request::Entity as AidRequest;
pub use super::app_user::Entity as AppUser;
pub use super::donation::Entity as Donation;
pub use super::relief_center::Entity as ReliefCenter;
pub use super::rescue_tracking::Entity as RescueTracking;
pub use super::rescue_tracking_volunteer::Entity as RescueTrackingVolunteer;
pub use super::resource::Entity as Resource;
pub use super::skill::Entity as Skill;
pub use super::volunteer::Entity as Volunteer;
pub use super::volunteer_skill::Entity as VolunteerSkill;
