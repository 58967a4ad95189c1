//! Data access layer repositories.
//!
//! One repository per table, each generic over `C: ConnectionTrait` so the same code
//! runs against the pooled connection for reads and against an open transaction
//! inside a unit of work.

pub mod aid;
/// `relief_center` rows, including the version-guarded volunteer count
pub mod center;
/// `donation` rows
pub mod donation;
/// `resource` stock rows and their optimistic quantity updates
pub mod resource;
/// `skill` catalogue and `volunteer_skill` links
pub mod skill;
/// `app_user` accounts
pub mod user;
/// `volunteer` rows
pub mod volunteer;
