//! Service layer for business logic and orchestration.
//!
//! Services validate the caller's role, open a [`unit_of_work::UnitOfWork`] for every
//! composite mutation and coordinate the repositories inside it. Stock changes go
//! through [`ledger::ResourceLedger`] and volunteer counts through
//! [`capacity::CapacityTracker`], both of which run on the caller's transaction.

pub mod aid;
pub mod capacity;
pub mod ledger;
pub mod relief_center;
pub mod resource;
pub mod unit_of_work;
pub mod user;
pub mod volunteer;
