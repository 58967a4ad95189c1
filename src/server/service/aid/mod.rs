//! Aid lifecycle: requests, their dispatch preparation and in-field rescue tracking.
//!
//! Status changes of every stage are checked against the transition table in
//! [`transition`] before anything is written.

pub mod preparation;
/// Aid requests filed by citizens
pub mod request;
pub mod task;
pub mod tracking;
pub mod transition;
