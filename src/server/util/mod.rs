//! Small helpers shared by services and controllers.

pub mod status;
