//! Request and response DTOs shared by the HTTP adapter.

pub mod aid;
pub mod api;
pub mod center;
pub mod resource;
pub mod volunteer;
