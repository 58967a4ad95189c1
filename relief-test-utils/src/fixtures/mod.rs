//! Test fixture modules for database record creation.
//!
//! - `relief` - Database inserts for users, centers, stock, volunteers and aid records
//! - `factory` - In-memory models that never touch the database

pub mod factory;
pub mod relief;
