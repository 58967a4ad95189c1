//! Server application models and type definitions.
//!
//! This module contains the application state, the per-request caller context, and
//! database model type aliases used across services and controllers.

pub mod app;
pub mod context;
pub mod db;
