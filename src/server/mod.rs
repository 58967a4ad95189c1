//! Server application core modules.
//!
//! This module contains the backend of the relief coordination service: the resource
//! ledger, relief center capacity tracking, the aid lifecycle from request to rescue, and
//! the transactional unit of work that keeps multi-row changes atomic. It also provides the
//! axum HTTP adapter, configuration, startup and the database repositories.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
