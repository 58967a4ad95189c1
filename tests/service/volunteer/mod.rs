//! Tests for the volunteer lifecycle and the center volunteer counts it maintains.

mod delete;
mod reassign;
mod register;
mod update_status;
