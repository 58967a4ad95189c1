//! Tests for relief center creation, deletion, listing and recounts.

mod delete;
mod list;
