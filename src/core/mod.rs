//! Shared types, persistence and small utilities.

pub mod error;
pub mod hash;
pub mod store;
pub mod time;
pub mod types;
