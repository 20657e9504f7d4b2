//! neuroscan-storage
//!
//! Append-only text logs on the local filesystem. Thin wrapper around
//! `std::fs`: every write opens, appends and closes before returning.

pub mod append;
pub mod error;
pub mod logs;
