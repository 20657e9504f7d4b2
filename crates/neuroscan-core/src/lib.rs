//! neuroscan-core
//!
//! Pure domain types and the textual record format of the NeuroScan logs.
//! No file I/O here: this is the shared vocabulary of the NeuroScan system.

pub mod error;
pub mod log_format;
pub mod models;
