//! neuroscan-cli library root.
//!
//! Re-exports internal modules so that integration tests can drive a whole
//! scripted session without a terminal.

pub mod clock;
pub mod config;
pub mod console;
pub mod session;
