//! Command orchestration.
pub mod setup;
