//! CLI command implementations

pub mod challenge;
pub mod shooting;
pub mod workout;
