//! Command implementations for daemon-gen CLI

pub mod completions;
pub mod generate;
pub mod version;
