//! Library components for the `remap` CLI.

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod types;
