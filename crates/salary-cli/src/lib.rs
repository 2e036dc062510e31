//! CLI library components for the salary sterilizer.

pub mod commands;
pub mod logging;
pub mod prompt;
pub mod types;
