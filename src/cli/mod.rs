//! CLI command implementations.

pub mod clear;
pub mod history;
pub mod scrape;
pub mod sessions;
