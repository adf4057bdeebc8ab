pub mod config;
pub mod errors;
pub mod properties;
pub mod protein;
pub mod report;
