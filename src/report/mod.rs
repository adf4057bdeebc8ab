pub mod property_report;
pub mod writers;
