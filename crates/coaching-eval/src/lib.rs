pub mod config;
pub mod error;
pub mod evaluation;
pub mod reports;
pub mod scoresheet;
pub mod telemetry;
