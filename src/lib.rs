pub mod assessment;
pub mod browser;
pub mod config;
pub mod jobs;
pub mod output;
pub mod saved;
pub mod telemetry;
