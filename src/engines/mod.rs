pub mod insights;
pub mod metrics;
