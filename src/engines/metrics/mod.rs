pub mod acquisition;
pub mod engine;
pub mod margins;
pub mod retention;
pub mod revenue;
pub mod snapshot;

pub use acquisition::AcquisitionMetrics;
pub use engine::MetricsEngine;
pub use margins::MarginMetrics;
pub use retention::RetentionMetrics;
pub use revenue::RevenueMetrics;
pub use snapshot::MetricsSnapshot;

use crate::error::{MetricsError, Result};

/// Money and rate fields must be non-negative before any formula runs.
pub(crate) fn ensure_non_negative(field: &str, value: f64) -> Result<()> {
    if value < 0.0 {
        return Err(MetricsError::InvalidInput(format!(
            "{} must be non-negative, got {}",
            field, value
        )));
    }
    Ok(())
}

/// Count fields used as denominators must be at least 1.
pub(crate) fn ensure_at_least_one(field: &str, count: u64) -> Result<()> {
    if count == 0 {
        return Err(MetricsError::InvalidInput(format!(
            "{} must be at least 1",
            field
        )));
    }
    Ok(())
}
