// src/engines/metrics/retention.rs
use super::ensure_at_least_one;
use crate::error::Result;

pub struct RetentionMetrics;

impl RetentionMetrics {
    /// Percentage of starting customers kept over a period, excluding
    /// customers acquired during it.
    pub fn retention_rate(
        start_customers: u64,
        end_customers: u64,
        new_customers: u64,
    ) -> Result<f64> {
        ensure_at_least_one("start of period customers", start_customers)?;

        let retained = end_customers as f64 - new_customers as f64;
        Ok(retained / start_customers as f64 * 100.0)
    }

    /// Percentage of starting customers lost over a period.
    pub fn churn_rate(lost_customers: u64, start_customers: u64) -> Result<f64> {
        ensure_at_least_one("start of period customers", start_customers)?;

        Ok(lost_customers as f64 / start_customers as f64 * 100.0)
    }
}
