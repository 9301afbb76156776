// src/engines/metrics/revenue.rs
use super::{ensure_at_least_one, ensure_non_negative};
use crate::error::Result;

pub struct RevenueMetrics;

impl RevenueMetrics {
    /// Average Revenue Per User.
    pub fn arpu(total_revenue: f64, total_customers: u64) -> Result<f64> {
        ensure_non_negative("total revenue", total_revenue)?;
        ensure_at_least_one("total customers", total_customers)?;

        Ok(total_revenue / total_customers as f64)
    }

    /// Average Order Value.
    pub fn aov(total_revenue: f64, total_orders: u64) -> Result<f64> {
        ensure_non_negative("total revenue", total_revenue)?;
        ensure_at_least_one("total orders", total_orders)?;

        Ok(total_revenue / total_orders as f64)
    }
}
