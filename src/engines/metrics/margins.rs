// src/engines/metrics/margins.rs
use super::ensure_non_negative;
use crate::error::{MetricsError, Result};

pub struct MarginMetrics;

impl MarginMetrics {
    /// Gross margin as a percentage of revenue.
    pub fn gross_margin(revenue: f64, cogs: f64) -> Result<f64> {
        ensure_non_negative("cost of goods sold", cogs)?;
        if revenue == 0.0 {
            return Err(MetricsError::DivisionByZero(
                "revenue is zero, gross margin is undefined".to_string(),
            ));
        }

        Ok((revenue - cogs) / revenue * 100.0)
    }

    /// Contribution margin as a percentage of revenue.
    pub fn contribution_margin(revenue: f64, variable_costs: f64) -> Result<f64> {
        ensure_non_negative("variable costs", variable_costs)?;
        if revenue == 0.0 {
            return Err(MetricsError::DivisionByZero(
                "revenue is zero, contribution margin is undefined".to_string(),
            ));
        }

        Ok((revenue - variable_costs) / revenue * 100.0)
    }

    /// Unit volume at which fixed costs are covered by contribution margin.
    /// Undefined unless the unit price exceeds the variable cost per unit.
    pub fn break_even_point(
        fixed_costs: f64,
        unit_price: f64,
        variable_cost_per_unit: f64,
    ) -> Result<f64> {
        ensure_non_negative("fixed costs", fixed_costs)?;
        ensure_non_negative("unit price", unit_price)?;
        ensure_non_negative("variable cost per unit", variable_cost_per_unit)?;
        if unit_price <= variable_cost_per_unit {
            return Err(MetricsError::InvalidMargin {
                unit_price,
                variable_cost: variable_cost_per_unit,
            });
        }

        Ok(fixed_costs / (unit_price - variable_cost_per_unit))
    }
}
