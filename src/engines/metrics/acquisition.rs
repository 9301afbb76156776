// src/engines/metrics/acquisition.rs
use super::{ensure_at_least_one, ensure_non_negative};
use crate::error::{MetricsError, Result};

pub struct AcquisitionMetrics;

impl AcquisitionMetrics {
    /// Customer Acquisition Cost: blended spend per customer acquired.
    pub fn cac(
        marketing_expenses: f64,
        sales_expenses: f64,
        customers_acquired: u64,
    ) -> Result<f64> {
        ensure_non_negative("marketing expenses", marketing_expenses)?;
        ensure_non_negative("sales expenses", sales_expenses)?;
        ensure_at_least_one("customers acquired", customers_acquired)?;

        Ok((marketing_expenses + sales_expenses) / customers_acquired as f64)
    }

    /// Lifetime Value: expected revenue per customer over the relationship.
    pub fn ltv(purchase_value: f64, purchase_frequency: f64, customer_lifetime: f64) -> Result<f64> {
        ensure_non_negative("purchase value", purchase_value)?;
        ensure_non_negative("purchase frequency", purchase_frequency)?;
        ensure_non_negative("customer lifetime", customer_lifetime)?;

        Ok(purchase_value * purchase_frequency * customer_lifetime)
    }

    /// LTV:CAC ratio. Derived metric: takes previously computed LTV and CAC.
    pub fn ltv_to_cac(ltv: f64, cac: f64) -> Result<f64> {
        ensure_non_negative("ltv", ltv)?;
        if cac <= 0.0 {
            return Err(MetricsError::DivisionByZero(format!(
                "CAC must be positive to form the LTV:CAC ratio, got {}",
                cac
            )));
        }

        Ok(ltv / cac)
    }

    /// Months to recover CAC. Derived metric: takes previously computed CAC.
    pub fn payback_period(cac: f64, monthly_gross_margin_per_customer: f64) -> Result<f64> {
        ensure_non_negative("cac", cac)?;
        if monthly_gross_margin_per_customer == 0.0 {
            return Err(MetricsError::DivisionByZero(
                "monthly gross margin per customer is zero".to_string(),
            ));
        }

        Ok(cac / monthly_gross_margin_per_customer)
    }
}
