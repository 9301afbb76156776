use super::traits::ConfigSection;
use crate::error::MetricsError;
use serde::{Deserialize, Serialize};

/// Thresholds the insights engine assesses recorded metrics against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightsConfig {
    pub healthy_ltv_cac_ratio: f64,
    pub max_payback_months: f64,
    pub min_gross_margin_pct: f64,
}

impl Default for InsightsConfig {
    fn default() -> Self {
        Self {
            // 3:1 is the conventional floor for a viable acquisition engine
            healthy_ltv_cac_ratio: 3.0,
            max_payback_months: 12.0,
            min_gross_margin_pct: 50.0,
        }
    }
}

impl ConfigSection for InsightsConfig {
    fn section_name() -> &'static str {
        "insights"
    }

    fn validate(&self) -> Result<(), MetricsError> {
        if self.healthy_ltv_cac_ratio <= 0.0 {
            return Err(MetricsError::Configuration(format!(
                "[{}] healthy LTV:CAC ratio must be positive",
                Self::section_name()
            )));
        }
        if self.max_payback_months <= 0.0 {
            return Err(MetricsError::Configuration(format!(
                "[{}] max payback months must be positive",
                Self::section_name()
            )));
        }
        if self.min_gross_margin_pct <= 0.0 || self.min_gross_margin_pct > 100.0 {
            return Err(MetricsError::Configuration(format!(
                "[{}] min gross margin must be between 0 and 100",
                Self::section_name()
            )));
        }
        Ok(())
    }
}
