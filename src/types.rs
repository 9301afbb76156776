use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit of a computed metric value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    Currency, // dollar amounts (CAC, LTV, ARPU, AOV)
    Percent,  // rates (margins, churn, retention)
    Count,    // unit volumes (break-even point)
    Months,   // durations (payback period)
    Ratio,    // dimensionless (LTV:CAC)
}

impl Unit {
    pub fn prefix(&self) -> &'static str {
        match self {
            Unit::Currency => "$",
            _ => "",
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            Unit::Percent => "%",
            Unit::Count => " units",
            Unit::Months => " months",
            _ => "",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Unit::Currency => "currency",
            Unit::Percent => "percent",
            Unit::Count => "count",
            Unit::Months => "months",
            Unit::Ratio => "ratio",
        }
    }
}

/// Every metric the engine can compute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    Cac,
    Ltv,
    LtvCacRatio,
    Arpu,
    BreakEvenPoint,
    GrossMargin,
    ContributionMargin,
    RetentionRate,
    ChurnRate,
    PaybackPeriod,
    Aov,
}

impl Metric {
    /// Canonical display name, as rendered by callers
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Cac => "CAC",
            Metric::Ltv => "LTV",
            Metric::LtvCacRatio => "LTV:CAC",
            Metric::Arpu => "ARPU",
            Metric::BreakEvenPoint => "BEP",
            Metric::GrossMargin => "Gross Margin",
            Metric::ContributionMargin => "Contribution Margin",
            Metric::RetentionRate => "Retention Rate",
            Metric::ChurnRate => "Churn Rate",
            Metric::PaybackPeriod => "Payback Period",
            Metric::Aov => "AOV",
        }
    }

    pub fn unit(&self) -> Unit {
        match self {
            Metric::Cac | Metric::Ltv | Metric::Arpu | Metric::Aov => Unit::Currency,
            Metric::GrossMargin
            | Metric::ContributionMargin
            | Metric::RetentionRate
            | Metric::ChurnRate => Unit::Percent,
            Metric::BreakEvenPoint => Unit::Count,
            Metric::PaybackPeriod => Unit::Months,
            Metric::LtvCacRatio => Unit::Ratio,
        }
    }
}

/// A successfully computed metric value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComputedMetric {
    pub metric: Metric,
    pub value: f64,
}

impl ComputedMetric {
    pub fn new(metric: Metric, value: f64) -> Self {
        Self { metric, value }
    }

    pub fn unit(&self) -> Unit {
        self.metric.unit()
    }

    /// Flat record for the external export collaborator
    pub fn export_record(&self) -> ExportRecord {
        ExportRecord {
            metric: self.metric.name().to_string(),
            value: self.value,
            unit: self.metric.unit().label().to_string(),
        }
    }

    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(&self.export_record())?)
    }
}

impl fmt::Display for ComputedMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = self.unit();
        write!(
            f,
            "{}: {}{:.2}{}",
            self.metric.name(),
            unit.prefix(),
            self.value,
            unit.suffix()
        )
    }
}

/// Serializable (metric, value, unit) triple consumed verbatim by exporters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub metric: String,
    pub value: f64,
    pub unit: String,
}
