use crate::config::InsightsConfig;
use crate::engines::metrics::MetricsSnapshot;
use crate::types::Metric;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Assessment {
    Healthy,
    Warning,
    Info,
}

/// One interpretation line for a recorded metric
#[derive(Debug, Clone, Serialize)]
pub struct Insight {
    pub metric: Metric,
    pub assessment: Assessment,
    pub message: String,
}

/// Reads a snapshot and produces interpretation lines against the
/// configured thresholds. Only metrics actually recorded are assessed.
pub struct InsightsEngine {
    config: InsightsConfig,
}

impl InsightsEngine {
    pub fn new(config: InsightsConfig) -> Self {
        Self { config }
    }

    pub fn assess(&self, snapshot: &MetricsSnapshot) -> Vec<Insight> {
        let mut insights = Vec::new();

        if let Some(ratio) = snapshot.get(Metric::LtvCacRatio) {
            let insight = if ratio >= self.config.healthy_ltv_cac_ratio {
                Insight {
                    metric: Metric::LtvCacRatio,
                    assessment: Assessment::Healthy,
                    message: format!(
                        "every dollar spent on acquisition generates {:.2} in lifetime revenue",
                        ratio
                    ),
                }
            } else {
                Insight {
                    metric: Metric::LtvCacRatio,
                    assessment: Assessment::Warning,
                    message: format!(
                        "LTV:CAC of {:.2} is below the healthy {:.1}:1 threshold",
                        ratio, self.config.healthy_ltv_cac_ratio
                    ),
                }
            };
            insights.push(insight);
        }

        if let Some(months) = snapshot.get(Metric::PaybackPeriod) {
            let insight = if months > self.config.max_payback_months {
                Insight {
                    metric: Metric::PaybackPeriod,
                    assessment: Assessment::Warning,
                    message: format!(
                        "recovering CAC takes {:.1} months, above the {:.0}-month target",
                        months, self.config.max_payback_months
                    ),
                }
            } else {
                Insight {
                    metric: Metric::PaybackPeriod,
                    assessment: Assessment::Healthy,
                    message: format!("CAC is recovered in {:.1} months", months),
                }
            };
            insights.push(insight);
        }

        if let Some(margin) = snapshot.get(Metric::GrossMargin) {
            let insight = if margin < self.config.min_gross_margin_pct {
                Insight {
                    metric: Metric::GrossMargin,
                    assessment: Assessment::Warning,
                    message: format!(
                        "gross margin of {:.2}% is below the {:.0}% floor",
                        margin, self.config.min_gross_margin_pct
                    ),
                }
            } else {
                Insight {
                    metric: Metric::GrossMargin,
                    assessment: Assessment::Healthy,
                    message: format!("gross margin of {:.2}% covers the floor", margin),
                }
            };
            insights.push(insight);
        }

        if let Some(units) = snapshot.get(Metric::BreakEvenPoint) {
            insights.push(Insight {
                metric: Metric::BreakEvenPoint,
                assessment: Assessment::Info,
                message: format!(
                    "sell at least {:.2} units to cover fixed and variable costs",
                    units
                ),
            });
        }

        insights
    }
}
