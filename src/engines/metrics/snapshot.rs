// src/engines/metrics/snapshot.rs
use crate::engines::metrics::AcquisitionMetrics;
use crate::error::Result;
use crate::types::{ComputedMetric, ExportRecord, Metric};
use std::collections::HashMap;

/// Accumulates computed metrics so that derived metrics can consume them
/// explicitly. "Not yet computed" is `None`, never an absent binding.
#[derive(Debug, Clone, Default)]
pub struct MetricsSnapshot {
    values: HashMap<Metric, f64>,
}

impl MetricsSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, computed: ComputedMetric) {
        if let Some(prev) = self.values.insert(computed.metric, computed.value) {
            log::warn!(
                "overwriting recorded {}: {} -> {}",
                computed.metric.name(),
                prev,
                computed.value
            );
        }
    }

    pub fn get(&self, metric: Metric) -> Option<f64> {
        self.values.get(&metric).copied()
    }

    pub fn computed(&self, metric: Metric) -> Option<ComputedMetric> {
        self.get(metric).map(|v| ComputedMetric::new(metric, v))
    }

    /// LTV:CAC from recorded values. `None` until both LTV and CAC have been
    /// recorded; the inner `Result` still fails on a zero CAC.
    pub fn ltv_to_cac(&self) -> Option<Result<ComputedMetric>> {
        let ltv = self.get(Metric::Ltv)?;
        let cac = self.get(Metric::Cac)?;
        Some(
            AcquisitionMetrics::ltv_to_cac(ltv, cac)
                .map(|v| ComputedMetric::new(Metric::LtvCacRatio, v)),
        )
    }

    /// Payback period from the recorded CAC. The monthly margin is a raw
    /// input, not a recorded metric, so it is passed in.
    pub fn payback_period(
        &self,
        monthly_gross_margin_per_customer: f64,
    ) -> Option<Result<ComputedMetric>> {
        let cac = self.get(Metric::Cac)?;
        Some(
            AcquisitionMetrics::payback_period(cac, monthly_gross_margin_per_customer)
                .map(|v| ComputedMetric::new(Metric::PaybackPeriod, v)),
        )
    }

    /// All recorded metrics as exporter-facing records, ordered by name.
    pub fn export_records(&self) -> Vec<ExportRecord> {
        let mut records: Vec<ExportRecord> = self
            .values
            .iter()
            .map(|(metric, value)| ComputedMetric::new(*metric, *value).export_record())
            .collect();
        records.sort_by(|a, b| a.metric.cmp(&b.metric));
        records
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
