// src/engines/metrics/engine.rs
use crate::engines::metrics::{
    AcquisitionMetrics, MarginMetrics, RetentionMetrics, RevenueMetrics,
};
use crate::error::Result;
use crate::types::{ComputedMetric, Metric};

/// Stateless façade over the metric calculators. Every method is a pure
/// function of its arguments; derived metrics (LTV:CAC, payback period)
/// take prior results explicitly.
#[derive(Debug, Default)]
pub struct MetricsEngine;

impl MetricsEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn cac(
        &self,
        marketing_expenses: f64,
        sales_expenses: f64,
        customers_acquired: u64,
    ) -> Result<ComputedMetric> {
        AcquisitionMetrics::cac(marketing_expenses, sales_expenses, customers_acquired)
            .map(|v| ComputedMetric::new(Metric::Cac, v))
    }

    pub fn ltv(
        &self,
        purchase_value: f64,
        purchase_frequency: f64,
        customer_lifetime: f64,
    ) -> Result<ComputedMetric> {
        AcquisitionMetrics::ltv(purchase_value, purchase_frequency, customer_lifetime)
            .map(|v| ComputedMetric::new(Metric::Ltv, v))
    }

    pub fn ltv_to_cac(&self, ltv: f64, cac: f64) -> Result<ComputedMetric> {
        AcquisitionMetrics::ltv_to_cac(ltv, cac)
            .map(|v| ComputedMetric::new(Metric::LtvCacRatio, v))
    }

    pub fn payback_period(
        &self,
        cac: f64,
        monthly_gross_margin_per_customer: f64,
    ) -> Result<ComputedMetric> {
        AcquisitionMetrics::payback_period(cac, monthly_gross_margin_per_customer)
            .map(|v| ComputedMetric::new(Metric::PaybackPeriod, v))
    }

    pub fn arpu(&self, total_revenue: f64, total_customers: u64) -> Result<ComputedMetric> {
        RevenueMetrics::arpu(total_revenue, total_customers)
            .map(|v| ComputedMetric::new(Metric::Arpu, v))
    }

    pub fn aov(&self, total_revenue: f64, total_orders: u64) -> Result<ComputedMetric> {
        RevenueMetrics::aov(total_revenue, total_orders)
            .map(|v| ComputedMetric::new(Metric::Aov, v))
    }

    pub fn gross_margin(&self, revenue: f64, cogs: f64) -> Result<ComputedMetric> {
        MarginMetrics::gross_margin(revenue, cogs)
            .map(|v| ComputedMetric::new(Metric::GrossMargin, v))
    }

    pub fn contribution_margin(&self, revenue: f64, variable_costs: f64) -> Result<ComputedMetric> {
        MarginMetrics::contribution_margin(revenue, variable_costs)
            .map(|v| ComputedMetric::new(Metric::ContributionMargin, v))
    }

    pub fn break_even_point(
        &self,
        fixed_costs: f64,
        unit_price: f64,
        variable_cost_per_unit: f64,
    ) -> Result<ComputedMetric> {
        MarginMetrics::break_even_point(fixed_costs, unit_price, variable_cost_per_unit)
            .map(|v| ComputedMetric::new(Metric::BreakEvenPoint, v))
    }

    pub fn retention_rate(
        &self,
        start_customers: u64,
        end_customers: u64,
        new_customers: u64,
    ) -> Result<ComputedMetric> {
        RetentionMetrics::retention_rate(start_customers, end_customers, new_customers)
            .map(|v| ComputedMetric::new(Metric::RetentionRate, v))
    }

    pub fn churn_rate(&self, lost_customers: u64, start_customers: u64) -> Result<ComputedMetric> {
        RetentionMetrics::churn_rate(lost_customers, start_customers)
            .map(|v| ComputedMetric::new(Metric::ChurnRate, v))
    }
}
