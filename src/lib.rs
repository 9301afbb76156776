//! Startup growth metrics: pure calculators for CAC, LTV, ARPU, break-even
//! and related ratios, with typed validation failures instead of NaN/inf.

pub mod config;
pub mod engines;
pub mod error;
pub mod types;

pub use engines::insights::{Assessment, Insight, InsightsEngine};
pub use engines::metrics::{MetricsEngine, MetricsSnapshot};
pub use error::{MetricsError, Result};
pub use types::{ComputedMetric, ExportRecord, Metric, Unit};
