pub mod insights;
pub mod manager;
pub mod traits;

pub use insights::InsightsConfig;
pub use manager::{AppConfig, ConfigManager};
pub use traits::ConfigSection;
