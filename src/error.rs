use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetricsError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    #[error("Invalid margin: unit price {unit_price} must exceed variable cost per unit {variable_cost}")]
    InvalidMargin { unit_price: f64, variable_cost: f64 },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MetricsError>;
