use growthmetrics::error::MetricsError;
use growthmetrics::{Metric, MetricsEngine, Unit};

#[test]
fn test_cac() {
    let engine = MetricsEngine::new();

    // (1000 + 500) / 30 = $50 per customer
    let cac = engine.cac(1000.0, 500.0, 30).unwrap();
    assert_eq!(cac.value, 50.0);
    assert_eq!(cac.metric, Metric::Cac);
    assert_eq!(cac.unit(), Unit::Currency);
}

#[test]
fn test_cac_is_non_negative_for_valid_inputs() {
    let engine = MetricsEngine::new();

    assert_eq!(engine.cac(0.0, 0.0, 1).unwrap().value, 0.0);
    assert!(engine.cac(250.0, 0.0, 7).unwrap().value >= 0.0);
    assert!(engine.cac(0.01, 99999.99, 1).unwrap().value >= 0.0);
}

#[test]
fn test_cac_rejects_zero_customers_at_boundary() {
    let engine = MetricsEngine::new();

    let err = engine.cac(1000.0, 500.0, 0).unwrap_err();
    assert!(matches!(err, MetricsError::InvalidInput(_)));
}

#[test]
fn test_ltv() {
    let engine = MetricsEngine::new();

    // 50 * 4 * 3 = $600 over the customer lifetime
    let ltv = engine.ltv(50.0, 4.0, 3.0).unwrap();
    assert_eq!(ltv.value, 600.0);
    assert_eq!(ltv.unit(), Unit::Currency);
}

#[test]
fn test_ltv_to_cac_ratio() {
    let engine = MetricsEngine::new();

    // 600 / 50 = 12x
    let ratio = engine.ltv_to_cac(600.0, 50.0).unwrap();
    assert_eq!(ratio.value, 12.0);
    assert_eq!(ratio.unit(), Unit::Ratio);
}

#[test]
fn test_ltv_to_cac_zero_cac_fails() {
    let engine = MetricsEngine::new();

    let err = engine.ltv_to_cac(600.0, 0.0).unwrap_err();
    assert!(matches!(err, MetricsError::DivisionByZero(_)));
}

#[test]
fn test_arpu() {
    let engine = MetricsEngine::new();

    // 5000 / 200 = $25 per user
    let arpu = engine.arpu(5000.0, 200).unwrap();
    assert_eq!(arpu.value, 25.0);

    let err = engine.arpu(5000.0, 0).unwrap_err();
    assert!(matches!(err, MetricsError::InvalidInput(_)));
}

#[test]
fn test_break_even_point() {
    let engine = MetricsEngine::new();

    // 10000 / (50 - 30) = 500 units
    let bep = engine.break_even_point(10000.0, 50.0, 30.0).unwrap();
    assert_eq!(bep.value, 500.0);
    assert_eq!(bep.unit(), Unit::Count);
}

#[test]
fn test_break_even_point_invalid_margin() {
    let engine = MetricsEngine::new();

    // Unit price below variable cost: the metric is undefined
    match engine.break_even_point(10000.0, 20.0, 30.0).unwrap_err() {
        MetricsError::InvalidMargin {
            unit_price,
            variable_cost,
        } => {
            assert_eq!(unit_price, 20.0);
            assert_eq!(variable_cost, 30.0);
        }
        other => panic!("expected InvalidMargin, got {:?}", other),
    }
}

#[test]
fn test_gross_margin() {
    let engine = MetricsEngine::new();

    // (1000 - 400) / 1000 * 100 = 60%
    let margin = engine.gross_margin(1000.0, 400.0).unwrap();
    assert_eq!(margin.value, 60.0);
    assert_eq!(margin.unit(), Unit::Percent);
}

#[test]
fn test_gross_margin_zero_revenue_fails() {
    let engine = MetricsEngine::new();

    let err = engine.gross_margin(0.0, 400.0).unwrap_err();
    assert!(matches!(err, MetricsError::DivisionByZero(_)));
}

#[test]
fn test_contribution_margin() {
    let engine = MetricsEngine::new();

    // (2000 - 500) / 2000 * 100 = 75%
    let margin = engine.contribution_margin(2000.0, 500.0).unwrap();
    assert_eq!(margin.value, 75.0);
}

#[test]
fn test_contribution_margin_zero_revenue_fails() {
    let engine = MetricsEngine::new();

    let err = engine.contribution_margin(0.0, 500.0).unwrap_err();
    assert!(matches!(err, MetricsError::DivisionByZero(_)));
}

#[test]
fn test_retention_and_churn() {
    let engine = MetricsEngine::new();

    // (120 - 30) / 100 * 100 = 90% retained
    let retention = engine.retention_rate(100, 120, 30).unwrap();
    assert_eq!(retention.value, 90.0);

    // 5 / 100 * 100 = 5% churned
    let churn = engine.churn_rate(5, 100).unwrap();
    assert_eq!(churn.value, 5.0);

    // Zero start-of-period customers rejects at the boundary
    assert!(matches!(
        engine.retention_rate(0, 120, 30).unwrap_err(),
        MetricsError::InvalidInput(_)
    ));
    assert!(matches!(
        engine.churn_rate(5, 0).unwrap_err(),
        MetricsError::InvalidInput(_)
    ));
}

#[test]
fn test_payback_period() {
    let engine = MetricsEngine::new();

    // 50 CAC / 25 margin per month = 2 months
    let payback = engine.payback_period(50.0, 25.0).unwrap();
    assert_eq!(payback.value, 2.0);
    assert_eq!(payback.unit(), Unit::Months);

    let err = engine.payback_period(50.0, 0.0).unwrap_err();
    assert!(matches!(err, MetricsError::DivisionByZero(_)));
}

#[test]
fn test_aov() {
    let engine = MetricsEngine::new();

    // 9000 / 300 = $30 per order
    let aov = engine.aov(9000.0, 300).unwrap();
    assert_eq!(aov.value, 30.0);

    let err = engine.aov(9000.0, 0).unwrap_err();
    assert!(matches!(err, MetricsError::InvalidInput(_)));
}

#[test]
fn test_idempotence() {
    let engine = MetricsEngine::new();

    // Pure functions: same inputs, same outputs
    let first = engine.cac(1234.56, 789.01, 42).unwrap();
    let second = engine.cac(1234.56, 789.01, 42).unwrap();
    assert_eq!(first, second);

    let first = engine.gross_margin(1000.0, 400.0).unwrap();
    let second = engine.gross_margin(1000.0, 400.0).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_display_formatting() {
    let engine = MetricsEngine::new();

    assert_eq!(
        engine.cac(1000.0, 500.0, 30).unwrap().to_string(),
        "CAC: $50.00"
    );
    assert_eq!(
        engine.break_even_point(10000.0, 50.0, 30.0).unwrap().to_string(),
        "BEP: 500.00 units"
    );
    assert_eq!(
        engine.gross_margin(1000.0, 400.0).unwrap().to_string(),
        "Gross Margin: 60.00%"
    );
    assert_eq!(
        engine.ltv_to_cac(600.0, 50.0).unwrap().to_string(),
        "LTV:CAC: 12.00"
    );
    assert_eq!(
        engine.payback_period(50.0, 25.0).unwrap().to_string(),
        "Payback Period: 2.00 months"
    );
}
