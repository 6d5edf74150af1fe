//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported
//! and accessible via absolute paths.

/// Test that analytical types are accessible via absolute path.
#[test]
fn test_analytical_module_exports() {
    use vanna_models::analytical::black_scholes::{BlackScholes, BlackScholesParams};
    use vanna_models::analytical::distributions::{norm_cdf, norm_pdf};
    use vanna_models::analytical::{call_price, put_price, AnalyticalError};
    use vanna_models::instruments::OptionSide;

    let params = BlackScholesParams::new(100.0, 100.0, 0.05, 0.2, 1.0).unwrap();
    let model = BlackScholes::new(params);
    assert!(model.price(OptionSide::Call) > 0.0);

    let call = call_price(100.0, 100.0, 0.05, 0.2, 1.0).unwrap();
    let put = put_price(100.0, 100.0, 0.05, 0.2, 1.0).unwrap();
    assert!(call > put);

    assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
    assert!(norm_pdf(0.0_f64) > 0.39);

    let err = AnalyticalError::InvalidSpot { spot: -1.0 };
    assert!(format!("{}", err).contains("spot"));
}

/// Test that instrument types are accessible via absolute path.
#[test]
fn test_instruments_module_exports() {
    use vanna_models::instruments::{EuropeanOption, InstrumentError, OptionSide};

    let option = EuropeanOption::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionSide::Call).unwrap();
    assert!(option.price() > 0.0);
    assert!(option.side().is_call());

    let side: OptionSide = "put".parse().unwrap();
    assert!(side.is_put());

    let result = EuropeanOption::new(0.0, 100.0, 1.0, 0.05, 0.2, OptionSide::Call);
    assert!(matches!(result, Err(InstrumentError::InvalidSpot { .. })));
}

/// Test that calibration types are accessible via absolute path.
#[test]
fn test_calibration_module_exports() {
    use vanna_core::math::solvers::LMConfig;
    use vanna_models::calibration::{implied_volatility, ImpliedVolError, ImpliedVolSolver};
    use vanna_models::instruments::OptionSide;

    let solver = ImpliedVolSolver::new(LMConfig::default());
    assert!(solver.price_tolerance() > 0.0);

    let sigma = implied_volatility(10.45, 100.0, 100.0, 1.0, 0.05, OptionSide::Call).unwrap();
    assert!((sigma - 0.2).abs() < 1e-3);

    let err = ImpliedVolError::not_converged(100, 0.5);
    assert!(err.is_recoverable());
}

/// Test error conversions between the layers.
#[test]
fn test_error_conversions() {
    use vanna_core::types::SolverError;
    use vanna_models::analytical::AnalyticalError;
    use vanna_models::calibration::ImpliedVolError;
    use vanna_models::instruments::InstrumentError;

    let instrument_err: InstrumentError = AnalyticalError::InvalidExpiry { expiry: -1.0 }.into();
    assert!(matches!(
        instrument_err,
        InstrumentError::InvalidMaturity { .. }
    ));

    let vol_err: ImpliedVolError = SolverError::NonFiniteObjective { x: 0.1 }.into();
    assert!(matches!(
        vol_err,
        ImpliedVolError::NumericalInstability { .. }
    ));
}

/// Test the full workflow: construct, price, mutate, and invert.
#[test]
fn test_pricing_workflow() {
    use vanna_models::calibration::implied_volatility;
    use vanna_models::instruments::{EuropeanOption, OptionSide};

    let mut option = EuropeanOption::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionSide::Call).unwrap();

    let price = option.price();
    assert!((price - 10.45).abs() < 0.01);

    // The model price round-trips through the implied volatility solver
    let sigma = implied_volatility(
        price,
        option.spot(),
        option.strike(),
        option.maturity(),
        option.rate(),
        option.side(),
    )
    .unwrap();
    assert!((sigma - option.volatility()).abs() < 1e-6);

    // Greeks are finite and correctly signed
    assert!(option.delta() > 0.0 && option.delta() < 1.0);
    assert!(option.gamma() > 0.0);
    assert!(option.vega() > 0.0);
    assert!(option.theta() < 0.0);
    assert!(option.rho() > 0.0);

    // Reconfigure the contract from market inputs
    let side: OptionSide = "PUT".parse().unwrap();
    option.set_side(side);
    option.set_spot(110.0).unwrap();
    option.set_strike(105.0).unwrap();
    option.set_maturity(0.5).unwrap();
    option.set_rate(0.03);
    option.set_volatility(0.3).unwrap();

    assert!((option.price() - 6.11).abs() < 0.01);
    assert_eq!(
        option.to_string(),
        "European put option | S0 = $110 | K = $105 | T = 0.5 years | r = 3.0% | sigma = 30.0% | C = $6.11"
    );
}

/// Test that all main modules are public.
#[test]
fn test_main_module_structure() {
    use vanna_models::analytical;
    use vanna_models::calibration;
    use vanna_models::instruments;

    let call = analytical::call_price(100.0, 100.0, 0.05, 0.2, 1.0).unwrap();
    let option = instruments::EuropeanOption::new(
        100.0,
        100.0,
        1.0,
        0.05,
        0.2,
        instruments::OptionSide::Call,
    )
    .unwrap();
    assert!((call - option.price()).abs() < 1e-12);

    let solver = calibration::ImpliedVolSolver::with_defaults();
    let sigma = solver
        .solve(call, 100.0, 100.0, 1.0, 0.05, instruments::OptionSide::Call)
        .unwrap();
    assert!((sigma - 0.2).abs() < 1e-6);
}

/// Test serde round-trips for the public types.
#[cfg(feature = "serde")]
#[test]
fn test_serde_exports() {
    use vanna_models::analytical::black_scholes::BlackScholesParams;
    use vanna_models::instruments::{EuropeanOption, OptionSide};

    let params = BlackScholesParams::new(100.0, 100.0, 0.05, 0.2, 1.0).unwrap();
    let json = serde_json::to_string(&params).unwrap();
    let back: BlackScholesParams<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(back.spot, params.spot);
    assert_eq!(back.volatility, params.volatility);

    let option = EuropeanOption::new(110.0, 105.0, 0.5, 0.03, 0.3, OptionSide::Put).unwrap();
    let json = serde_json::to_string(&option).unwrap();
    let back: EuropeanOption = serde_json::from_str(&json).unwrap();
    assert_eq!(back.price(), option.price());
    assert_eq!(back.side(), option.side());

    // Deserialization enforces the constructor validation
    let bad = r#"{"params":{"spot":-1.0,"strike":100.0,"rate":0.05,"volatility":0.2,"expiry":1.0},"side":"Call"}"#;
    assert!(serde_json::from_str::<EuropeanOption>(bad).is_err());
}
