use aurora_ta::indicators::{
    calculate_bollinger, calculate_cci, calculate_cmo, calculate_imi, calculate_macd,
    calculate_mass_index, calculate_rmi, calculate_rsi, calculate_stochastic, Macd,
};
use aurora_ta::moving_average::{ema, sma};
use aurora_ta::{
    HighLow, HighLowClose, Indicator, IndicatorConfig, IndicatorError, OpenClose, Precision,
};
use serde::Deserialize;

/// Close-only scenarios shared with the reference tables.
const CLOSE_SCENARIOS: &str = r#"[
    { "indicator": "rsi",  "params": [5],    "closes": [37.875, 39.5, 38.75, 39.8125, 40.0, 39.875], "expected": 76.6667 },
    { "indicator": "rsi",  "params": [5],    "closes": [37.875, 39.5, 38.75, 39.8125, 40.0, 39.875, 40.1875], "expected": 78.8679 },
    { "indicator": "cmo",  "params": [5],    "closes": [51.0625, 50.125, 52.3125, 52.1875, 53.1875, 53.0625], "expected": 45.7143 },
    { "indicator": "cmo",  "params": [5],    "closes": [51.0625, 50.125, 52.3125, 52.1875, 53.1875, 53.0625, 54.0625, 53.5, 51.5625], "expected": -13.5135 },
    { "indicator": "rmi",  "params": [4, 8], "closes": [6.875, 6.9375, 6.8125, 6.6095, 6.7345, 6.672, 6.625, 6.6875, 6.547, 6.6563, 6.672, 6.6563], "expected": 13.1179 }
]"#;

#[derive(Debug, Deserialize)]
struct CloseScenario {
    indicator: String,
    params: Vec<usize>,
    closes: Vec<f64>,
    expected: f64,
}

fn run_close_scenario(s: &CloseScenario) -> Result<f64, IndicatorError> {
    match s.indicator.as_str() {
        "rsi" => calculate_rsi(&s.closes, s.params[0]),
        "cmo" => calculate_cmo(&s.closes, s.params[0]),
        "rmi" => calculate_rmi(&s.closes, s.params[0], s.params[1]),
        other => panic!("unknown indicator {other}"),
    }
}

#[test]
fn close_only_scenarios() {
    let scenarios: Vec<CloseScenario> = serde_json::from_str(CLOSE_SCENARIOS).unwrap();
    for s in &scenarios {
        let got = run_close_scenario(s).unwrap();
        assert_eq!(got, s.expected, "{} {:?}", s.indicator, s.params);
    }
}

#[test]
fn moving_average_scenarios() {
    let closes = [25.000, 24.875, 24.781, 24.594, 24.500];
    assert_eq!(Precision::Truncate(3).apply(sma(&closes, 5).unwrap()), 24.75);
    assert_eq!(Precision::Round(3).apply(ema(&closes, 5).unwrap()), 24.698);
}

#[test]
fn macd_scenario() {
    let closes = [
        166.23, 164.51, 162.41, 161.62, 159.78, 159.69, 159.22, 170.33, 174.78, 174.61, 175.84,
        172.90, 172.39, 171.66, 174.83, 176.28, 172.12, 168.64, 168.88, 172.79, 172.55, 168.88,
        167.30, 164.32, 160.07, 162.74, 164.85, 165.12, 163.20, 166.56, 166.23, 163.17, 159.30,
        157.44, 162.95,
    ];
    let out = calculate_macd(&closes, 12, 26, 9).unwrap();
    assert_eq!(out.macd, -1.934);
    assert_eq!(out.to_array(), [-1.934, -1.442, -0.492]);
}

#[test]
fn bollinger_scenario() {
    let closes = [31.8750, 32.1250, 32.3125, 32.1250, 31.8750];
    let bands = calculate_bollinger(&closes, 5, 2.0).unwrap();
    assert_eq!(bands.to_array(), [32.397, 32.062, 31.727]);
}

#[test]
fn bar_based_scenarios() {
    let hlc: Vec<HighLowClose> = [
        (15.1250, 14.9360, 14.9360),
        (15.0520, 14.6267, 14.7520),
        (14.8173, 14.5557, 14.5857),
        (14.6900, 14.4600, 14.6000),
        (14.7967, 14.5483, 14.6983),
        (14.7940, 13.9347, 13.9460),
        (14.0930, 13.8223, 13.9827),
        (14.7000, 14.0200, 14.4500),
        (14.5255, 14.2652, 14.3452),
        (14.6579, 14.3773, 14.4197),
    ]
    .into_iter()
    .map(HighLowClose::from)
    .collect();
    assert_eq!(calculate_cci(&hlc, 5).unwrap(), 84.4605);

    let stoch: Vec<HighLowClose> = [
        (34.3750, 33.5312, 34.3125),
        (34.7500, 33.9062, 34.1250),
        (34.2188, 33.6875, 33.7500),
        (33.8281, 33.2500, 33.6406),
        (33.4375, 33.0000, 33.0156),
        (33.4688, 32.9375, 33.0469),
        (34.3750, 33.2500, 34.2969),
        (34.7188, 34.0469, 34.1406),
        (34.6250, 33.9375, 34.5469),
    ]
    .into_iter()
    .map(HighLowClose::from)
    .collect();
    assert_eq!(
        calculate_stochastic(&stoch, 5, 3, 3).unwrap().to_array(),
        [83.4363, 55.41]
    );

    let oc: Vec<OpenClose> = [
        (18.4833, 18.5000),
        (18.5417, 18.4167),
        (18.4167, 18.1667),
        (18.1667, 18.1250),
        (18.1667, 17.9583),
        (18.0417, 18.0000),
        (18.0000, 17.9583),
        (17.9167, 17.8333),
        (17.7917, 17.9583),
        (18.0417, 18.5417),
    ]
    .into_iter()
    .map(OpenClose::from)
    .collect();
    assert_eq!(calculate_imi(&oc, 7).unwrap(), 61.5228);

    let hl: Vec<HighLow> = [
        (38.1250, 37.7500),
        (38.0000, 37.7500),
        (37.9375, 37.8125),
        (37.8750, 37.6250),
        (38.1250, 37.5000),
        (38.1250, 37.5000),
        (37.7500, 37.5000),
        (37.6250, 37.4375),
        (37.6875, 37.3750),
        (37.5000, 37.3750),
        (37.5625, 37.3750),
        (37.6250, 36.8125),
        (36.6875, 36.3125),
        (36.8750, 36.2500),
        (36.9375, 36.5000),
        (36.5000, 36.2500),
        (36.9375, 36.3125),
        (37.0000, 36.6250),
        (36.8750, 36.5625),
    ]
    .into_iter()
    .map(HighLow::from)
    .collect();
    assert_eq!(calculate_mass_index(&hl, 9).unwrap(), 3.2236);
}

#[test]
fn window_boundary_across_indicators() {
    let closes: Vec<f64> = (0..30).map(|i| 100.0 + (i as f64 * 0.7).sin()).collect();
    for period in [2, 5, 14] {
        assert!(calculate_rsi(&closes[..period + 1], period).is_ok());
        assert!(matches!(
            calculate_rsi(&closes[..period], period),
            Err(IndicatorError::InsufficientData { .. })
        ));
        assert!(calculate_cmo(&closes[..period + 1], period).is_ok());
        assert!(calculate_cmo(&closes[..period], period).is_err());
    }
}

#[test]
fn evaluation_is_deterministic() {
    let closes: Vec<f64> = (0..60).map(|i| 50.0 + (i as f64 * 0.3).cos() * 4.0).collect();
    let macd = Macd::default();
    assert_eq!(macd.evaluate(&closes), macd.evaluate(&closes));
    assert_eq!(calculate_rsi(&closes, 14), calculate_rsi(&closes, 14));
}

#[test]
fn defaults_from_config_run_end_to_end() {
    let cfg = IndicatorConfig::default();
    let closes: Vec<f64> = (0..80).map(|i| 20.0 + (i as f64 * 0.25).sin() * 2.0).collect();

    let rsi = cfg.rsi().evaluate(&closes).unwrap();
    assert!((0.0..=100.0).contains(&rsi));

    let bands = cfg.bollinger().evaluate(&closes).unwrap();
    assert!(bands.upper >= bands.middle && bands.middle >= bands.lower);

    let macd = cfg.macd().evaluate(&closes).unwrap();
    assert!(macd.to_array().iter().all(|v| v.is_finite()));
}
