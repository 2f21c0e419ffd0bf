//! Unit tests for browser-facing DTO wire shapes

use candlegate::models::{
    AnalysisMode, Direction, ManualDataInput, PredictionConfig, PredictionFactors,
    PredictionResult,
};
use serde_json::json;

#[test]
fn test_prediction_config_wire_shape() {
    let config = PredictionConfig {
        prediction_interval: 5,
        analysis_mode: AnalysisMode::Session,
    };
    let value = serde_json::to_value(&config).unwrap();
    assert_eq!(
        value,
        json!({ "predictionInterval": 5, "analysisMode": "session" })
    );
}

#[test]
fn test_prediction_config_default() {
    let config = PredictionConfig::default();
    assert_eq!(config.prediction_interval, 1);
    assert_eq!(config.analysis_mode, AnalysisMode::Session);
}

#[test]
fn test_prediction_result_round_trip() {
    let result = PredictionResult {
        direction: Direction::Up,
        probability: 0.72,
        confidence: 0.61,
        interval: 5,
        factors: PredictionFactors {
            technical: 0.8,
            volume: 0.4,
            momentum: 0.6,
            volatility: 0.3,
        },
        recommendation: "Up bias over the next 5 bars".to_string(),
    };
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"direction\":\"UP\""));
    assert!(json.contains("\"factors\""));
    let back: PredictionResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);
}

#[test]
fn test_direction_wire_values() {
    assert_eq!(serde_json::to_value(Direction::Up).unwrap(), json!("UP"));
    assert_eq!(serde_json::to_value(Direction::Down).unwrap(), json!("DOWN"));
}

#[test]
fn test_manual_input_tolerates_partial_payloads() {
    let input: ManualDataInput =
        serde_json::from_value(json!({ "open": "100", "volume": "-10" })).unwrap();
    assert_eq!(input.open.as_deref(), Some("100"));
    assert_eq!(input.volume.as_deref(), Some("-10"));
    assert!(input.close.is_none());
}

#[test]
fn test_manual_input_field_collapses_whitespace() {
    let input = ManualDataInput::new().with_open("  100 ").with_high("   ");
    assert_eq!(input.field("open"), Some("100"));
    assert_eq!(input.field("high"), None);
    assert_eq!(input.field("close"), None);
}
