use candlegate::engine::{run_prediction, PredictionEngine};
use candlegate::logging::init_logging;
use candlegate::models::{
    Candle, Direction, ManualDataInput, PredictionConfig, PredictionFactors, PredictionResult,
};
use candlegate::presenter::present;
use candlegate::validation::validate;

/// Toy stand-in for the real session engine so the demo runs end to end.
struct DemoEngine;

impl PredictionEngine for DemoEngine {
    fn predict(&self, candle: &Candle, config: &PredictionConfig) -> PredictionResult {
        let direction = if candle.is_bullish() {
            Direction::Up
        } else {
            Direction::Down
        };
        let body = (candle.close - candle.open).abs();
        let range = (candle.high - candle.low).max(f64::EPSILON);
        let strength = (body / range).min(1.0);
        PredictionResult {
            direction,
            probability: 0.5 + strength / 2.0,
            confidence: strength,
            interval: config.prediction_interval,
            factors: PredictionFactors {
                technical: strength,
                volume: (candle.volume / 1000.0).min(1.0),
                momentum: strength,
                volatility: range / candle.close,
            },
            recommendation: format!("{direction:?} bias over the next {} bars", config.prediction_interval),
        }
    }
}

fn main() {
    init_logging();
    let engine = DemoEngine;
    let config = PredictionConfig::default();

    let entries = [
        (
            "valid entry",
            ManualDataInput::new()
                .with_open("100")
                .with_high("110")
                .with_low("95")
                .with_close("105")
                .with_volume("500")
                .with_date("2024-01-15")
                .with_time("09:30"),
        ),
        (
            "open above high",
            ManualDataInput::new()
                .with_open("100")
                .with_high("95")
                .with_low("90")
                .with_close("98")
                .with_volume("500")
                .with_date("2024-01-15")
                .with_time("09:30"),
        ),
        (
            "missing open, negative volume",
            ManualDataInput::new()
                .with_open("")
                .with_high("110")
                .with_low("95")
                .with_close("105")
                .with_volume("-10")
                .with_date("2024-01-15")
                .with_time("09:30"),
        ),
    ];

    for (label, input) in entries {
        println!("{label}:");
        let panel = present(&validate(&input));
        if panel.is_hidden() {
            match run_prediction(&engine, &input, &config) {
                Ok(result) => println!("  {}", result.recommendation),
                Err(errors) => println!("  rejected with {} errors", errors.len()),
            }
        } else {
            for line in panel.lines() {
                println!("  {line}");
            }
        }
        println!();
    }
}
