//! Manual candle entry core for the session prediction terminal.
//!
//! Validates raw OHLCV form input, projects violations into a renderable
//! error panel, and gates what reaches the prediction engine.

pub mod config;
pub mod engine;
pub mod logging;
pub mod models;
pub mod presenter;
pub mod validation;

pub use engine::{run_prediction, PredictionEngine};
pub use models::{
    AnalysisMode, Candle, Direction, ManualDataInput, PredictionConfig, PredictionFactors,
    PredictionResult,
};
pub use presenter::{present, ErrorItem, ErrorPanel};
pub use validation::{parse_candle, validate, ValidationError, ValidationErrorList};
