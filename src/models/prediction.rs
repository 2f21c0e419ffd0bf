//! Prediction request/response contracts shared with the browser host.

use serde::{Deserialize, Serialize};

/// Options for one prediction request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionConfig {
    /// Bars/minutes ahead; always positive.
    pub prediction_interval: u32,
    pub analysis_mode: AnalysisMode,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            prediction_interval: 1,
            analysis_mode: AnalysisMode::Session,
        }
    }
}

/// Analysis context for a prediction. Only intraday single-session
/// analysis exists today; the enum leaves room for more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    Session,
}

/// Predicted price direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Up,
    Down,
}

/// Named sub-scores contributing to a prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionFactors {
    pub technical: f64,
    pub volume: f64,
    pub momentum: f64,
    pub volatility: f64,
}

/// Output of the prediction engine. Pure data contract; the engine
/// producing it lives behind [`crate::engine::PredictionEngine`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub direction: Direction,
    /// Conventionally in [0, 1].
    pub probability: f64,
    /// Conventionally in [0, 1].
    pub confidence: f64,
    /// Echo of the requested interval.
    pub interval: u32,
    pub factors: PredictionFactors,
    pub recommendation: String,
}
