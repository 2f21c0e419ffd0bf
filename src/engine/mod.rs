//! Prediction engine seam and its admission gate.

use tracing::{debug, info};

use crate::models::{Candle, ManualDataInput, PredictionConfig, PredictionResult};
use crate::validation::{self, ValidationErrorList};

/// Interface to the session prediction engine.
///
/// Implementations only ever see a validated [`Candle`]; the gate in
/// [`run_prediction`] enforces that contract.
pub trait PredictionEngine {
    fn predict(&self, candle: &Candle, config: &PredictionConfig) -> PredictionResult;
}

/// Validate a manual entry and forward it to the engine only if clean.
///
/// Invalid input returns the full, ordered error list untouched; the
/// engine is never invoked for it.
pub fn run_prediction<E: PredictionEngine>(
    engine: &E,
    input: &ManualDataInput,
    config: &PredictionConfig,
) -> Result<PredictionResult, ValidationErrorList> {
    let candle = validation::parse_candle(input).map_err(|errors| {
        debug!(violations = errors.len(), "rejected manual entry");
        errors
    })?;
    let result = engine.predict(&candle, config);
    info!(
        direction = ?result.direction,
        confidence = result.confidence,
        interval = result.interval,
        "prediction generated"
    );
    Ok(result)
}
