//! Validated candle type consumed by the prediction engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One fully validated OHLCV period.
///
/// Only the validator constructs these, so downstream code can rely on
/// finite prices, `low <= open/close <= high`, and non-negative volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub timestamp: DateTime<Utc>,
}

impl Candle {
    pub(crate) fn new(
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            open,
            high,
            low,
            close,
            volume,
            timestamp,
        }
    }

    /// Whether the period closed above its open.
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }
}
