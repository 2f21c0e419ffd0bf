//! Raw manual-entry form record, exactly as the input layer hands it over.

use serde::{Deserialize, Serialize};

/// One user-entered candle before any validation has run.
///
/// Every field is raw form text and may be absent, empty, or garbage; the
/// validator owns all narrowing. An empty or whitespace-only string counts
/// as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ManualDataInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

impl ManualDataInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_open(mut self, open: impl Into<String>) -> Self {
        self.open = Some(open.into());
        self
    }

    pub fn with_high(mut self, high: impl Into<String>) -> Self {
        self.high = Some(high.into());
        self
    }

    pub fn with_low(mut self, low: impl Into<String>) -> Self {
        self.low = Some(low.into());
        self
    }

    pub fn with_close(mut self, close: impl Into<String>) -> Self {
        self.close = Some(close.into());
        self
    }

    pub fn with_volume(mut self, volume: impl Into<String>) -> Self {
        self.volume = Some(volume.into());
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    /// Field content with empty/whitespace collapsed to `None`.
    pub fn field(&self, name: &str) -> Option<&str> {
        let raw = match name {
            "open" => self.open.as_deref(),
            "high" => self.high.as_deref(),
            "low" => self.low.as_deref(),
            "close" => self.close.as_deref(),
            "volume" => self.volume.as_deref(),
            "date" => self.date.as_deref(),
            "time" => self.time.as_deref(),
            _ => None,
        };
        raw.map(str::trim).filter(|s| !s.is_empty())
    }
}
