//! Manual candle entry validation.
//!
//! Pure and side-effect free: the same input always yields the same
//! ordered error list. Rule passes run in a fixed order (presence, then
//! numeric parseability, then range, then OHLC consistency, then
//! timestamp) so presentation and tests stay stable.

pub mod error;

pub use error::{ValidationError, ValidationErrorList};

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use tracing::debug;

use crate::models::{Candle, ManualDataInput};

const REQUIRED_FIELDS: [&str; 7] = ["open", "high", "low", "close", "volume", "date", "time"];

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

/// Check a candidate record against every entry rule.
///
/// Returns all violations at once; an empty list means the record is
/// acceptable. Never panics, regardless of how malformed the input is.
pub fn validate(input: &ManualDataInput) -> ValidationErrorList {
    let (_, errors) = run_rules(input);
    debug!(violations = errors.len(), "validated manual entry");
    errors
}

/// Validate and, if clean, narrow the record into a typed [`Candle`].
///
/// `Ok` exactly when [`validate`] would return the empty list.
pub fn parse_candle(input: &ManualDataInput) -> Result<Candle, ValidationErrorList> {
    let (parsed, errors) = run_rules(input);
    match (
        parsed.open,
        parsed.high,
        parsed.low,
        parsed.close,
        parsed.volume,
        parsed.timestamp,
    ) {
        (Some(open), Some(high), Some(low), Some(close), Some(volume), Some(timestamp))
            if errors.is_empty() =>
        {
            Ok(Candle::new(open, high, low, close, volume, timestamp))
        }
        _ => Err(errors),
    }
}

#[derive(Default)]
struct ParsedFields {
    open: Option<f64>,
    high: Option<f64>,
    low: Option<f64>,
    close: Option<f64>,
    volume: Option<f64>,
    timestamp: Option<DateTime<Utc>>,
}

fn run_rules(input: &ManualDataInput) -> (ParsedFields, ValidationErrorList) {
    let mut errors = ValidationErrorList::new();
    let mut parsed = ParsedFields::default();

    // Pass 1: presence, in fixed field order.
    for field in REQUIRED_FIELDS {
        if input.field(field).is_none() {
            errors.push(ValidationError::MissingField { field });
        }
    }

    // Pass 2: numeric parseability. Absent fields were already reported.
    parsed.open = parse_numeric(input, "open", &mut errors);
    parsed.high = parse_numeric(input, "high", &mut errors);
    parsed.low = parse_numeric(input, "low", &mut errors);
    parsed.close = parse_numeric(input, "close", &mut errors);
    parsed.volume = parse_numeric(input, "volume", &mut errors);

    // Pass 3: range/sign.
    if let Some(volume) = parsed.volume {
        if volume < 0.0 {
            errors.push(ValidationError::OutOfRange {
                field: "volume",
                value: volume,
                min: 0.0,
            });
        }
    }

    // Pass 4: cross-field OHLC consistency. One entry per candle, naming
    // every price outside the band.
    if let (Some(open), Some(high), Some(low), Some(close)) =
        (parsed.open, parsed.high, parsed.low, parsed.close)
    {
        let mut outside = Vec::new();
        if open < low || open > high {
            outside.push("open");
        }
        if close < low || close > high {
            outside.push("close");
        }
        if !outside.is_empty() {
            errors.push(ValidationError::InconsistentOhlc {
                fields: outside.join(" and "),
            });
        }
    }

    // Pass 5: date and time must combine into a real point in time.
    if let (Some(date), Some(time)) = (input.field("date"), input.field("time")) {
        match parse_timestamp(date, time) {
            Some(timestamp) => parsed.timestamp = Some(timestamp),
            None => errors.push(ValidationError::InvalidTimestamp {
                date: date.to_string(),
                time: time.to_string(),
            }),
        }
    }

    (parsed, errors)
}

fn parse_numeric(
    input: &ManualDataInput,
    field: &'static str,
    errors: &mut ValidationErrorList,
) -> Option<f64> {
    let raw = input.field(field)?;
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            errors.push(ValidationError::UnparseableNumber {
                field,
                value: raw.to_string(),
            });
            None
        }
    }
}

fn parse_timestamp(date: &str, time: &str) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(date, DATE_FORMAT).ok()?;
    let time = TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(time, format).ok())?;
    Some(date.and_time(time).and_utc())
}
