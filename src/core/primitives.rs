use chrono::{DateTime, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Value used when a percent field cannot be parsed.
pub const DEFAULT_PERCENT: f64 = 5.0;

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn parse_date(input: &str) -> ChartResult<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(input, DATE_FORMAT) {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(input)
        .map(|time| time.date_naive())
        .map_err(|e| ChartError::InvalidData(format!("invalid date string `{input}`: {e}")))
}

/// Parses `"12%"` or `"12"` into `12.0`.
///
/// Unparsable input and a plain zero fall back to [`DEFAULT_PERCENT`].
#[must_use]
pub fn parse_percent_to_number(value: &str) -> f64 {
    let trimmed = value.trim();
    if let Some(number) = trimmed.strip_suffix('%') {
        return number
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .unwrap_or(DEFAULT_PERCENT);
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() && n != 0.0 => n,
        _ => DEFAULT_PERCENT,
    }
}

#[must_use]
pub fn format_number_to_percent(value: f64) -> String {
    format!("{value}%")
}
