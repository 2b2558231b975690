use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{decimal_to_f64, format_date, parse_date};
use crate::error::ChartResult;

/// Field name the engine reads dates from (`encode.x`).
pub const POINT_DATE_FIELD: &str = "d";
/// Field name the engine reads values from (`encode.y`).
pub const POINT_VALUE_FIELD: &str = "v";

/// One sample of a date series.
///
/// `d` stays a string because dataset sources are handed to the engine as-is;
/// use [`Point::date`] when a typed date is needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub d: String,
    pub v: f64,
}

impl Point {
    #[must_use]
    pub fn new(d: impl Into<String>, v: f64) -> Self {
        Self { d: d.into(), v }
    }

    #[must_use]
    pub fn from_date(date: NaiveDate, v: f64) -> Self {
        Self {
            d: format_date(date),
            v,
        }
    }

    pub fn from_decimal(date: NaiveDate, value: Decimal) -> ChartResult<Self> {
        Ok(Self {
            d: format_date(date),
            v: decimal_to_f64(value, "value")?,
        })
    }

    /// Parses `d` as either `YYYY-MM-DD` or an RFC 3339 timestamp.
    pub fn date(&self) -> ChartResult<NaiveDate> {
        parse_date(&self.d)
    }
}

/// Named series of points sharing one unit of measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateSeries {
    pub name: String,
    pub unit: String,
    #[serde(default)]
    pub points: Vec<Point>,
}

impl DateSeries {
    #[must_use]
    pub fn new(name: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            points: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_points(mut self, points: Vec<Point>) -> Self {
        self.points = points;
        self
    }

    #[must_use]
    pub fn with_point(mut self, d: impl Into<String>, v: f64) -> Self {
        self.points.push(Point::new(d, v));
        self
    }

    /// Legend label shown by the engine: `"<name>, <unit>"`.
    #[must_use]
    pub fn display_label(&self) -> String {
        format!("{}, {}", self.name, self.unit)
    }
}
