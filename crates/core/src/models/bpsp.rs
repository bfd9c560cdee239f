use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::fundamentals::Row;
use crate::errors::CoreError;

/// Length of the BPSP history window, in years.
pub const BPSP_WINDOW_YEARS: u32 = 5;

/// One dated observation of the Buying Power / Selling Pressure indicator.
///
/// `values` holds every other column of the row as returned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BpspPoint {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub values: Row,
}

impl BpspPoint {
    /// Split a store row into its date and the remaining columns.
    ///
    /// Accepts `YYYY-MM-DD`, optionally followed by a time part
    /// (`2024-03-01 00:00:00`, `2024-03-01T00:00:00Z`).
    pub fn from_row(mut row: Row) -> Result<Self, CoreError> {
        let raw = row
            .remove("date")
            .ok_or_else(|| CoreError::Deserialization("BPSP row has no date column".into()))?;

        let date = match &raw {
            Value::String(s) => parse_date(s),
            _ => None,
        }
        .ok_or_else(|| CoreError::Deserialization(format!("invalid BPSP date: {raw}")))?;

        Ok(Self { date, values: row })
    }

    /// Numeric value of another column, if present.
    pub fn value(&self, column: &str) -> Option<f64> {
        self.values.get(column).and_then(Value::as_f64)
    }
}

/// First date still inside the BPSP window when queried on `today`.
pub fn window_start(today: NaiveDate) -> NaiveDate {
    today
        .checked_sub_months(Months::new(BPSP_WINDOW_YEARS * 12))
        .unwrap_or(NaiveDate::MIN)
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    let head = s.trim().get(..10)?;
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}
