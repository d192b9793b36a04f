// 📅 DateCodec - MM/DD/YYYY parsing and chart label formatting

use crate::error::TrendError;
use chrono::{Datelike, NaiveDate};

/// Parse "MM/DD/YYYY" text into a calendar date.
///
/// Splits on '/' and requires exactly three integer fields. Calendar
/// validity (month 13, day 32, ...) is left to chrono's constructor.
pub fn parse_mdy(text: &str) -> Result<NaiveDate, TrendError> {
    let fields: Vec<&str> = text.split('/').collect();
    if fields.len() != 3 {
        return Err(TrendError::Format(text.to_string()));
    }

    let month: u32 = fields[0]
        .trim()
        .parse()
        .map_err(|_| TrendError::Format(text.to_string()))?;
    let day: u32 = fields[1]
        .trim()
        .parse()
        .map_err(|_| TrendError::Format(text.to_string()))?;
    let year: i32 = fields[2]
        .trim()
        .parse()
        .map_err(|_| TrendError::Format(text.to_string()))?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or(TrendError::InvalidDate { month, day, year })
}

/// Format a date for the chart x-axis: "M/D" when `yearless`, else
/// "YYYY/M/D". No zero padding either way. Callers decide `yearless` by
/// comparing the first and last dates of the series being labelled.
pub fn format_label(date: NaiveDate, yearless: bool) -> String {
    if yearless {
        format!("{}/{}", date.month(), date.day())
    } else {
        format!("{}/{}/{}", date.year(), date.month(), date.day())
    }
}
