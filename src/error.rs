// 🚨 Error Kinds - every way a trend query can fail
// All errors are fatal to the single query: no retry, no partial chart.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrendError {
    /// Date text did not decompose into three "/"-separated integer fields.
    #[error("Bad date text '{0}': expected MM/DD/YYYY")]
    Format(String),

    /// Three integer fields that do not name a real calendar date.
    #[error("No such calendar date: {month}/{day}/{year}")]
    InvalidDate { month: u32, day: u32, year: i32 },

    /// The day before the range start has no aggregated entry for the
    /// chosen jurisdiction, so there is no subtraction anchor.
    #[error("No cumulative entry for {0}, the day before the range start")]
    MissingBaseline(NaiveDate),

    /// No rows matched the jurisdiction and date range.
    #[error("No rows matched the jurisdiction and date range")]
    EmptyRange,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Chart error: {0}")]
    Chart(String),
}
