// 📉 DeltaComputer - cumulative totals → daily incremental counts
// Consecutive subtraction against a running previous value, then one label
// pass once the whole range is known.

use crate::aggregate::CumulativeSeries;
use crate::dates::format_label;
use crate::error::TrendError;
use chrono::{Datelike, NaiveDate};

// ============================================================================
// DELTA SERIES
// ============================================================================

/// Daily deltas keyed by display label, in date order.
///
/// An explicit ordered sequence of (label, value) pairs: first/last access
/// and iteration order are guarantees of the structure, not of a map
/// implementation. Values can be negative when upstream revises a
/// cumulative total downward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeltaSeries {
    points: Vec<(String, i64)>,
}

impl DeltaSeries {
    pub fn points(&self) -> &[(String, i64)] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn labels(&self) -> Vec<String> {
        self.points.iter().map(|(label, _)| label.clone()).collect()
    }

    pub fn values(&self) -> Vec<i64> {
        self.points.iter().map(|(_, value)| *value).collect()
    }

    /// Sum of all daily deltas: the range total.
    pub fn total(&self) -> i64 {
        self.points.iter().map(|(_, value)| value).sum()
    }
}

// ============================================================================
// DELTA COMPUTATION
// ============================================================================

/// Convert a cumulative series into daily deltas.
///
/// Walks the series in date order, emitting (date, cumulative - previous)
/// with `previous` seeded from the baseline. No smoothing, clamping, or gap
/// filling: when a date is absent between two present dates, the next
/// present date absorbs the whole difference since the last present one.
pub fn compute_deltas(series: &CumulativeSeries, baseline: u64) -> Vec<(NaiveDate, i64)> {
    let mut previous = baseline as i64;
    let mut deltas = Vec::with_capacity(series.len());

    for &(date, cumulative) in series.entries() {
        let cumulative = cumulative as i64;
        deltas.push((date, cumulative - previous));
        previous = cumulative;
    }

    deltas
}

/// Render delta dates into display labels.
///
/// The year is dropped from every label when the first and last delta dates
/// share a calendar year; one flag covers the whole series. An empty delta
/// sequence has no first or last date to inspect, so it fails explicitly.
pub fn label_deltas(deltas: &[(NaiveDate, i64)]) -> Result<DeltaSeries, TrendError> {
    let (first, last) = match (deltas.first(), deltas.last()) {
        (Some(first), Some(last)) => (first.0, last.0),
        _ => return Err(TrendError::EmptyRange),
    };

    let yearless = first.year() == last.year();

    let points = deltas
        .iter()
        .map(|&(date, value)| (format_label(date, yearless), value))
        .collect();

    Ok(DeltaSeries { points })
}

// ============================================================================
// TESTS
// ============================================================================
