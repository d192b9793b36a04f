// ➕ Aggregator - cumulative counts per date for one query
// Scans the full dataset, keeps rows matching jurisdiction + range, and
// merges duplicate dates by summation (wildcard mode relies on this).

use crate::dataset::VaxRecord;
use crate::dates::parse_mdy;
use crate::error::TrendError;
use crate::query::TrendQuery;
use chrono::NaiveDate;
use std::collections::BTreeMap;

// ============================================================================
// CUMULATIVE SERIES
// ============================================================================

/// Ordered mapping date → cumulative administered count.
///
/// Built once per query, immutable afterwards. Ascending date order is
/// structural (a sorted Vec), not an incidental property of map iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CumulativeSeries {
    entries: Vec<(NaiveDate, u64)>,
}

impl CumulativeSeries {
    pub fn entries(&self) -> &[(NaiveDate, u64)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn first(&self) -> Option<&(NaiveDate, u64)> {
        self.entries.first()
    }

    pub fn last(&self) -> Option<&(NaiveDate, u64)> {
        self.entries.last()
    }

    /// Cumulative value on an exact date, if present.
    pub fn value_on(&self, date: NaiveDate) -> Option<u64> {
        self.entries
            .binary_search_by_key(&date, |(d, _)| *d)
            .ok()
            .map(|i| self.entries[i].1)
    }
}

// ============================================================================
// AGGREGATION
// ============================================================================

/// Build the cumulative series for one query.
///
/// A row is kept when its jurisdiction matches the selector (always, under
/// the wildcard) and its parsed date falls inside the inclusive bounds.
/// Dates shared by several kept rows sum their counts. An empty result is
/// an empty series, not an error; callers decide what that means.
pub fn aggregate(rows: &[VaxRecord], query: &TrendQuery) -> Result<CumulativeSeries, TrendError> {
    let mut by_date: BTreeMap<NaiveDate, u64> = BTreeMap::new();

    for row in rows {
        // Jurisdiction filter first: rows we never select are never parsed
        if !query.jurisdiction.matches(&row.location) {
            continue;
        }

        let date = parse_mdy(&row.date)?;
        if !query.contains(date) {
            continue;
        }

        *by_date.entry(date).or_insert(0) += row.administered;
    }

    Ok(CumulativeSeries {
        entries: by_date.into_iter().collect(),
    })
}

// ============================================================================
// BASELINE RESOLUTION
// ============================================================================

/// Cumulative total on the day immediately before the query's start.
///
/// This is the subtraction anchor for the first daily delta. An unbounded
/// start means the range begins before all data, so the baseline is 0 (and
/// likewise when the start has no representable predecessor). Otherwise the
/// dataset must carry an entry for start-1 under the same jurisdiction
/// filter; a gap there is a `MissingBaseline` error, not a silent crash.
pub fn previous_cumulative(rows: &[VaxRecord], query: &TrendQuery) -> Result<u64, TrendError> {
    let start = match query.start {
        Some(start) => start,
        None => return Ok(0),
    };

    let prior_day = match start.pred_opt() {
        Some(day) => day,
        None => return Ok(0),
    };

    // Second full scan, narrowed to the single prior day. Two scans per
    // query is plenty fast at the dataset sizes this tool sees.
    let single_day = TrendQuery::new(
        query.jurisdiction.clone(),
        Some(prior_day),
        Some(prior_day),
    );

    let series = aggregate(rows, &single_day)?;
    series
        .value_on(prior_day)
        .ok_or(TrendError::MissingBaseline(prior_day))
}

// ============================================================================
// TESTS
// ============================================================================
