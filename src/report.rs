// 🧾 Trend Report - the pure query → report pipeline
// Replaces prompt-driven control flow with a function over a structured
// query, so the whole pipeline is testable without console input.

use crate::aggregate::{aggregate, previous_cumulative};
use crate::dataset::VaxRecord;
use crate::deltas::{compute_deltas, label_deltas, DeltaSeries};
use crate::error::TrendError;
use crate::query::TrendQuery;

/// The answer to one trend query: labelled daily deltas plus their total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendReport {
    pub series: DeltaSeries,
    pub total: i64,
}

/// Run the full pipeline for one query.
///
/// Aggregate the requested range, resolve the baseline from the day before
/// the range start (a second scan), convert to daily deltas, and label the
/// dates. Any failure aborts the query; nothing partial comes back.
pub fn build_report(rows: &[VaxRecord], query: &TrendQuery) -> Result<TrendReport, TrendError> {
    let cumulative = aggregate(rows, query)?;
    let baseline = previous_cumulative(rows, query)?;

    let deltas = compute_deltas(&cumulative, baseline);
    let series = label_deltas(&deltas)?;
    let total = series.total();

    Ok(TrendReport { series, total })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::Jurisdiction;
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ca_rows() -> Vec<VaxRecord> {
        vec![
            VaxRecord::new("CA", "01/01/2021", 100),
            VaxRecord::new("CA", "01/02/2021", 150),
            VaxRecord::new("CA", "01/03/2021", 150),
        ]
    }

    #[test]
    fn test_full_pipeline_for_one_state() {
        // Unbounded start, so the baseline is 0 and every row is in range
        let query = TrendQuery::new(Jurisdiction::parse("ca"), None, None);
        let report = build_report(&ca_rows(), &query).unwrap();

        assert_eq!(
            report.series.points(),
            &[
                ("1/1".to_string(), 100),
                ("1/2".to_string(), 50),
                ("1/3".to_string(), 0),
            ]
        );
        assert_eq!(report.total, 150);

        println!("✅ Full pipeline test PASSED");
    }

    #[test]
    fn test_bounded_range_uses_prior_day_as_baseline() {
        let query = TrendQuery::new(
            Jurisdiction::parse("ca"),
            Some(day(2021, 1, 2)),
            Some(day(2021, 1, 3)),
        );
        let report = build_report(&ca_rows(), &query).unwrap();

        // Baseline is 01/01's cumulative 100, so 01/02 contributes 50
        assert_eq!(
            report.series.points(),
            &[("1/2".to_string(), 50), ("1/3".to_string(), 0)]
        );
        assert_eq!(report.total, 50);
    }

    #[test]
    fn test_unmatched_jurisdiction_with_bounded_start_fails_on_baseline() {
        let query = TrendQuery::new(
            Jurisdiction::parse("zz"),
            Some(day(2021, 1, 2)),
            Some(day(2021, 1, 3)),
        );
        let err = build_report(&ca_rows(), &query).unwrap_err();

        assert!(matches!(err, TrendError::MissingBaseline(_)));
    }

    #[test]
    fn test_unmatched_jurisdiction_with_unbounded_start_is_an_empty_range() {
        let query = TrendQuery::new(Jurisdiction::parse("zz"), None, None);
        let err = build_report(&ca_rows(), &query).unwrap_err();

        assert!(matches!(err, TrendError::EmptyRange));
    }

    #[test]
    fn test_wildcard_report_sums_jurisdictions() {
        let mut rows = ca_rows();
        rows.push(VaxRecord::new("NY", "01/01/2021", 10));
        rows.push(VaxRecord::new("NY", "01/02/2021", 30));
        rows.push(VaxRecord::new("NY", "01/03/2021", 60));

        let query = TrendQuery::new(Jurisdiction::All, None, None);
        let report = build_report(&rows, &query).unwrap();

        // Cumulative 110, 180, 210 → deltas 110, 70, 30
        assert_eq!(report.series.values(), vec![110, 70, 30]);
        assert_eq!(report.total, 210);
    }
}
