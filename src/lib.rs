// Vax Trend - Core Library
// Daily vaccination trend pipeline:
//   CSV rows → cumulative series → baseline → daily deltas → bar chart

pub mod aggregate;
pub mod chart;
pub mod dataset;
pub mod dates;
pub mod deltas;
pub mod error;
pub mod query;
pub mod report;

// Re-export commonly used types
pub use aggregate::{aggregate, previous_cumulative, CumulativeSeries};
pub use chart::render_bar_chart;
pub use dataset::{load_csv, VaxRecord};
pub use dates::{format_label, parse_mdy};
pub use deltas::{compute_deltas, label_deltas, DeltaSeries};
pub use error::TrendError;
pub use query::{Jurisdiction, TrendQuery};
pub use report::{build_report, TrendReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
