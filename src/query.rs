// 🔎 Query Model - jurisdiction selector and inclusive date bounds

use chrono::NaiveDate;

/// Jurisdiction selector: a two-letter code or the "all" wildcard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Jurisdiction {
    /// Aggregate across every jurisdiction in the dataset.
    All,
    /// Exact, case-insensitive match. Stored lowercase.
    Code(String),
}

impl Jurisdiction {
    pub fn parse(text: &str) -> Jurisdiction {
        let lowered = text.trim().to_lowercase();
        if lowered == "all" {
            Jurisdiction::All
        } else {
            Jurisdiction::Code(lowered)
        }
    }

    /// Case-insensitive match against a row's Location column.
    pub fn matches(&self, location: &str) -> bool {
        match self {
            Jurisdiction::All => true,
            Jurisdiction::Code(code) => location.to_lowercase() == *code,
        }
    }
}

/// One trend query: which rows to keep.
///
/// Bounds are inclusive on both ends. `None` means unbounded on that side;
/// explicit options instead of the "01/01/2020" / "12/31/9999" sentinel
/// dates, which could collide with real data at those boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendQuery {
    pub jurisdiction: Jurisdiction,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl TrendQuery {
    pub fn new(jurisdiction: Jurisdiction, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        TrendQuery {
            jurisdiction,
            start,
            end,
        }
    }

    /// Is `date` inside the inclusive [start, end] range?
    pub fn contains(&self, date: NaiveDate) -> bool {
        if let Some(start) = self.start {
            if date < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if date > end {
                return false;
            }
        }
        true
    }
}
