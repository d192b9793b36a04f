// 🗄️ Dataset - CSV row model and loader
// One row per jurisdiction per reporting date; counts are cumulative-to-date.

use crate::error::TrendError;
use serde::Deserialize;
use std::path::Path;

/// One row of the vaccination dataset.
///
/// Source-owned and read-only to the pipeline. The date stays as raw text
/// here; parsing happens at aggregation time so a bad date surfaces only
/// when a query actually touches the row's jurisdiction. Extra CSV columns
/// are ignored.
#[derive(Debug, Deserialize, Clone)]
pub struct VaxRecord {
    #[serde(rename = "Location")]
    pub location: String,

    #[serde(rename = "Date")]
    pub date: String,

    #[serde(rename = "Administered")]
    pub administered: u64,
}

impl VaxRecord {
    pub fn new(location: &str, date: &str, administered: u64) -> Self {
        VaxRecord {
            location: location.to_string(),
            date: date.to_string(),
            administered,
        }
    }
}

/// Load every row of the dataset into memory.
///
/// Row order is not assumed to mean anything; aggregation sorts by date.
pub fn load_csv(csv_path: &Path) -> Result<Vec<VaxRecord>, TrendError> {
    let mut rdr = csv::Reader::from_path(csv_path)?;

    let mut records = Vec::new();
    for result in rdr.deserialize() {
        let record: VaxRecord = result?;
        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_csv_reads_named_columns() {
        let mut path = std::env::temp_dir();
        path.push("vax_trend_test_load.csv");

        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "Date,Location,Administered,Distributed").unwrap();
        writeln!(file, "01/01/2021,CA,100,500").unwrap();
        writeln!(file, "01/02/2021,NY,75,400").unwrap();
        drop(file);

        let records = load_csv(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].location, "CA");
        assert_eq!(records[0].date, "01/01/2021");
        assert_eq!(records[0].administered, 100);
        assert_eq!(records[1].administered, 75);
    }

    #[test]
    fn test_load_csv_missing_file_is_an_error() {
        let path = Path::new("definitely/not/here.csv");
        assert!(load_csv(path).is_err());
    }
}
