use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::{info, warn};

use crate::engine::errors::IngestError;
use crate::ingest::weather_record::WeatherRecord;

/// Parsed input plus the number of rows that were rejected.
#[derive(Debug, Default)]
pub struct IngestReport {
    pub records: Vec<WeatherRecord>,
    pub skipped: usize,
}

pub fn read_weather_csv(path: &Path, empty_data_symbol: &str) -> Result<IngestReport, IngestError> {
    let file = File::open(path).map_err(csv::Error::from)?;
    info!(target: "col_db::ingest", path = %path.display(), "Reading weather input");
    read_weather(BufReader::new(file), empty_data_symbol)
}

/// Reads a headed CSV stream. Rows that fail to parse are logged and skipped;
/// a broken CSV stream aborts.
pub fn read_weather<R: Read>(input: R, empty_data_symbol: &str) -> Result<IngestReport, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let mut report = IngestReport::default();
    for (row, result) in reader.records().enumerate() {
        let record = result?;
        match WeatherRecord::from_csv(row, &record, empty_data_symbol) {
            Ok(parsed) => report.records.push(parsed),
            Err(e) => {
                warn!(target: "col_db::ingest", row, error = %e, "Skipping malformed row");
                report.skipped += 1;
            }
        }
    }

    info!(
        target: "col_db::ingest",
        rows = report.records.len(),
        skipped = report.skipped,
        "Weather input parsed"
    );
    Ok(report)
}
