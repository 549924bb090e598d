use csv::StringRecord;

use crate::engine::errors::IngestError;
use crate::ingest::calendar::CalendarFields;

const TIMESTAMP_IDX: usize = 1;
const STATION_IDX: usize = 2;
const TEMPERATURE_IDX: usize = 3;
const HUMIDITY_IDX: usize = 4;
const MIN_FIELDS: usize = 5;

/// One weather observation with the sentinel already translated to `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherRecord {
    pub timestamp: String,
    pub station: String,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub calendar: CalendarFields,
}

impl WeatherRecord {
    /// Parses `id,Timestamp,Station,Temperature,Humidity`. `row` is only used
    /// in error messages.
    pub fn from_csv(
        row: usize,
        record: &StringRecord,
        empty_data_symbol: &str,
    ) -> Result<Self, IngestError> {
        if record.len() < MIN_FIELDS {
            return Err(IngestError::ShortRow {
                row,
                expected: MIN_FIELDS,
                found: record.len(),
            });
        }

        let timestamp = record[TIMESTAMP_IDX].trim().to_string();
        let calendar =
            CalendarFields::from_timestamp(&timestamp).map_err(|source| {
                IngestError::InvalidTimestamp {
                    row,
                    value: timestamp.clone(),
                    source,
                }
            })?;

        Ok(Self {
            station: record[STATION_IDX].trim().to_string(),
            temperature: parse_measurement(
                row,
                "Temperature",
                &record[TEMPERATURE_IDX],
                empty_data_symbol,
            )?,
            humidity: parse_measurement(row, "Humidity", &record[HUMIDITY_IDX], empty_data_symbol)?,
            timestamp,
            calendar,
        })
    }
}

/// `None` for the empty-data sentinel, otherwise a decimal.
pub fn parse_measurement(
    row: usize,
    field: &'static str,
    raw: &str,
    empty_data_symbol: &str,
) -> Result<Option<f64>, IngestError> {
    let raw = raw.trim();
    if raw == empty_data_symbol {
        return Ok(None);
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(IngestError::InvalidNumber {
            row,
            field,
            value: raw.to_string(),
        }),
    }
}
