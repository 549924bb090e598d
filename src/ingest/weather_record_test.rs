use csv::StringRecord;

use crate::engine::errors::IngestError;
use crate::ingest::weather_record::{WeatherRecord, parse_measurement};

fn record(fields: &[&str]) -> StringRecord {
    StringRecord::from(fields.to_vec())
}

#[test]
fn parses_a_complete_row() {
    let rec = record(&["7", "2003-01-15 13:30", "Changi", "25.1", "80"]);
    let parsed = WeatherRecord::from_csv(7, &rec, "M").unwrap();

    assert_eq!(parsed.station, "Changi");
    assert_eq!(parsed.temperature, Some(25.1));
    assert_eq!(parsed.humidity, Some(80.0));
    assert_eq!(parsed.calendar.year, "2003");
    assert_eq!(parsed.calendar.month, "January");
    assert_eq!(parsed.calendar.date, "2003-01-15");
}

#[test]
fn sentinel_becomes_null() {
    let rec = record(&["0", "2013-02-01 00:00", "Paya Lebar", "M", " M "]);
    let parsed = WeatherRecord::from_csv(0, &rec, "M").unwrap();
    assert_eq!(parsed.temperature, None);
    assert_eq!(parsed.humidity, None);
}

#[test]
fn sentinel_is_configurable() {
    assert_eq!(parse_measurement(0, "Humidity", "NA", "NA").unwrap(), None);
    assert!(parse_measurement(0, "Humidity", "M", "NA").is_err());
}

#[test]
fn rejects_non_numeric_measurements() {
    let rec = record(&["3", "2003-01-15 13:30", "Changi", "warm", "80"]);
    let err = WeatherRecord::from_csv(3, &rec, "M").unwrap_err();
    assert!(matches!(
        err,
        IngestError::InvalidNumber { row: 3, field: "Temperature", ref value } if value == "warm"
    ));
    assert!(parse_measurement(0, "Humidity", "NaN", "M").is_err());
}

#[test]
fn rejects_short_rows_and_bad_timestamps() {
    let short = record(&["1", "2003-01-15 13:30", "Changi"]);
    assert!(matches!(
        WeatherRecord::from_csv(1, &short, "M"),
        Err(IngestError::ShortRow { expected: 5, found: 3, .. })
    ));

    let bad_ts = record(&["2", "15/01/2003", "Changi", "1", "2"]);
    assert!(matches!(
        WeatherRecord::from_csv(2, &bad_ts, "M"),
        Err(IngestError::InvalidTimestamp { row: 2, .. })
    ));
}
