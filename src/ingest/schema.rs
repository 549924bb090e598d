use tracing::info;

use crate::engine::core::store::ColumnStore;
use crate::engine::errors::ColumnError;
use crate::ingest::weather_record::WeatherRecord;

pub const TIMESTAMP: &str = "Timestamp";
pub const DATE: &str = "Date";
pub const STATION: &str = "Station";
pub const TEMPERATURE: &str = "Temperature";
pub const HUMIDITY: &str = "Humidity";
pub const YEAR: &str = "Year";
pub const MONTH: &str = "Month";

/// Column layout of the weather dataset.
pub struct WeatherSchema;

impl WeatherSchema {
    /// Real-valued fields that can be scanned for extremes.
    pub const MEASUREMENTS: [&'static str; 2] = [TEMPERATURE, HUMIDITY];

    pub fn define(store: &mut ColumnStore) -> Result<(), ColumnError> {
        store.define_text(TIMESTAMP)?;
        store.define_text(DATE)?;
        store.define_categorical(STATION)?;
        store.define_real(TEMPERATURE)?;
        store.define_real(HUMIDITY)?;
        store.define_categorical(YEAR)?;
        store.define_categorical(MONTH)?;
        Ok(())
    }

    pub fn append(store: &mut ColumnStore, record: &WeatherRecord) -> Result<(), ColumnError> {
        store.append_text(TIMESTAMP, Some(record.timestamp.clone()))?;
        store.append_text(DATE, Some(record.calendar.date.clone()))?;
        store.append_category(STATION, non_empty(&record.station))?;
        store.append_real(TEMPERATURE, record.temperature)?;
        store.append_real(HUMIDITY, record.humidity)?;
        store.append_category(YEAR, Some(record.calendar.year.clone()))?;
        store.append_category(MONTH, Some(record.calendar.month.clone()))?;
        Ok(())
    }

    /// Fresh store holding `records` in order.
    pub fn load(records: &[WeatherRecord]) -> Result<ColumnStore, ColumnError> {
        let mut store = ColumnStore::new();
        Self::define(&mut store)?;
        for record in records {
            Self::append(&mut store, record)?;
        }
        info!(target: "col_db::ingest", rows = store.row_count(), "Column store populated");
        Ok(store)
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
