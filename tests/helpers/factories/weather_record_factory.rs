use crate::ingest::{CalendarFields, WeatherRecord};

pub struct WeatherRecordFactory {
    timestamp: String,
    station: String,
    temperature: Option<f64>,
    humidity: Option<f64>,
}

impl WeatherRecordFactory {
    pub fn new() -> Self {
        Self {
            timestamp: "2003-01-01 00:00".to_string(),
            station: "Changi".to_string(),
            temperature: Some(25.0),
            humidity: Some(80.0),
        }
    }

    pub fn with_timestamp(mut self, timestamp: &str) -> Self {
        self.timestamp = timestamp.to_string();
        self
    }

    pub fn with_station(mut self, station: &str) -> Self {
        self.station = station.to_string();
        self
    }

    pub fn with_temperature(mut self, value: Option<f64>) -> Self {
        self.temperature = value;
        self
    }

    pub fn with_humidity(mut self, value: Option<f64>) -> Self {
        self.humidity = value;
        self
    }

    pub fn create(self) -> WeatherRecord {
        WeatherRecord {
            calendar: CalendarFields::from_timestamp(&self.timestamp)
                .expect("factory timestamp must parse"),
            timestamp: self.timestamp,
            station: self.station,
            temperature: self.temperature,
            humidity: self.humidity,
        }
    }
}
