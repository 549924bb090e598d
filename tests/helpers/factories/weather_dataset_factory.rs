use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::engine::core::store::ColumnStore;
use crate::ingest::{WeatherRecord, WeatherSchema, month_names};

use super::WeatherRecordFactory;

const SEED: u64 = 42;

/// Builds a multi-station, multi-year dataset with two readings per day and
/// at least one null temperature and humidity per month.
///
/// Both readings on the last day of each month share a peak above the random
/// range, so every station-month has a tied maximum when it spans two or more days.
pub struct WeatherDatasetFactory {
    stations: Vec<String>,
    years: Vec<u32>,
    days_per_month: u32,
}

impl WeatherDatasetFactory {
    pub fn new() -> Self {
        Self {
            stations: vec!["X".to_string(), "Y".to_string()],
            years: vec![2003, 2013],
            days_per_month: 3,
        }
    }

    pub fn with_stations(mut self, stations: &[&str]) -> Self {
        self.stations = stations.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_years(mut self, years: &[u32]) -> Self {
        self.years = years.to_vec();
        self
    }

    pub fn with_days_per_month(mut self, days: u32) -> Self {
        self.days_per_month = days.clamp(1, 28);
        self
    }

    pub fn records(&self) -> Vec<WeatherRecord> {
        let mut rng = StdRng::seed_from_u64(SEED);
        let months = month_names().len() as u32;
        let mut out = Vec::new();
        for year in &self.years {
            for month in 1..=months {
                for day in 1..=self.days_per_month {
                    for (s, station) in self.stations.iter().enumerate() {
                        for hour in [0u32, 12] {
                            // first reading of each month per station is all-null
                            let null_slot = day == 1 && hour == 0;
                            let peak = day == self.days_per_month;
                            // coarse values so ties are common
                            let temperature = (!null_slot).then(|| {
                                let base = if peak { 30.0 } else { 20.0 + rng.gen_range(0..10) as f64 };
                                base + s as f64
                            });
                            let humidity = (!null_slot).then(|| {
                                if peak { 85.0 } else { 60.0 + rng.gen_range(0..5) as f64 * 5.0 }
                            });
                            out.push(
                                WeatherRecordFactory::new()
                                    .with_timestamp(&format!(
                                        "{}-{:02}-{:02} {:02}:00",
                                        year, month, day, hour
                                    ))
                                    .with_station(station)
                                    .with_temperature(temperature)
                                    .with_humidity(humidity)
                                    .create(),
                            );
                        }
                    }
                }
            }
        }
        out
    }

    pub fn store(&self) -> ColumnStore {
        WeatherSchema::load(&self.records()).expect("factory dataset must load")
    }
}
