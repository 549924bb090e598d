pub mod calendar;
pub mod reader;
pub mod schema;
pub mod weather_record;

pub use calendar::{CalendarFields, month_names};
pub use reader::{IngestReport, read_weather, read_weather_csv};
pub use schema::WeatherSchema;
pub use weather_record::WeatherRecord;

#[cfg(test)]
mod weather_record_test;
