pub mod weather_dataset_factory;
pub mod weather_record_factory;

pub use weather_dataset_factory::WeatherDatasetFactory;
pub use weather_record_factory::WeatherRecordFactory;
