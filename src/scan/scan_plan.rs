use crate::engine::errors::PlanError;
use crate::engine::query::QueryPredicates;
use crate::ingest::month_names;
use crate::ingest::schema::{MONTH, STATION, WeatherSchema, YEAR};

pub const EVEN_STATION: &str = "Changi";
pub const ODD_STATION: &str = "Paya Lebar";
pub const FIRST_YEAR: u32 = 2002;
pub const LAST_YEAR: u32 = 2021;

/// Which station, years, months and measurements a scan covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanPlan {
    pub station: String,
    pub years: Vec<String>,
    pub months: Vec<String>,
    pub fields: Vec<String>,
}

impl ScanPlan {
    /// Every month of `years` for `station`, scanning all measurements.
    pub fn new(station: impl Into<String>, years: &[u32]) -> Self {
        Self {
            station: station.into(),
            years: years.iter().map(u32::to_string).collect(),
            months: month_names(),
            fields: WeatherSchema::MEASUREMENTS
                .iter()
                .map(|f| f.to_string())
                .collect(),
        }
    }

    /// Derives the plan from a matriculation number such as `U1922129K`.
    ///
    /// The digit two places before the trailing check character picks the
    /// station (even: Changi, odd: Paya Lebar). The digit just before it picks
    /// every year in 2002..=2021 ending in that digit.
    pub fn from_matriculation(matric: &str) -> Result<Self, PlanError> {
        let chars: Vec<char> = matric.trim().chars().collect();
        if chars.len() < 3 {
            return Err(PlanError::TooShort(matric.to_string()));
        }
        let digit_at = |index: usize| {
            chars[index]
                .to_digit(10)
                .ok_or_else(|| PlanError::NotADigit {
                    matric: matric.to_string(),
                    index,
                    found: chars[index],
                })
        };
        let station_digit = digit_at(chars.len() - 3)?;
        let year_digit = digit_at(chars.len() - 2)?;

        let station = if station_digit % 2 == 0 {
            EVEN_STATION
        } else {
            ODD_STATION
        };
        let years: Vec<u32> = (FIRST_YEAR..=LAST_YEAR)
            .filter(|y| y % 10 == year_digit)
            .collect();
        Ok(Self::new(station, &years))
    }

    pub fn predicates(&self, year: &str, month: &str) -> QueryPredicates {
        QueryPredicates::new()
            .with(STATION, self.station.as_str())
            .with(YEAR, year)
            .with(MONTH, month)
    }
}
