use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::Deserialize;

/// One row of a city dataset, as it appears in the CSV file.
/// Unknown columns (including `End Time`) are ignored; blank cells become `None`.
#[derive(Debug, Clone, Deserialize)]
pub struct TripRecord {
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "Trip Duration")]
    pub trip_duration: f64,
    #[serde(rename = "Start Station")]
    pub start_station: String,
    #[serde(rename = "End Station")]
    pub end_station: String,
    #[serde(rename = "User Type", default)]
    pub user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    pub birth_year: Option<f64>,
}

/// A parsed trip. Month, weekday and hour are read off `start_time`
/// on demand so they always agree with it.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub start_time: NaiveDateTime,
    /// Seconds
    pub duration: f64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<f64>,
}

impl Trip {
    pub fn new(
        start_time: NaiveDateTime,
        duration: f64,
        start_station: &str,
        end_station: &str,
        user_type: Option<&str>,
    ) -> Self {
        Self {
            start_time,
            duration,
            start_station: start_station.to_string(),
            end_station: end_station.to_string(),
            user_type: user_type.map(str::to_string),
            gender: None,
            birth_year: None,
        }
    }

    pub fn with_demographics(mut self, gender: Option<&str>, birth_year: Option<f64>) -> Self {
        self.gender = gender.map(str::to_string);
        self.birth_year = birth_year;
        self
    }

    pub fn month(&self) -> u32 {
        self.start_time.month()
    }

    pub fn weekday(&self) -> Weekday {
        self.start_time.weekday()
    }

    pub fn hour(&self) -> u32 {
        self.start_time.hour()
    }
}
