use super::{city::City, trip::Trip};
use crate::errors::{AppError, AppResult};
use crate::utils::time::{month_name, weekday_name};
use crate::utils::title_case;
use chrono::Weekday;
use serde::Serialize;
use std::fmt;

/// Months covered by the datasets, in calendar order.
pub const FILTER_MONTHS: [&str; 6] = ["January", "February", "March", "April", "May", "June"];

pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MonthFilter {
    All,
    /// Calendar month number, 1..=6
    Month(u32),
}

impl MonthFilter {
    pub fn from_input(s: &str) -> Option<Self> {
        let normalized = title_case(s);
        if normalized == "All" {
            return Some(MonthFilter::All);
        }
        FILTER_MONTHS
            .iter()
            .position(|m| *m == normalized)
            .map(|idx| MonthFilter::Month(idx as u32 + 1))
    }

    pub fn parse(s: &str) -> AppResult<Self> {
        Self::from_input(s).ok_or_else(|| AppError::InvalidMonth(s.to_string()))
    }

    pub fn matches(&self, month: u32) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Month(m) => *m == month,
        }
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str("All"),
            MonthFilter::Month(m) => f.write_str(month_name(*m).unwrap_or("?")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Day(Weekday),
}

impl DayFilter {
    pub fn from_input(s: &str) -> Option<Self> {
        let normalized = title_case(s);
        if normalized == "All" {
            return Some(DayFilter::All);
        }
        WEEKDAYS
            .into_iter()
            .find(|d| weekday_name(*d) == normalized)
            .map(DayFilter::Day)
    }

    pub fn parse(s: &str) -> AppResult<Self> {
        Self::from_input(s).ok_or_else(|| AppError::InvalidDay(s.to_string()))
    }

    pub fn matches(&self, day: Weekday) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Day(d) => *d == day,
        }
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str("All"),
            DayFilter::Day(d) => f.write_str(weekday_name(*d)),
        }
    }
}

/// The three answers collected before a report run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Filters {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl Filters {
    pub fn new(city: City, month: MonthFilter, day: DayFilter) -> Self {
        Self { city, month, day }
    }

    /// True when the trip falls in the selected month and weekday
    pub fn accepts(&self, trip: &Trip) -> bool {
        self.month.matches(trip.month()) && self.day.matches(trip.weekday())
    }
}

impl fmt::Display for Filters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "city={} month={} day={}",
            self.city, self.month, self.day
        )
    }
}
