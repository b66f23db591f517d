//! Most popular stations and trips.

use super::counts::{ValueCount, value_counts};
use crate::data::TripTable;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct StationPair {
    pub start: String,
    pub end: String,
}

impl fmt::Display for StationPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StationStats {
    pub start_counts: Vec<ValueCount<String>>,
    pub end_counts: Vec<ValueCount<String>>,
    pub trip_counts: Vec<ValueCount<StationPair>>,
}

impl StationStats {
    pub fn most_common_start(&self) -> Option<&str> {
        self.start_counts.first().map(|vc| vc.value.as_str())
    }

    pub fn most_common_end(&self) -> Option<&str> {
        self.end_counts.first().map(|vc| vc.value.as_str())
    }

    pub fn most_common_trip(&self) -> Option<&StationPair> {
        self.trip_counts.first().map(|vc| &vc.value)
    }
}

fn named(station: &str) -> Option<String> {
    let trimmed = station.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Blank station cells are left out of every count; a trip missing either
/// end does not form a pair.
pub fn station_stats(table: &TripTable) -> StationStats {
    StationStats {
        start_counts: value_counts(table.iter().filter_map(|t| named(&t.start_station))),
        end_counts: value_counts(table.iter().filter_map(|t| named(&t.end_station))),
        trip_counts: value_counts(table.iter().filter_map(|t| {
            Some(StationPair {
                start: named(&t.start_station)?,
                end: named(&t.end_station)?,
            })
        })),
    }
}
