use crate::core::calculator::duration::{DurationStats, duration_stats};
use crate::core::calculator::station::{StationStats, station_stats};
use crate::core::calculator::time::{TimeStats, time_stats};
use crate::core::calculator::user::{UserStats, user_stats};
use crate::data::TripTable;
use serde::Serialize;

/// All four statistics over one filtered table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripReport {
    pub trips: usize,
    pub time: TimeStats,
    pub stations: StationStats,
    pub duration: DurationStats,
    pub users: UserStats,
}

pub struct Core;

impl Core {
    pub fn build_report(table: &TripTable) -> TripReport {
        TripReport {
            trips: table.len(),
            time: time_stats(table),
            stations: station_stats(table),
            duration: duration_stats(table),
            users: user_stats(table),
        }
    }
}
