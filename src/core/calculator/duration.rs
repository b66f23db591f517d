//! Total and average trip duration.

use crate::data::TripTable;
use crate::utils::format_timedelta;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DurationStats {
    pub trip_count: usize,
    pub total_seconds: f64,
    /// Whole seconds of the total as `[D day(s), ]H:MM:SS`
    pub total_formatted: String,
    pub mean_seconds: Option<f64>,
    pub shortest_seconds: Option<f64>,
    pub longest_seconds: Option<f64>,
}

pub fn duration_stats(table: &TripTable) -> DurationStats {
    let durations: Vec<f64> = table.iter().map(|t| t.duration).collect();

    let trip_count = durations.len();
    let total_seconds: f64 = durations.iter().sum();
    let mean_seconds = (trip_count > 0).then(|| total_seconds / trip_count as f64);

    let shortest_seconds = durations.iter().copied().reduce(f64::min);
    let longest_seconds = durations.iter().copied().reduce(f64::max);

    DurationStats {
        trip_count,
        total_seconds,
        total_formatted: format_timedelta(total_seconds.trunc() as i64),
        mean_seconds,
        shortest_seconds,
        longest_seconds,
    }
}
