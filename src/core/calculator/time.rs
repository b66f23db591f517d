//! Most frequent times of travel.

use super::counts::mode;
use crate::data::TripTable;
use crate::utils::time::{month_name, weekday_name};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommonMonth {
    pub number: u32,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TimeStats {
    pub most_common_month: Option<CommonMonth>,
    pub most_common_day: Option<String>,
    pub most_common_hour: Option<u32>,
}

pub fn time_stats(table: &TripTable) -> TimeStats {
    let most_common_month = mode(table.iter().map(|t| t.month())).map(|number| CommonMonth {
        number,
        name: month_name(number).unwrap_or_default().to_string(),
    });

    // ties go to the alphabetically first day name
    let most_common_day = mode(table.iter().map(|t| weekday_name(t.weekday()))).map(str::to_string);

    let most_common_hour = mode(table.iter().map(|t| t.hour()));

    TimeStats {
        most_common_month,
        most_common_day,
        most_common_hour,
    }
}
