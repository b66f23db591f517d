//! CSV loading for the city datasets.

use super::table::{Columns, TripTable};
use crate::errors::{AppError, AppResult};
use crate::models::trip::{Trip, TripRecord};
use crate::models::{City, Filters};
use crate::utils::time::parse_timestamp;
use csv::ReaderBuilder;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

const REQUIRED_COLUMNS: [&str; 5] = [
    "Start Time",
    "Trip Duration",
    "Start Station",
    "End Station",
    "User Type",
];

/// Load the dataset of `filters.city` from `data_dir` and apply the month and
/// day filters.
pub fn load_data(data_dir: &Path, filters: &Filters) -> AppResult<TripTable> {
    let table = load_city(data_dir, filters.city)?;
    Ok(table.filter(filters))
}

pub fn load_city(data_dir: &Path, city: City) -> AppResult<TripTable> {
    let path = city.dataset_path(data_dir);
    if !path.is_file() {
        return Err(AppError::DatasetNotFound(path));
    }

    let file = std::fs::File::open(&path)?;
    let table = load_table(file, &path.display().to_string())?;

    info!(city = %city, rows = table.len(), path = %path.display(), "dataset loaded");
    Ok(table)
}

/// Read a trip table from any CSV source. `source` names the input in
/// error messages.
pub fn load_table<R: Read>(reader: R, source: &str) -> AppResult<TripTable> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let has = |name: &str| headers.iter().any(|h| h == name);

    if let Some(missing) = REQUIRED_COLUMNS.into_iter().find(|c| !has(*c)) {
        return Err(AppError::MissingColumn {
            file: source.to_string(),
            column: missing.to_string(),
        });
    }

    let columns = Columns {
        gender: has("Gender"),
        birth_year: has("Birth Year"),
    };
    debug!(?columns, source, "dataset header read");

    let mut trips = Vec::new();
    for (idx, result) in rdr.deserialize::<TripRecord>().enumerate() {
        let record = result?;
        // header is line 1
        trips.push(into_trip(record, idx + 2)?);
    }

    Ok(TripTable::new(trips, columns))
}

fn into_trip(record: TripRecord, row: usize) -> AppResult<Trip> {
    let start_time =
        parse_timestamp(&record.start_time).ok_or_else(|| AppError::InvalidTimestamp {
            row,
            value: record.start_time.clone(),
        })?;

    Ok(Trip {
        start_time,
        duration: record.trip_duration,
        start_station: record.start_station,
        end_station: record.end_station,
        user_type: non_blank(record.user_type),
        gender: non_blank(record.gender),
        birth_year: record.birth_year.filter(|y| y.is_finite()),
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
