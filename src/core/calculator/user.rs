//! User type, gender and birth year breakdown.

use super::counts::{ValueCount, mode, value_counts};
use crate::data::TripTable;
use serde::Serialize;

/// Outcome for a column some datasets do not have.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum ColumnStat<T> {
    /// The dataset has no such column
    Unavailable,
    /// The column exists but no row in the table has a value
    NoValues,
    Values(T),
}

impl<T> ColumnStat<T> {
    pub fn values(&self) -> Option<&T> {
        match self {
            ColumnStat::Values(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, ColumnStat::Unavailable)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub latest: i32,
    pub most_common: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserStats {
    pub user_types: Vec<ValueCount<String>>,
    pub gender: ColumnStat<Vec<ValueCount<String>>>,
    pub birth_year: ColumnStat<BirthYearStats>,
}

pub fn user_stats(table: &TripTable) -> UserStats {
    let columns = table.columns();

    let user_types = value_counts(table.iter().filter_map(|t| t.user_type.clone()));

    let gender = if !columns.gender {
        ColumnStat::Unavailable
    } else {
        let counts = value_counts(table.iter().filter_map(|t| t.gender.clone()));
        if counts.is_empty() {
            ColumnStat::NoValues
        } else {
            ColumnStat::Values(counts)
        }
    };

    let birth_year = if !columns.birth_year {
        ColumnStat::Unavailable
    } else {
        let years: Vec<i32> = table
            .iter()
            .filter_map(|t| t.birth_year)
            .map(|y| y.trunc() as i32)
            .collect();
        match birth_year_stats(&years) {
            Some(stats) => ColumnStat::Values(stats),
            None => ColumnStat::NoValues,
        }
    };

    UserStats {
        user_types,
        gender,
        birth_year,
    }
}

fn birth_year_stats(years: &[i32]) -> Option<BirthYearStats> {
    Some(BirthYearStats {
        earliest: *years.iter().min()?,
        latest: *years.iter().max()?,
        most_common: mode(years.iter().copied())?,
    })
}
