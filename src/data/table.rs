use crate::models::{Filters, Trip};
use tracing::debug;

/// Optional columns a dataset may or may not carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Columns {
    pub gender: bool,
    pub birth_year: bool,
}

impl Columns {
    pub fn all() -> Self {
        Self {
            gender: true,
            birth_year: true,
        }
    }
}

/// In-memory trip table for one city. Filtering returns a new table and
/// leaves the source untouched.
#[derive(Debug, Clone, Default)]
pub struct TripTable {
    trips: Vec<Trip>,
    columns: Columns,
}

impl TripTable {
    pub fn new(trips: Vec<Trip>, columns: Columns) -> Self {
        Self { trips, columns }
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn columns(&self) -> Columns {
        self.columns
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trip> {
        self.trips.iter()
    }

    /// Keep only the trips matching the month and weekday filters.
    pub fn filter(&self, filters: &Filters) -> TripTable {
        let trips: Vec<Trip> = self
            .trips
            .iter()
            .filter(|t| filters.accepts(t))
            .cloned()
            .collect();

        debug!(
            kept = trips.len(),
            total = self.trips.len(),
            %filters,
            "filtered trip table"
        );

        TripTable {
            trips,
            columns: self.columns,
        }
    }
}

impl<'a> IntoIterator for &'a TripTable {
    type Item = &'a Trip;
    type IntoIter = std::slice::Iter<'a, Trip>;

    fn into_iter(self) -> Self::IntoIter {
        self.trips.iter()
    }
}
