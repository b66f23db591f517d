use crate::errors::{AppError, AppResult};
use crate::utils::title_case;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum City {
    Chicago,
    NewYork,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYork, City::Washington];

    /// Display name, as typed at the prompt
    pub fn name(&self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYork => "New York",
            City::Washington => "Washington",
        }
    }

    /// Dataset file name inside the data directory
    pub fn file_name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYork => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    pub fn dataset_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(self.file_name())
    }

    /// Parse user input (any case, surrounding spaces ignored)
    pub fn from_input(s: &str) -> Option<Self> {
        let normalized = title_case(s);
        City::ALL.into_iter().find(|c| c.name() == normalized)
    }

    pub fn parse(s: &str) -> AppResult<Self> {
        Self::from_input(s).ok_or_else(|| AppError::InvalidCity(s.to_string()))
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
