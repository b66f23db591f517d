//! Unified application error type.
//! Loader, calculators, prompts and CLI handlers all return AppError so the
//! binary has one place where failures are printed.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Input closed before a valid answer was given")]
    InputClosed,

    // ---------------------------
    // Dataset loading
    // ---------------------------
    #[error("Dataset file not found: {}", .0.display())]
    DatasetNotFound(PathBuf),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Dataset {file} is missing required column '{column}'")]
    MissingColumn { file: String, column: String },

    #[error("Invalid timestamp '{value}' at row {row}")]
    InvalidTimestamp { row: usize, value: String },

    // ---------------------------
    // Filter values
    // ---------------------------
    #[error("Invalid city: {0} (expected Chicago, New York or Washington)")]
    InvalidCity(String),

    #[error("Invalid month: {0} (expected January..June or All)")]
    InvalidMonth(String),

    #[error("Invalid day: {0} (expected a weekday name or All)")]
    InvalidDay(String),

    // ---------------------------
    // Config / serialization
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

pub type AppResult<T> = Result<T, AppError>;
