//! Unified application error type.
//! Loader, prompts, reporters and CLI commands all return AppError so the
//! binary has a single place (main) that turns failures into an exit code.

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
    // Data file errors
    // ---------------------------
    #[error("Cannot open data file {}: {source}", path.display())]
    DataFile { path: PathBuf, source: csv::Error },

    #[error("Malformed CSV in {}: {source}", path.display())]
    Csv { path: PathBuf, source: csv::Error },

    #[error("Missing column '{column}' in {}", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("Invalid timestamp '{value}' in {} at data row {row}", path.display())]
    InvalidTimestamp {
        path: PathBuf,
        row: usize,
        value: String,
    },

    // ---------------------------
    // Selection errors (command-line arguments)
    // ---------------------------
    #[error("Unknown city: {0}")]
    UnknownCity(String),

    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    #[error("Invalid day: {0}")]
    InvalidDay(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Output errors
    // ---------------------------
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
