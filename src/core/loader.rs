//! Reads a city's trip file into a [`TripTable`] and applies the filters.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::trip::RawTrip;
use crate::models::{Filters, Schema, Trip, TripTable};
use csv::{ReaderBuilder, Trim};
use std::path::Path;
use tracing::{debug, info};

const REQUIRED_COLUMNS: [&str; 5] = [
    "Start Time",
    "Trip Duration",
    "Start Station",
    "End Station",
    "User Type",
];

/// Loads every row of the file at `path`.
///
/// # Errors
///
/// Fails when the file cannot be opened, a required column is missing, or a
/// row cannot be parsed. Nothing is skipped.
pub fn read_trips(path: &Path) -> AppResult<TripTable> {
    let mut rdr = ReaderBuilder::new()
        .trim(Trim::Headers)
        .from_path(path)
        .map_err(|source| AppError::DataFile {
            path: path.to_path_buf(),
            source,
        })?;

    let headers = rdr
        .headers()
        .map_err(|source| AppError::Csv {
            path: path.to_path_buf(),
            source,
        })?
        .clone();

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(AppError::MissingColumn {
                path: path.to_path_buf(),
                column,
            });
        }
    }

    let schema = Schema {
        has_gender: headers.iter().any(|h| h == "Gender"),
        has_birth_year: headers.iter().any(|h| h == "Birth Year"),
    };

    let mut trips = Vec::new();
    for (row, record) in rdr.deserialize::<RawTrip>().enumerate() {
        let raw = record.map_err(|source| AppError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        trips.push(Trip::from_raw(path, row, raw)?);
    }

    info!(path = %path.display(), rows = trips.len(), ?schema, "Trip data loaded");
    Ok(TripTable::new(schema, trips))
}

/// Loads the selected city's file and keeps rows matching month and day.
pub fn load_data(cfg: &Config, filters: &Filters) -> AppResult<TripTable> {
    let path = cfg.data_path(filters.city);
    let table = read_trips(&path)?;
    let total = table.len();

    let filtered = table.filter(filters.month, filters.day);
    debug!(
        city = %filters.city,
        month = filters.month.label(),
        day = filters.day.label(),
        total,
        kept = filtered.len(),
        "Filters applied"
    );
    Ok(filtered)
}
