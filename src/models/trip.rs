use crate::errors::{AppError, AppResult};
use crate::models::period::{MONTHS, Period, day_name, month_name};
use crate::utils::date::parse_timestamp;
use chrono::{Datelike, Month, NaiveDateTime, Timelike, Weekday};
use serde::Deserialize;
use std::path::Path;

/// One CSV row as written in the city files. Unknown columns are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct RawTrip {
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "End Time", default)]
    pub end_time: Option<String>,
    #[serde(rename = "Trip Duration")]
    pub trip_duration: f64,
    #[serde(rename = "Start Station", default)]
    pub start_station: Option<String>,
    #[serde(rename = "End Station", default)]
    pub end_station: Option<String>,
    #[serde(rename = "User Type", default)]
    pub user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    pub birth_year: Option<f64>,
}

/// A single ride, with month / weekday / hour derived from the start time.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    /// 0-based position of the row in the source file.
    pub row: usize,
    pub start_time: NaiveDateTime,
    pub end_time: Option<String>,
    /// Seconds.
    pub trip_duration: f64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
    pub month: Month,
    pub day: Weekday,
    pub hour: u32,
}

impl Trip {
    pub fn new(
        row: usize,
        start_time: NaiveDateTime,
        trip_duration: f64,
        start_station: &str,
        end_station: &str,
    ) -> Self {
        let month = MONTHS[start_time.month0() as usize].1;
        Self {
            row,
            start_time,
            end_time: None,
            trip_duration,
            start_station: start_station.to_string(),
            end_station: end_station.to_string(),
            user_type: None,
            gender: None,
            birth_year: None,
            month,
            day: start_time.weekday(),
            hour: start_time.hour(),
        }
    }

    pub(crate) fn from_raw(path: &Path, row: usize, raw: RawTrip) -> AppResult<Self> {
        let start_time =
            parse_timestamp(&raw.start_time).ok_or_else(|| AppError::InvalidTimestamp {
                path: path.to_path_buf(),
                row,
                value: raw.start_time.clone(),
            })?;

        let mut trip = Trip::new(
            row,
            start_time,
            raw.trip_duration,
            raw.start_station.as_deref().unwrap_or(""),
            raw.end_station.as_deref().unwrap_or(""),
        );
        trip.end_time = raw.end_time;
        trip.user_type = raw.user_type.filter(|s| !s.trim().is_empty());
        trip.gender = raw.gender.filter(|s| !s.trim().is_empty());
        trip.birth_year = raw
            .birth_year
            .filter(|y| y.is_finite())
            .map(|y| y.trunc() as i32);
        Ok(trip)
    }

    pub fn month_label(&self) -> &'static str {
        month_name(self.month)
    }

    pub fn day_label(&self) -> &'static str {
        day_name(self.day)
    }

    /// `Start -> End`
    pub fn route(&self) -> String {
        format!("{} -> {}", self.start_station, self.end_station)
    }
}

/// Which optional columns the source file carried.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Schema {
    pub has_gender: bool,
    pub has_birth_year: bool,
}

/// The working table for one session iteration. Read-only once loaded.
#[derive(Debug, Clone, Default)]
pub struct TripTable {
    pub schema: Schema,
    pub trips: Vec<Trip>,
}

impl TripTable {
    pub fn new(schema: Schema, trips: Vec<Trip>) -> Self {
        Self { schema, trips }
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

    /// Keeps rows whose derived month and weekday match the selection.
    pub fn filter(self, month: Period<Month>, day: Period<Weekday>) -> Self {
        let trips = self
            .trips
            .into_iter()
            .filter(|t| month.matches(&t.month) && day.matches(&t.day))
            .collect();
        Self {
            schema: self.schema,
            trips,
        }
    }

    /// Rows `[start, start + size)`, clamped to the table length.
    pub fn page(&self, start: usize, size: usize) -> &[Trip] {
        let start = start.min(self.trips.len());
        let end = start.saturating_add(size).min(self.trips.len());
        &self.trips[start..end]
    }
}
