//! Month / weekday selections used to narrow the trip table.

use crate::errors::{AppError, AppResult};
use crate::models::city::City;
use chrono::{Month, Weekday};

pub const MONTHS: [(&str, Month); 12] = [
    ("january", Month::January),
    ("february", Month::February),
    ("march", Month::March),
    ("april", Month::April),
    ("may", Month::May),
    ("june", Month::June),
    ("july", Month::July),
    ("august", Month::August),
    ("september", Month::September),
    ("october", Month::October),
    ("november", Month::November),
    ("december", Month::December),
];

pub const DAYS: [(&str, Weekday); 7] = [
    ("monday", Weekday::Mon),
    ("tuesday", Weekday::Tue),
    ("wednesday", Weekday::Wed),
    ("thursday", Weekday::Thu),
    ("friday", Weekday::Fri),
    ("saturday", Weekday::Sat),
    ("sunday", Weekday::Sun),
];

/// Either no restriction (`all`) or a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period<T> {
    All,
    Only(T),
}

impl<T: PartialEq> Period<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Period::All => true,
            Period::Only(wanted) => wanted == value,
        }
    }
}

impl Period<Month> {
    /// Accepts `all` or a full month name, case-insensitively.
    pub fn parse_month(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        if s == "all" {
            return Some(Period::All);
        }
        MONTHS
            .iter()
            .find(|(name, _)| *name == s)
            .map(|(_, m)| Period::Only(*m))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Period::All => "all",
            Period::Only(m) => month_name(*m),
        }
    }
}

impl Period<Weekday> {
    /// Accepts `all` or a full day name, case-insensitively.
    pub fn parse_day(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        if s == "all" {
            return Some(Period::All);
        }
        DAYS.iter()
            .find(|(name, _)| *name == s)
            .map(|(_, d)| Period::Only(*d))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Period::All => "all",
            Period::Only(d) => day_name(*d),
        }
    }
}

pub fn month_name(m: Month) -> &'static str {
    MONTHS[m.number_from_month() as usize - 1].0
}

pub fn day_name(d: Weekday) -> &'static str {
    DAYS[d.num_days_from_monday() as usize].0
}

/// A validated city / month / day selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Filters {
    pub city: City,
    pub month: Period<Month>,
    pub day: Period<Weekday>,
}

impl Filters {
    /// Builds filters from raw command-line values.
    pub fn parse(city: &str, month: &str, day: &str) -> AppResult<Self> {
        Ok(Self {
            city: city.parse()?,
            month: Period::<Month>::parse_month(month)
                .ok_or_else(|| AppError::InvalidMonth(month.to_string()))?,
            day: Period::<Weekday>::parse_day(day)
                .ok_or_else(|| AppError::InvalidDay(day.to_string()))?,
        })
    }
}
