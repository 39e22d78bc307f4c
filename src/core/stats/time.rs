use super::Report;
use super::mode::mode;
use crate::models::TripTable;
use crate::utils::formatting::title_case;
use serde::Serialize;
use std::io::{self, Write};

/// Most frequent times of travel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeStats {
    pub month: String,
    pub day: String,
    pub hour: u32,
}

impl Report for TimeStats {
    const TITLE: &'static str = "Calculating The Most Frequent Times of Travel...";

    fn compute(table: &TripTable) -> Option<Self> {
        Some(Self {
            month: mode(table.iter().map(|t| t.month_label()))?.to_string(),
            day: mode(table.iter().map(|t| t.day_label()))?.to_string(),
            hour: mode(table.iter().map(|t| t.hour))?,
        })
    }

    fn write_body<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Most common month: {}", title_case(&self.month))?;
        writeln!(out, "Most common day: {}", title_case(&self.day))?;
        writeln!(out, "Most common start hour: {} o'clock", self.hour)
    }
}
