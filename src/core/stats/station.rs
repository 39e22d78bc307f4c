use super::Report;
use super::mode::mode;
use crate::models::TripTable;
use serde::Serialize;
use std::io::{self, Write};

/// Most popular stations and trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationStats {
    pub start_station: String,
    pub end_station: String,
    pub trip: String,
}

impl Report for StationStats {
    const TITLE: &'static str = "Calculating The Most Popular Stations and Trip...";

    fn compute(table: &TripTable) -> Option<Self> {
        Some(Self {
            start_station: mode(table.iter().map(|t| t.start_station.as_str()))?.to_string(),
            end_station: mode(table.iter().map(|t| t.end_station.as_str()))?.to_string(),
            trip: mode(table.iter().map(|t| t.route()))?,
        })
    }

    fn write_body<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Most commonly used start station: {}", self.start_station)?;
        writeln!(out, "Most commonly used end station: {}", self.end_station)?;
        writeln!(out, "Most common trip: {}", self.trip)
    }
}
