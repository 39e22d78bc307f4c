use super::Report;
use crate::models::TripTable;
use crate::utils::formatting::secs2readable;
use serde::Serialize;
use std::io::{self, Write};

/// Total and mean trip duration, in seconds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationStats {
    pub total_seconds: f64,
    pub mean_seconds: f64,
}

impl Report for DurationStats {
    const TITLE: &'static str = "Calculating Trip Duration...";

    fn compute(table: &TripTable) -> Option<Self> {
        if table.is_empty() {
            return None;
        }
        let total: f64 = table.iter().map(|t| t.trip_duration).sum();
        Some(Self {
            total_seconds: total,
            mean_seconds: total / table.len() as f64,
        })
    }

    fn write_body<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Total travel time: {}", secs2readable(self.total_seconds))?;
        writeln!(out, "Mean travel time: {}", secs2readable(self.mean_seconds))
    }
}
