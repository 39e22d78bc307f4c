//! The four statistics reporters and the section layout they share.

pub mod duration;
pub mod mode;
pub mod station;
pub mod time;
pub mod user;

pub use duration::DurationStats;
pub use station::StationStats;
pub use time::TimeStats;
pub use user::UserStats;

use crate::config::Config;
use crate::errors::AppResult;
use crate::models::{City, Filters, TripTable};
use ansi_term::Colour;
use serde::Serialize;
use std::io::{self, Write};
use std::time::Instant;
use tracing::debug;

/// A statistic computed from the filtered table and printed as one section.
pub trait Report: Sized {
    const TITLE: &'static str;

    /// `None` when the table has no rows to aggregate.
    fn compute(table: &TripTable) -> Option<Self>;

    fn write_body<W: Write>(&self, out: &mut W) -> io::Result<()>;
}

/// Layout settings for report sections.
#[derive(Debug, Clone)]
pub struct ReportStyle {
    pub separator: String,
    pub show_timing: bool,
}

impl ReportStyle {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            separator: cfg.separator_line(),
            show_timing: cfg.show_timing,
        }
    }
}

/// Title, body, elapsed time, separator.
pub fn print_section<R: Report, W: Write>(
    table: &TripTable,
    out: &mut W,
    style: &ReportStyle,
) -> AppResult<Option<R>> {
    writeln!(out, "\n{}\n", Colour::Cyan.bold().paint(R::TITLE))?;
    let started = Instant::now();

    let stats = R::compute(table);
    if let Some(s) = &stats {
        s.write_body(out)?;
    }

    let elapsed = started.elapsed().as_secs_f64();
    debug!(section = R::TITLE, elapsed, "Report section computed");
    if style.show_timing {
        writeln!(out, "\nThis took {elapsed} seconds.")?;
    }
    writeln!(out, "{}", style.separator)?;
    Ok(stats)
}

/// Prints every report section for a non-empty table.
pub fn print_all<W: Write>(table: &TripTable, out: &mut W, style: &ReportStyle) -> AppResult<()> {
    print_section::<TimeStats, _>(table, out, style)?;
    print_section::<StationStats, _>(table, out, style)?;
    print_section::<DurationStats, _>(table, out, style)?;
    print_section::<UserStats, _>(table, out, style)?;
    Ok(())
}

/// Every statistic for one selection, as written by `report --format json`.
#[derive(Debug, Serialize)]
pub struct StatsReport {
    pub city: City,
    pub month: &'static str,
    pub day: &'static str,
    pub rows: usize,
    pub time: Option<TimeStats>,
    pub stations: Option<StationStats>,
    pub durations: Option<DurationStats>,
    pub users: Option<UserStats>,
}

impl StatsReport {
    pub fn build(filters: &Filters, table: &TripTable) -> Self {
        Self {
            city: filters.city,
            month: filters.month.label(),
            day: filters.day.label(),
            rows: table.len(),
            time: TimeStats::compute(table),
            stations: StationStats::compute(table),
            durations: DurationStats::compute(table),
            users: UserStats::compute(table),
        }
    }
}
