//! The interactive loop: prompt, load, browse, report, restart.

use crate::config::Config;
use crate::core::loader::load_data;
use crate::core::stats::{ReportStyle, print_all};
use crate::core::viewer::display_raw_data;
use crate::errors::AppResult;
use crate::models::{Filters, TripTable};
use crate::ui::messages;
use crate::ui::prompt::{LineSource, ask, get_filters};
use std::io::Write;
use tracing::{debug, info};

pub const NO_DATA: &str = "No data found for the selected filters.";

/// Raw-data viewer then every report, or the no-data notice for an empty table.
pub fn explore_table<S: LineSource, W: Write>(
    table: &TripTable,
    input: &mut S,
    out: &mut W,
    cfg: &Config,
) -> AppResult<()> {
    if table.is_empty() {
        messages::warning(out, NO_DATA)?;
        return Ok(());
    }

    display_raw_data(table, input, out, cfg.rows_per_page())?;
    print_all(table, out, &ReportStyle::from_config(cfg))
}

/// One full cycle for an already validated selection.
pub fn run_once<S: LineSource, W: Write>(
    filters: &Filters,
    input: &mut S,
    out: &mut W,
    cfg: &Config,
) -> AppResult<()> {
    let table = load_data(cfg, filters)?;
    debug!(rows = table.len(), "Table ready");
    explore_table(&table, input, out, cfg)
}

/// Repeats prompt -> load -> explore until the answer to the restart
/// question is anything but `yes`.
pub fn run<S: LineSource, W: Write>(input: &mut S, out: &mut W, cfg: &Config) -> AppResult<()> {
    let separator = cfg.separator_line();
    let mut iteration = 0usize;

    loop {
        iteration += 1;
        let filters = get_filters(input, out, &separator)?;
        info!(
            iteration,
            city = %filters.city,
            month = filters.month.label(),
            day = filters.day.label(),
            "Session iteration"
        );

        run_once(&filters, input, out, cfg)?;

        let restart = ask(
            input,
            out,
            "\nWould you like to restart? Enter yes or no: ",
        )?;
        if restart.as_deref() != Some("yes") {
            break;
        }
    }

    writeln!(out)?;
    Ok(())
}
