use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::loader::load_data;
use crate::core::session::NO_DATA;
use crate::core::stats::{ReportStyle, StatsReport, print_all};
use crate::errors::AppResult;
use crate::export::{ReportFormat, write_json};
use crate::models::Filters;
use crate::ui::messages;
use std::io::{self, Write};

/// Handle the `report` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        city,
        month,
        day,
        format,
    } = cmd
    {
        let filters = Filters::parse(city, month, day)?;
        let table = load_data(cfg, &filters)?;
        let mut out = io::stdout().lock();

        match format {
            ReportFormat::Json => write_json(&mut out, &StatsReport::build(&filters, &table))?,
            ReportFormat::Text => {
                messages::info(
                    &mut out,
                    format!(
                        "City: '{}', Month: '{}', Day: '{}' ({} trips)",
                        filters.city,
                        filters.month.label(),
                        filters.day.label(),
                        table.len()
                    ),
                )?;
                if table.is_empty() {
                    messages::warning(&mut out, NO_DATA)?;
                } else {
                    print_all(&table, &mut out, &ReportStyle::from_config(cfg))?;
                }
            }
        }
        out.flush()?;
    }
    Ok(())
}
