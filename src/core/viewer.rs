//! Pages through the filtered table on request.

use crate::errors::AppResult;
use crate::models::{Trip, TripTable};
use crate::ui::prompt::{LineSource, ask};
use crate::utils::date::format_timestamp;
use crate::utils::formatting::format_number;
use crate::utils::table::{Column, Table};
use std::io::Write;

fn page_table(table: &TripTable, rows: &[Trip]) -> Table {
    let mut columns = vec![
        Column::right(""),
        Column::left("Start Time"),
        Column::left("End Time"),
        Column::right("Trip Duration"),
        Column::left("Start Station"),
        Column::left("End Station"),
        Column::left("User Type"),
    ];
    if table.schema.has_gender {
        columns.push(Column::left("Gender"));
    }
    if table.schema.has_birth_year {
        columns.push(Column::right("Birth Year"));
    }
    columns.push(Column::left("Month"));
    columns.push(Column::left("Day"));

    let mut t = Table::new(columns);
    for trip in rows {
        let mut row = vec![
            trip.row.to_string(),
            format_timestamp(&trip.start_time),
            trip.end_time.clone().unwrap_or_default(),
            format_number(trip.trip_duration),
            trip.start_station.clone(),
            trip.end_station.clone(),
            trip.user_type.clone().unwrap_or_default(),
        ];
        if table.schema.has_gender {
            row.push(trip.gender.clone().unwrap_or_default());
        }
        if table.schema.has_birth_year {
            row.push(trip.birth_year.map(|y| y.to_string()).unwrap_or_default());
        }
        row.push(trip.month_label().to_string());
        row.push(trip.day_label().to_string());
        t.add_row(row);
    }
    t
}

/// Shows `page_size` rows per `yes` until the table is exhausted or the user
/// answers `no`. Other answers re-prompt; end of input stops the viewer.
pub fn display_raw_data<S: LineSource, W: Write>(
    table: &TripTable,
    input: &mut S,
    out: &mut W,
    page_size: usize,
) -> AppResult<()> {
    let page_size = page_size.max(1);
    let mut cursor = 0;
    loop {
        let question = format!(
            "\nWould you like to see {page_size} rows of raw data? Enter yes or no: "
        );
        match ask(input, out, &question)?.as_deref() {
            Some("yes") => {
                let rows = table.page(cursor, page_size);
                write!(out, "{}", page_table(table, rows).render())?;
                cursor += page_size;
                if cursor >= table.len() {
                    writeln!(out, "\nNo more data to display.")?;
                    break;
                }
            }
            Some("no") | None => break,
            Some(_) => writeln!(out, "Invalid input. Please enter yes or no.")?,
        }
    }
    Ok(())
}
