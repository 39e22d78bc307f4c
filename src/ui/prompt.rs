//! Line-oriented prompting over any input source.

use crate::errors::{AppError, AppResult};
use crate::models::{City, Filters, Period};
use crate::ui::messages;
use chrono::{Month, Weekday};
use std::io::{self, BufRead, Write};

/// Something that yields one line of user input at a time.
pub trait LineSource {
    /// `Ok(None)` once the input is exhausted.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

impl<B: BufRead> LineSource for B {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf))
    }
}

/// Prints `question`, reads a line and returns it trimmed and lowercased.
pub fn ask<S: LineSource, W: Write>(
    input: &mut S,
    out: &mut W,
    question: &str,
) -> AppResult<Option<String>> {
    write!(out, "{question}")?;
    out.flush()?;
    Ok(input.next_line()?.map(|l| l.trim().to_lowercase()))
}

/// Asks until `accept` returns a value. End of input is an error.
pub fn ask_until<S, W, T, F>(
    input: &mut S,
    out: &mut W,
    question: &str,
    invalid: Option<&str>,
    accept: F,
) -> AppResult<T>
where
    S: LineSource,
    W: Write,
    F: Fn(&str) -> Option<T>,
{
    loop {
        let answer = ask(input, out, question)?.ok_or(AppError::InputClosed)?;
        if let Some(v) = accept(&answer) {
            return Ok(v);
        }
        if let Some(msg) = invalid {
            writeln!(out, "{msg}")?;
        }
    }
}

/// Collects a valid city, month and day.
pub fn get_filters<S: LineSource, W: Write>(
    input: &mut S,
    out: &mut W,
    separator: &str,
) -> AppResult<Filters> {
    writeln!(out, "Hello! Let's explore some bikeshare data!")?;

    let city = ask_until(
        input,
        out,
        &format!("Input name of city {}: ", City::names_list()),
        None,
        City::from_name,
    )?;
    let month = ask_until(
        input,
        out,
        "Input month (e.g., 'all', 'january', ... , 'december'): ",
        None,
        Period::<Month>::parse_month,
    )?;
    let day = ask_until(
        input,
        out,
        "Input day (e.g., 'all', 'monday', ... , 'sunday'): ",
        None,
        Period::<Weekday>::parse_day,
    )?;

    let filters = Filters { city, month, day };
    writeln!(out)?;
    messages::info(
        out,
        format!(
            "Filters applied - City: '{}', Month: '{}', Day: '{}'",
            filters.city,
            filters.month.label(),
            filters.day.label()
        ),
    )?;
    writeln!(out, "{separator}")?;
    Ok(filters)
}
