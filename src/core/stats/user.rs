use super::Report;
use super::mode::{mode, value_counts};
use crate::models::TripTable;
use crate::utils::formatting::{pad_left, pad_right};
use serde::Serialize;
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Count {
    pub value: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BirthYears {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

/// Rider demographics. `genders` is `None` when the file has no Gender column;
/// `birth_years` is `None` when there is no Birth Year column or no value in it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserStats {
    pub user_types: Vec<Count>,
    pub genders: Option<Vec<Count>>,
    pub birth_years: Option<BirthYears>,
}

fn counts<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Vec<Count> {
    value_counts(values.flatten())
        .into_iter()
        .map(|(value, count)| Count {
            value: value.to_string(),
            count,
        })
        .collect()
}

fn write_counts<W: Write>(out: &mut W, counts: &[Count]) -> io::Result<()> {
    let value_w = counts
        .iter()
        .map(|c| UnicodeWidthStr::width(c.value.as_str()))
        .max()
        .unwrap_or(0);
    let count_w = counts
        .iter()
        .map(|c| c.count.to_string().len())
        .max()
        .unwrap_or(0);

    for c in counts {
        writeln!(
            out,
            "  {}  {}",
            pad_right(&c.value, value_w),
            pad_left(&c.count.to_string(), count_w)
        )?;
    }
    Ok(())
}

impl Report for UserStats {
    const TITLE: &'static str = "Calculating User Stats...";

    fn compute(table: &TripTable) -> Option<Self> {
        if table.is_empty() {
            return None;
        }

        let genders = table
            .schema
            .has_gender
            .then(|| counts(table.iter().map(|t| t.gender.as_deref())));

        let birth_years = if table.schema.has_birth_year {
            let years: Vec<i32> = table.iter().filter_map(|t| t.birth_year).collect();
            match (years.iter().min(), years.iter().max(), mode(years.iter().copied())) {
                (Some(&earliest), Some(&most_recent), Some(most_common)) => Some(BirthYears {
                    earliest,
                    most_recent,
                    most_common,
                }),
                _ => None,
            }
        } else {
            None
        };

        Some(Self {
            user_types: counts(table.iter().map(|t| t.user_type.as_deref())),
            genders,
            birth_years,
        })
    }

    fn write_body<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "User Types:")?;
        write_counts(out, &self.user_types)?;

        if let Some(genders) = &self.genders {
            writeln!(out, "\nGender Distribution:")?;
            write_counts(out, genders)?;
        }

        match &self.birth_years {
            Some(b) => {
                writeln!(out, "\nEarliest birth year: {}", b.earliest)?;
                writeln!(out, "Most recent birth year: {}", b.most_recent)?;
                writeln!(out, "Most common birth year: {}", b.most_common)
            }
            None => writeln!(out, "\nNo birth year data available."),
        }
    }
}
