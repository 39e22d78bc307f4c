use crate::core::stats::StatsReport;
use crate::errors::AppResult;
use std::io::Write;

/// Writes the report as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(out: &mut W, report: &StatsReport) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::trip::fixtures::{table, trip};
    use crate::models::{City, Filters, Period};

    #[test]
    fn test_write_json_is_parseable() {
        let filters = Filters {
            city: City::NewYorkCity,
            month: Period::All,
            day: Period::All,
        };
        let t = table(vec![
            trip(0, "2017-01-02 08:00:00", 30.0, "A", "B"),
            trip(1, "2017-01-02 08:00:00", 30.0, "A", "B"),
        ]);
        let mut out = Vec::new();
        write_json(&mut out, &StatsReport::build(&filters, &t)).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with('\n'));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["city"], "new york city");
        assert_eq!(value["durations"]["mean_seconds"], 30.0);
        assert!(value["users"]["genders"].is_null());
    }
}
