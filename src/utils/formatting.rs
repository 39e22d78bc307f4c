//! Formatting utilities used by the reports and the raw-data table.

use unicode_width::UnicodeWidthStr;

/// Pads `s` with spaces up to `width` terminal columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", " ".repeat(width.saturating_sub(w)), s)
}

/// Splits a number of seconds into whole hours, minutes and seconds.
/// Fractions of a second are truncated; negative input counts as zero.
pub fn hours_mins_secs(seconds: f64) -> (u64, u64, u64) {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    };
    (total / 3600, (total % 3600) / 60, total % 60)
}

/// `1h 1m 1s`
pub fn secs2readable(seconds: f64) -> String {
    let (h, m, s) = hours_mins_secs(seconds);
    format!("{h}h {m}m {s}s")
}

/// Uppercases the first letter of every word: `new york city` -> `New York City`.
pub fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Whole values print without a decimal part (`776`), others as-is (`1406.4`).
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
