use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{bikeshare_in, data_dir_with_cities, scratch_dir};

#[test]
fn test_full_session_prints_every_report() {
    let dir = data_dir_with_cities("full_session");

    bikeshare_in(&dir)
        .write_stdin("chicago\nall\nall\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("Hello! Let's explore some bikeshare data!"))
        .stdout(contains(
            "Filters applied - City: 'chicago', Month: 'all', Day: 'all'",
        ))
        .stdout(contains("Most common month: June"))
        .stdout(contains("Most common day: Friday"))
        .stdout(contains("Most common start hour: 9 o'clock"))
        .stdout(contains(
            "Most commonly used start station: Theater on the Lake",
        ))
        .stdout(contains("Most commonly used end station: Wood St & Taylor St"))
        .stdout(contains(
            "Most common trip: Theater on the Lake -> Wood St & Taylor St",
        ))
        .stdout(contains("Total travel time: 1h 8m 18s"))
        .stdout(contains("Mean travel time: 0h 9m 45s"))
        .stdout(contains("Subscriber  6"))
        .stdout(contains("Customer    1"))
        .stdout(contains("Gender Distribution:"))
        .stdout(contains("Earliest birth year: 1981"))
        .stdout(contains("Most recent birth year: 1992"))
        .stdout(contains("Most common birth year: 1992"));
}

#[test]
fn test_city_without_demographics() {
    let dir = data_dir_with_cities("washington_session");

    bikeshare_in(&dir)
        .write_stdin("Washington\nall\nall\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("Total travel time: 0h 25m 28s"))
        .stdout(contains("No birth year data available."))
        .stdout(contains("Gender Distribution").not());
}

#[test]
fn test_invalid_filters_are_reprompted() {
    let dir = data_dir_with_cities("reprompt");

    let assert = bikeshare_in(&dir)
        .write_stdin("boston\nchicago\njune \nfunday\nMonday\nno\nno\n")
        .assert()
        .success()
        .stdout(contains(
            "Filters applied - City: 'chicago', Month: 'june', Day: 'monday'",
        ))
        .stdout(contains("Most common start hour: 9 o'clock"));

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert_eq!(stdout.matches("Input name of city").count(), 2);
    // "june " is trimmed and accepted
    assert_eq!(stdout.matches("Input month").count(), 1);
    assert_eq!(stdout.matches("Input day").count(), 2);
}

#[test]
fn test_empty_selection_then_restart() {
    let dir = data_dir_with_cities("empty_restart");

    let assert = bikeshare_in(&dir)
        .write_stdin("chicago\nfebruary\nall\nyes\nnew york city\nall\nall\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("No data found for the selected filters."))
        .stdout(contains(
            "Filters applied - City: 'new york city', Month: 'all', Day: 'all'",
        ))
        .stdout(contains("Earliest birth year: 1981"));

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert_eq!(
        stdout
            .matches("No data found for the selected filters.")
            .count(),
        1
    );
    // reports only for the second iteration
    assert_eq!(stdout.matches("Calculating Trip Duration...").count(), 1);
    assert_eq!(stdout.matches("Would you like to restart?").count(), 2);
}

#[test]
fn test_raw_data_pages_until_exhausted() {
    let dir = data_dir_with_cities("raw_pages");

    let assert = bikeshare_in(&dir)
        .write_stdin("chicago\nall\nall\nyes\nyes\nno\n")
        .assert()
        .success()
        .stdout(contains("Wood St & Hubbard St"))
        .stdout(contains("No more data to display."))
        .stdout(contains("Calculating User Stats..."));

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert_eq!(stdout.matches("Would you like to see 5 rows").count(), 2);
    assert!(stdout.contains("961916") || stdout.contains("2017-05-26 09:41:44"));
}

#[test]
fn test_any_other_restart_answer_ends() {
    let dir = data_dir_with_cities("restart_other");

    let assert = bikeshare_in(&dir)
        .write_stdin("washington\nall\nall\nno\nsure\nchicago\n")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert_eq!(stdout.matches("Input name of city").count(), 1);
}

#[test]
fn test_page_size_from_config() {
    let dir = data_dir_with_cities("page_size");
    fs::create_dir_all(dir.join(".bikeshare")).unwrap();
    fs::write(
        dir.join(".bikeshare").join("bikeshare.conf"),
        "page_size: 3\nshow_timing: false\n",
    )
    .unwrap();

    bikeshare_in(&dir)
        .write_stdin("chicago\nall\nall\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("Would you like to see 3 rows"))
        .stdout(contains("This took").not());
}

#[test]
fn test_missing_data_file_is_fatal() {
    let dir = scratch_dir("missing_file");

    bikeshare_in(&dir)
        .write_stdin("chicago\nall\nall\n")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Cannot open data file"));
}

#[test]
fn test_input_closed_while_choosing_filters() {
    let dir = data_dir_with_cities("input_closed");

    bikeshare_in(&dir)
        .write_stdin("chicago\n")
        .assert()
        .failure()
        .stderr(contains("Input closed"));
}
