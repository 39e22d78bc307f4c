use crate::errors::AppError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The cities with a bikeshare data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum City {
    #[serde(rename = "chicago")]
    Chicago,
    #[serde(rename = "new york city")]
    NewYorkCity,
    #[serde(rename = "washington")]
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Lowercase name as typed by the user.
    pub fn name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// File name of the city's trip data, relative to the data directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    /// Case-insensitive lookup; surrounding whitespace is ignored.
    pub fn from_name(s: &str) -> Option<Self> {
        let wanted = s.trim().to_lowercase();
        City::ALL.into_iter().find(|c| c.name() == wanted)
    }

    /// Names for prompts, e.g. `['chicago', 'new york city', 'washington']`.
    pub fn names_list() -> String {
        let names: Vec<String> = City::ALL
            .iter()
            .map(|c| format!("'{}'", c.name()))
            .collect();
        format!("[{}]", names.join(", "))
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for City {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        City::from_name(s).ok_or_else(|| AppError::UnknownCity(s.to_string()))
    }
}
