use crate::export::ReportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for bikeshare
#[derive(Parser)]
#[command(
    name = "bikeshare",
    version = env!("CARGO_PKG_VERSION"),
    about = "Explore bikeshare trip data for Chicago, New York City and Washington",
    long_about = None
)]
pub struct Cli {
    /// Override the directory holding the city CSV files
    #[arg(global = true, long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<String>,

    /// Without a subcommand the interactive session starts
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive session: choose filters, browse rows, read statistics
    Explore,

    /// Print every statistic for one selection without prompting
    Report {
        #[arg(long, help = "City: chicago, 'new york city' or washington")]
        city: String,

        #[arg(long, default_value = "all", help = "Month name or 'all'")]
        month: String,

        #[arg(long, default_value = "all", help = "Day name or 'all'")]
        day: String,

        #[arg(long, value_enum, default_value = "text")]
        format: ReportFormat,
    },

    /// Show the effective configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration as YAML")]
        print_config: bool,
    },

    /// Write the default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },
}
