use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for bikeshare
#[derive(Parser, Debug)]
#[command(
    name = "bikeshare",
    version = env!("CARGO_PKG_VERSION"),
    about = "Explore US bike-share data: busiest times, popular stations, trip durations and users",
    long_about = None
)]
pub struct Cli {
    /// Directory holding chicago.csv, new_york_city.csv and washington.csv
    /// (overrides `data_dir` from the configuration file)
    #[arg(global = true, long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<String>,

    /// Log filter for diagnostics on stderr (e.g. "debug", "bikeshare=trace")
    #[arg(global = true, long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Hide the per-section "This took N seconds." lines
    #[arg(global = true, long = "no-timing")]
    pub no_timing: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ask for city, month and day, print the report, and offer to restart (default)
    Explore,

    /// Print the report for the given filters without prompting
    Report {
        /// City: Chicago, "New York" or Washington
        #[arg(long)]
        city: String,

        /// Month: January..June, or All
        #[arg(long, default_value = "All")]
        month: String,

        /// Day of week: Monday..Sunday, or All
        #[arg(long, default_value = "All")]
        day: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show the configuration file
    Config {
        /// Print the effective configuration as YAML
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Write the default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, short = 'f')]
        force: bool,
    },
}
