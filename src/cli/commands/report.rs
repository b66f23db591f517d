use crate::cli::parser::{Commands, OutputFormat};
use crate::config::Config;
use crate::core::{Core, TripReport};
use crate::data::load_data;
use crate::errors::AppResult;
use crate::models::{City, DayFilter, Filters, MonthFilter};
use crate::ui::messages::info;
use crate::ui::report::{RenderOptions, print_report};
use serde::Serialize;
use std::io::{self, Write};

#[derive(Serialize)]
struct JsonReport<'a> {
    city: &'a str,
    month: String,
    day: String,
    #[serde(flatten)]
    report: TripReport,
}

/// Handle the `report` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        city,
        month,
        day,
        format,
    } = cmd
    {
        let filters = Filters::new(
            City::parse(city)?,
            MonthFilter::parse(month)?,
            DayFilter::parse(day)?,
        );

        let table = load_data(&cfg.data_path(), &filters)?;

        let stdout = io::stdout();
        let mut out = stdout.lock();

        match format {
            OutputFormat::Text => {
                info(format!("{} trips match {}", table.len(), filters));
                print_report(&mut out, &table, RenderOptions::from(cfg))?;
            }
            OutputFormat::Json => {
                let doc = JsonReport {
                    city: filters.city.name(),
                    month: filters.month.to_string(),
                    day: filters.day.to_string(),
                    report: Core::build_report(&table),
                };
                serde_json::to_writer_pretty(&mut out, &doc)?;
                writeln!(out)?;
            }
        }
    }
    Ok(())
}
