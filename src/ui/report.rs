//! Text rendering of the four report sections.
//!
//! Every section follows the same frame: a "Calculating ..." banner, the
//! computed lines, the optional elapsed time and a 40-dash separator.

use crate::config::Config;
use crate::core::calculator::ValueCount;
use crate::core::calculator::duration::{DurationStats, duration_stats};
use crate::core::calculator::station::{StationStats, station_stats};
use crate::core::calculator::time::{TimeStats, time_stats};
use crate::core::calculator::user::{ColumnStat, UserStats, user_stats};
use crate::data::TripTable;
use crate::errors::AppResult;
use crate::utils::colors::{self, Painter};
use crate::utils::formatting::separator;
use crate::utils::table::{Column, Table};
use std::fmt::Display;
use std::io::Write;
use std::time::Instant;

pub const NO_TRIPS: &str = "No trips match the selected filters.";
pub const NO_DEMOGRAPHICS: &str = "No Data For : Gender/Birth";

/// Options that shape the text output.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub show_timing: bool,
    pub max_listed_values: usize,
    pub paint: Painter,
}

impl From<&Config> for RenderOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            show_timing: cfg.show_timing,
            max_listed_values: cfg.max_listed_values,
            paint: Painter {
                enabled: colors::enabled(),
            },
        }
    }
}

/// Run all four reporters over `table`, writing each section to `out`.
pub fn print_report<W: Write>(out: &mut W, table: &TripTable, opts: RenderOptions) -> AppResult<()> {
    section(out, "Calculating The Most Frequent Times of Travel...", opts, table, |t| {
        render_time(&time_stats(t), opts)
    })?;
    section(out, "Calculating The Most Popular Stations and Trip...", opts, table, |t| {
        render_stations(&station_stats(t), opts)
    })?;
    section(out, "Calculating Trip Duration...", opts, table, |t| {
        render_duration(&duration_stats(t), opts)
    })?;
    section(out, "Calculating User Stats...", opts, table, |t| {
        render_users(&user_stats(t), opts)
    })?;
    Ok(())
}

fn section<W, F>(
    out: &mut W,
    banner: &str,
    opts: RenderOptions,
    table: &TripTable,
    body: F,
) -> AppResult<()>
where
    W: Write,
    F: FnOnce(&TripTable) -> String,
{
    writeln!(out, "\n{}\n", banner)?;
    let started = Instant::now();

    if table.is_empty() {
        writeln!(out, "{}", opts.paint.caution(NO_TRIPS))?;
    } else {
        write!(out, "{}", body(table))?;
    }

    if opts.show_timing {
        writeln!(
            out,
            "\nThis took {:.6} seconds.",
            started.elapsed().as_secs_f64()
        )?;
    }
    writeln!(out, "{}", separator())?;
    Ok(())
}

fn line(p: Painter, key: &str, v: impl Display) -> String {
    format!("{} : {}\n", p.label(key), p.value(v))
}

/// Trip durations are shown with two decimals.
fn seconds(v: f64) -> String {
    format!("{:.2}", v)
}

fn or_missing<T: Display>(p: Painter, v: Option<T>) -> String {
    v.map(|x| x.to_string()).unwrap_or_else(|| p.muted("--"))
}

pub fn render_time(stats: &TimeStats, opts: RenderOptions) -> String {
    let p = opts.paint;
    let month = stats
        .most_common_month
        .as_ref()
        .map(|m| format!("{} ({})", m.number, m.name));

    let mut s = String::new();
    s.push_str(&line(p, "The most common month is", or_missing(p, month)));
    s.push_str(&line(
        p,
        "The most common day of week is",
        or_missing(p, stats.most_common_day.as_deref()),
    ));
    s.push_str(&line(
        p,
        "The most common start hour is",
        or_missing(p, stats.most_common_hour),
    ));
    s
}

pub fn render_stations(stats: &StationStats, opts: RenderOptions) -> String {
    let p = opts.paint;
    let mut s = String::new();

    s.push_str(&line(
        p,
        "Most commonly used start station is",
        or_missing(p, stats.most_common_start()),
    ));
    s.push_str(&counts_table("Start Station", &stats.start_counts, opts));

    s.push('\n');
    s.push_str(&line(
        p,
        "Most commonly used end station is",
        or_missing(p, stats.most_common_end()),
    ));
    s.push_str(&counts_table("End Station", &stats.end_counts, opts));

    s.push('\n');
    let trip = stats
        .trip_counts
        .first()
        .map(|vc| format!("{} ({} trips)", vc.value, vc.count));
    s.push_str(&line(
        p,
        "Most frequent combination of start station and end station trip is",
        or_missing(p, trip),
    ));
    s
}

pub fn render_duration(stats: &DurationStats, opts: RenderOptions) -> String {
    let p = opts.paint;
    let mut s = String::new();
    s.push_str(&line(p, "Total travel time is", &stats.total_formatted));
    s.push_str(&line(
        p,
        "Total travel time in seconds is",
        format!("{} Seconds", stats.total_seconds),
    ));
    s.push('\n');
    s.push_str(&line(
        p,
        "Mean travel time is (Sec)",
        or_missing(p, stats.mean_seconds.map(seconds)),
    ));
    s.push_str(&line(
        p,
        "Shortest trip (Sec)",
        or_missing(p, stats.shortest_seconds.map(seconds)),
    ));
    s.push_str(&line(
        p,
        "Longest trip (Sec)",
        or_missing(p, stats.longest_seconds.map(seconds)),
    ));
    s
}

pub fn render_users(stats: &UserStats, opts: RenderOptions) -> String {
    let p = opts.paint;
    let mut s = String::new();

    s.push_str(&format!("{}\n", p.label("User Types :")));
    s.push_str(&counts_table("User Type", &stats.user_types, opts));

    if stats.gender.is_unavailable() && stats.birth_year.is_unavailable() {
        s.push_str(&format!("{}\n", p.caution(NO_DEMOGRAPHICS)));
        return s;
    }

    s.push_str(&format!("{}\n", p.label("Gender Stats :")));
    match &stats.gender {
        ColumnStat::Values(counts) => s.push_str(&counts_table("Gender", counts, opts)),
        _ => s.push_str(&format!("{}\n", p.caution("No Data For : Gender"))),
    }

    s.push('\n');
    match &stats.birth_year {
        ColumnStat::Values(years) => {
            s.push_str(&line(p, "Date Of Birth Of Oldest Users", years.earliest));
            s.push_str(&line(p, "Date Of Birth Of Youngest Users", years.latest));
            s.push_str(&line(p, "Most Common Year Of Birth", years.most_common));
        }
        _ => s.push_str(&format!("{}\n", p.caution("No Data For : Birth"))),
    }
    s
}

/// Value-count listing, truncated to `max_listed` rows.
pub fn counts_table<T: Display>(
    header: &str,
    counts: &[ValueCount<T>],
    opts: RenderOptions,
) -> String {
    let max_listed = opts.max_listed_values;
    let mut table = Table::new(vec![Column::left(header), Column::right("Trips")]);
    for vc in counts.iter().take(max_listed) {
        table.add_row(vec![vc.value.to_string(), vc.count.to_string()]);
    }

    let mut s = table.render();
    if counts.len() > max_listed {
        s.push_str(&format!(
            "  {}\n",
            opts.paint
                .muted(&format!("... and {} more", counts.len() - max_listed))
        ));
    }
    s
}
