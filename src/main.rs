// Main application entry point.
// Parses arguments, initializes tracing, renders the requested values and
// writes them to stdout as plain lines or JSON objects.

use chrono::TimeDelta;
use serde::Serialize;
use std::collections::BTreeSet;
use std::io::{self, Write};
use std::process::exit;
use tracing::{debug, error};

use pretty_string::cli::{self, CliError, Command, TimeUnit};
use pretty_string::collection::{
    format_mapping_with, format_sequence_with, format_set_with, SEQUENCE_AFTER, SEQUENCE_BEFORE,
    SET_AFTER, SET_BEFORE,
};
use pretty_string::config::Config;
use pretty_string::duration::format_duration;
use pretty_string::{telemetry, util};

/// Durations shown by `demo`: the boundary cases around one millisecond plus
/// a few negative values in coarser units.
const DEMO_DURATIONS: &[(f64, TimeUnit)] = &[
    (0.0, TimeUnit::Ms),
    (0.1, TimeUnit::Ms),
    (0.994, TimeUnit::Ms),
    (0.995, TimeUnit::Ms),
    (1.0, TimeUnit::Ms),
    (1.004, TimeUnit::Ms),
    (1.005, TimeUnit::Ms),
    (-1.005, TimeUnit::Ms),
    (-1.85, TimeUnit::S),
    (-1.85, TimeUnit::H),
];

/// One formatted result.
#[derive(Debug, Serialize)]
struct Rendered {
    input:     String,
    formatted: String,
}

/// How plain-text results are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    /// Only the formatted string.
    Plain,
    /// Formatted string padded into a column, then the input.
    Table,
}

fn render_duration(delta: TimeDelta, input: String) -> Rendered {
    debug!(
        magnitude = %util::format_std_duration(delta.abs().to_std().unwrap_or_default()),
        negative = delta < TimeDelta::zero(),
        "Formatting duration"
    );
    Rendered {
        input,
        formatted: format_duration(delta),
    }
}

fn total_millis(delta: TimeDelta) -> String {
    match delta.num_nanoseconds() {
        Some(nanos) => (nanos as f64 / 1_000_000.0).to_string(),
        None => delta.num_milliseconds().to_string(),
    }
}

fn render(command: &Command) -> Result<(Layout, Vec<Rendered>), CliError> {
    match command {
        Command::Duration { amount, unit } => {
            let delta = unit.to_delta(*amount)?;
            let input = format!("{amount}{}", unit.suffix());
            Ok((Layout::Plain, vec![render_duration(delta, input)]))
        }
        Command::Demo => {
            let rows = DEMO_DURATIONS
                .iter()
                .map(|&(amount, unit)| {
                    unit.to_delta(amount)
                        .map(|delta| render_duration(delta, total_millis(delta)))
                })
                .collect::<Result<Vec<_>, CliError>>()?;
            Ok((Layout::Table, rows))
        }
        Command::List {
            items,
            set,
            before,
            separator,
            after,
        } => {
            let formatted = if *set {
                let unique: BTreeSet<&String> = items.iter().collect();
                debug!(items = items.len(), unique = unique.len(), "Formatting set");
                format_set_with(
                    unique,
                    before.as_deref().unwrap_or(SET_BEFORE),
                    separator,
                    after.as_deref().unwrap_or(SET_AFTER),
                )
            } else {
                debug!(items = items.len(), "Formatting sequence");
                format_sequence_with(
                    items,
                    before.as_deref().unwrap_or(SEQUENCE_BEFORE),
                    separator,
                    after.as_deref().unwrap_or(SEQUENCE_AFTER),
                )
            };
            Ok((
                Layout::Plain,
                vec![Rendered {
                    input: items.join(" "),
                    formatted,
                }],
            ))
        }
        Command::Map {
            pairs,
            before,
            joiner,
            pair_separator,
            after,
        } => {
            debug!(pairs = pairs.len(), "Formatting mapping");
            let formatted = format_mapping_with(
                pairs.iter().map(|(key, value)| (key, value)),
                before,
                joiner,
                pair_separator,
                after,
            );
            let input = pairs
                .iter()
                .map(|(key, value)| format!("{key}={value}"))
                .collect::<Vec<_>>()
                .join(" ");
            Ok((Layout::Plain, vec![Rendered { input, formatted }]))
        }
    }
}

fn emit(out: &mut impl Write, layout: Layout, rows: &[Rendered], json: bool) -> io::Result<()> {
    for row in rows {
        if json {
            serde_json::to_writer(&mut *out, row)?;
            writeln!(out)?;
        } else if layout == Layout::Table {
            writeln!(out, "{:<14} | {}", row.formatted, row.input)?;
        } else {
            writeln!(out, "{}", row.formatted)?;
        }
    }
    out.flush()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments using clap.
    let args = cli::parse_args();
    let cfg = Config::from(&args);
    telemetry::init_tracing(&cfg);

    let (layout, rows) = match render(&args.command) {
        Ok(rendered) => rendered,
        Err(e) => {
            error!(error = %e, "Invalid input");
            eprintln!("Error: {e}");
            exit(2);
        }
    };

    let mut stdout_locked = io::stdout().lock();
    emit(&mut stdout_locked, layout, &rows, cfg.json)?;
    Ok(())
}
