use chrono::TimeDelta;
use clap::{Parser, Subcommand, ValueEnum};
use thiserror::Error;

/// Render durations and collections as human-readable strings.
/// Prints one formatted line per input to stdout; logs go to stderr.
#[derive(Parser, Debug)]
#[command(name = "pretty-string", author, version, about, long_about = None)]
pub struct Args {
    /// Enable verbose logging (debug level, with targets) to stderr.
    #[arg(short, long, global = true, action = clap::ArgAction::SetTrue)]
    pub verbose: bool,

    /// Log filter directive, e.g. "pretty_string=trace". Overrides --verbose.
    #[arg(long, global = true, env = "RUST_LOG", value_name = "FILTER")]
    pub log_filter: Option<String>,

    /// Emit one JSON object per result instead of plain text.
    #[arg(long, global = true, action = clap::ArgAction::SetTrue)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Format a single duration given as a decimal amount of some unit.
    Duration {
        /// Amount of time; may be negative and fractional.
        #[arg(allow_negative_numbers = true)]
        amount: f64,

        /// Unit of AMOUNT.
        #[arg(short, long, value_enum, default_value_t = TimeUnit::Ms)]
        unit: TimeUnit,
    },

    /// Print a reference table of formatted durations around the unit boundaries.
    Demo,

    /// Format the given items as a sequence, or as a set with --set.
    List {
        /// Items to format, in order.
        #[arg(allow_negative_numbers = true)]
        items: Vec<String>,

        /// Deduplicate and sort the items, and use set brackets.
        #[arg(long, action = clap::ArgAction::SetTrue)]
        set: bool,

        /// Opening delimiter (default "[" or "{" with --set).
        #[arg(long)]
        before: Option<String>,

        /// Separator between items.
        #[arg(long, default_value = ", ")]
        separator: String,

        /// Closing delimiter (default "]" or "}" with --set).
        #[arg(long)]
        after: Option<String>,
    },

    /// Format KEY=VALUE pairs as a mapping, in argument order.
    Map {
        /// Pairs to format.
        #[arg(value_name = "KEY=VALUE", value_parser = parse_pair)]
        pairs: Vec<(String, String)>,

        /// Opening delimiter.
        #[arg(long, default_value = "{")]
        before: String,

        /// Text placed between a key and its value.
        #[arg(long, default_value = ": ")]
        joiner: String,

        /// Separator between pairs.
        #[arg(long, default_value = ", ")]
        pair_separator: String,

        /// Closing delimiter.
        #[arg(long, default_value = "}")]
        after: String,
    },
}

/// Unit of a duration amount given on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Ns,
    Us,
    Ms,
    S,
    Min,
    H,
}

impl TimeUnit {
    pub fn nanos(self) -> i64 {
        match self {
            TimeUnit::Ns => 1,
            TimeUnit::Us => 1_000,
            TimeUnit::Ms => 1_000_000,
            TimeUnit::S => 1_000_000_000,
            TimeUnit::Min => 60_000_000_000,
            TimeUnit::H => 3_600_000_000_000,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            TimeUnit::Ns => "ns",
            TimeUnit::Us => "us",
            TimeUnit::Ms => "ms",
            TimeUnit::S => "s",
            TimeUnit::Min => "min",
            TimeUnit::H => "h",
        }
    }

    /// Converts `amount` of this unit to a `TimeDelta`, rounded to the nearest nanosecond.
    pub fn to_delta(self, amount: f64) -> Result<TimeDelta, CliError> {
        let nanos = (amount * self.nanos() as f64).round();
        // `i64::MAX as f64` rounds up to 2^63, so anything below it casts exactly.
        if !nanos.is_finite() || nanos.abs() >= i64::MAX as f64 {
            return Err(CliError::OutOfRange { amount, unit: self.suffix() });
        }
        Ok(TimeDelta::nanoseconds(nanos as i64))
    }
}

/// Errors in command line input that clap cannot catch on its own.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CliError {
    #[error("duration {amount}{unit} is not representable as a signed nanosecond count")]
    OutOfRange { amount: f64, unit: &'static str },
}

fn parse_pair(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("invalid KEY=VALUE: no `=` found in `{s}`"))
}

/// Parses command line arguments using clap.
pub fn parse_args() -> Args {
    Args::parse()
}
