//! Human-readable strings for durations and collections.
//!
//! * [`duration`] renders signed durations with the coarsest unit that keeps
//!   three or four significant digits (`"1 milli"`, `"9.99 seconds"`,
//!   `"1 hour, 5 minutes"`).
//! * [`collection`] renders sequences, sets and mappings with configurable
//!   delimiters (`"[ 1, 2, 3 ]"`, `"{ 3: three }"`).
//!
//! Both are pure functions with no shared state.

pub mod cli;
pub mod collection;
pub mod config;
pub mod duration;
pub mod error;
pub mod telemetry;
pub mod util;

pub use collection::{
    format_collection, format_mapping, format_sequence, format_set, pretty, PairList, PrettyCollection,
};
pub use duration::{format_duration, pretty_duration, Elapsed, Nanos};
pub use error::{FormatError, Result};
