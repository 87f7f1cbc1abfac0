//! Error types for the fallible collection formatting entry points.
//!
//! Duration formatting has no failure modes; only the `try_format_*`
//! collection functions, which accept possibly-absent arguments, return these.

use thiserror::Error;

/// Result type alias for formatting operations.
pub type Result<T> = std::result::Result<T, FormatError>;

/// Reasons a formatting call was rejected before any element was rendered.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// The collection (or mapping) argument itself was absent.
    #[error("missing collection: argument `{argument}` was not provided")]
    MissingCollection {
        /// Name of the absent argument.
        argument: &'static str,
    },

    /// A delimiter argument was absent. Names the first one in parameter order.
    #[error("missing delimiter: argument `{argument}` was not provided")]
    MissingDelimiter {
        /// Name of the absent argument.
        argument: &'static str,
    },
}

impl FormatError {
    /// Name of the argument that triggered the error.
    pub fn argument(&self) -> &'static str {
        match self {
            FormatError::MissingCollection { argument } | FormatError::MissingDelimiter { argument } => {
                argument
            }
        }
    }
}

/// Unwraps a required collection argument.
pub(crate) fn require_collection<T>(value: Option<T>, argument: &'static str) -> Result<T> {
    value.ok_or(FormatError::MissingCollection { argument })
}

/// Unwraps a required delimiter argument.
pub(crate) fn require_delimiter<'a>(value: Option<&'a str>, argument: &'static str) -> Result<&'a str> {
    value.ok_or(FormatError::MissingDelimiter { argument })
}
