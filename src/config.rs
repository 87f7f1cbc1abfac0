use crate::cli::Args;

/// Default log filter when neither `--log-filter` nor `RUST_LOG` is given.
pub const DEFAULT_LOG_FILTER: &str = "pretty_string=info";
/// Default log filter with `--verbose`.
pub const VERBOSE_LOG_FILTER: &str = "pretty_string=debug";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub log_filter: String,
    pub verbose:    bool,
    pub json:       bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            verbose:    false,
            json:       false,
        }
    }
}

impl From<&Args> for Config {
    fn from(a: &Args) -> Self {
        let log_filter = a.log_filter.clone().unwrap_or_else(|| {
            if a.verbose { VERBOSE_LOG_FILTER } else { DEFAULT_LOG_FILTER }.to_string()
        });
        Self {
            log_filter,
            verbose: a.verbose,
            json:    a.json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config_from(argv: &[&str]) -> Config {
        Config::from(&Args::try_parse_from(argv).unwrap())
    }

    #[test]
    fn verbose_raises_default_filter() {
        let cfg = config_from(&["pretty-string", "--verbose", "demo"]);
        // RUST_LOG from the test environment would take precedence.
        if std::env::var_os("RUST_LOG").is_none() {
            assert_eq!(cfg.log_filter, VERBOSE_LOG_FILTER);
        }
        assert!(cfg.verbose);
        assert!(!cfg.json);
    }

    #[test]
    fn explicit_filter_wins() {
        let cfg = config_from(&["pretty-string", "--log-filter", "warn", "--json", "demo"]);
        assert_eq!(cfg.log_filter, "warn");
        assert!(cfg.json);
    }
}
