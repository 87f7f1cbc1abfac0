//! Tracing initialization logic.

use crate::config::{Config, DEFAULT_LOG_FILTER};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Builds the filter from the configured directive, falling back to the
/// default when the directive does not parse.
pub fn build_filter(cfg: &Config) -> EnvFilter {
    EnvFilter::try_new(&cfg.log_filter).unwrap_or_else(|e| {
        eprintln!("Warning: Invalid log filter '{}': {e}", cfg.log_filter);
        EnvFilter::new(DEFAULT_LOG_FILTER)
    })
}

/// Initialize the global tracing subscriber (fmt layer on stderr + env filter).
pub fn init_tracing(cfg: &Config) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(cfg.verbose)
        .with_level(true);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(build_filter(cfg))
        .init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        // Use option_env! for git sha to avoid build errors outside git repo
        git_sha = option_env!("VERGEN_GIT_SHA_SHORT").unwrap_or("unknown"),
        build_ts = env!("VERGEN_BUILD_TIMESTAMP"),
        "pretty-string starting"
    );

    info!(verbose = cfg.verbose,
        json = cfg.json,
        log_filter = %cfg.log_filter,
        "Configuration loaded");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_filter_falls_back_to_default() {
        let cfg = Config {
            log_filter: "pretty_string=[".to_string(),
            ..Config::default()
        };
        assert_eq!(build_filter(&cfg).to_string(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn valid_filter_is_kept() {
        let cfg = Config {
            log_filter: "pretty_string=trace".to_string(),
            ..Config::default()
        };
        assert_eq!(build_filter(&cfg).to_string(), "pretty_string=trace");
    }
}
