//! Logger initialization

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used by `--verbose`: debug for this CLI and the HTTP client crate
const VERBOSE_FILTER: &str = "pnc=debug,pnc_client=debug,info";

const DEFAULT_FILTER: &str = "info";

/// Pick the log filter
///
/// `--verbose` overrides `RUST_LOG`; otherwise `RUST_LOG` applies when set.
pub fn filter_directives(verbose: bool, rust_log: Option<String>) -> String {
    if verbose {
        return VERBOSE_FILTER.to_string();
    }
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// Initialize logging to stderr
///
/// Stdout is reserved for command output.
pub fn init(verbose: bool) {
    let directives = filter_directives(verbose, std::env::var(EnvFilter::DEFAULT_ENV).ok());
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let initialized = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();

    if initialized.is_ok() && verbose {
        tracing::debug!("Log level set to DEBUG");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_overrides_rust_log() {
        assert_eq!(
            filter_directives(true, Some("warn".to_string())),
            VERBOSE_FILTER
        );
    }

    #[test]
    fn test_rust_log_used_when_not_verbose() {
        assert_eq!(filter_directives(false, Some("warn".to_string())), "warn");
        assert_eq!(filter_directives(false, Some("  ".to_string())), "info");
        assert_eq!(filter_directives(false, None), "info");
    }
}
