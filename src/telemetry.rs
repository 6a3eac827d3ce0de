use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_LEVEL: &str = "warn";
pub const VERBOSE_LOG_LEVEL: &str = "debug";

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log level/filter '{value}': unable to build EnvFilter")]
    EnvFilter {
        value: String,
        #[source]
        source: ParseError,
    },
    #[error("telemetry error: {0}")]
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

/// Pick the filter directive: `--verbose` wins over the configured level,
/// which wins over the default. `RUST_LOG` overrides all of them in `init`.
pub fn log_directive(verbose: bool, configured: Option<&str>) -> &str {
    if verbose {
        VERBOSE_LOG_LEVEL
    } else {
        configured.unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

/// Install the global subscriber, writing compact events to stderr so
/// stdout stays clean for scores and tables.
pub fn init(directive: &str) -> Result<(), TelemetryError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(directive).map_err(|source| TelemetryError::EnvFilter {
            value: directive.to_string(),
            source,
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(TelemetryError::Subscriber)
}
