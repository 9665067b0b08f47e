use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{ConfigError, LogFormat, LogLevel};

/// Initialize structured logging to stdout.
///
/// - `LogFormat::Json`: flattened JSON for log aggregation.
/// - `LogFormat::Text`: human-readable colored output.
///
/// Uses `RUST_LOG` if set, otherwise `level`. Fails if a global subscriber is already installed.
pub fn init_logging(level: LogLevel, format: LogFormat) -> Result<(), ConfigError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_ansi(false),
            )
            .try_init(),
        LogFormat::Text => registry.with(fmt::layer().pretty().with_target(true).with_ansi(true)).try_init(),
    };

    result.map_err(|e| ConfigError::Logging(e.to_string()))
}
