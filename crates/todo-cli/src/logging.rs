//! Subscriber setup. Logs go to stderr so stdout stays parseable.

use todo_config::{LogConfig, LogFormat};
use tracing_subscriber::EnvFilter;

/// Env var holding a full `EnvFilter` directive; wins over every flag.
pub const LOG_FILTER_ENV: &str = "TODO_LOG_FILTER";

/// Filter directive used when `TODO_LOG_FILTER` is unset.
#[must_use]
pub fn default_directive(config: &LogConfig, quiet: bool, verbose: bool) -> String {
    if quiet {
        "error".to_string()
    } else if verbose {
        "debug".to_string()
    } else {
        config.level.clone()
    }
}

pub fn init_tracing(config: &LogConfig, quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .or_else(|_| EnvFilter::try_new(default_directive(config, quiet, verbose)))
        .map_err(|error| anyhow::anyhow!("invalid log filter: {error}"))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = match config.format {
        LogFormat::Json => builder.json().with_current_span(true).try_init(),
        LogFormat::Text => builder.with_target(false).try_init(),
    };
    installed.map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))
}
