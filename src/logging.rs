//! Subscriber setup for binaries embedding the controller.
//!
//! The library itself only emits `tracing` events. Call [`init_logging`]
//! once at startup to print them.

use crate::settings::LoggingSettings;
use std::env;
use thiserror::Error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    #[error("logging already initialized: {0}")]
    AlreadyInitialized(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Build the filter: `RUST_LOG` wins over the configured directive.
///
/// A `RUST_LOG` that is set but does not parse is an error rather than a
/// silent fallback.
pub fn env_filter(settings: &LoggingSettings) -> Result<EnvFilter, LoggingError> {
    let from_env = env::var(EnvFilter::DEFAULT_ENV).ok();
    filter_from(from_env.as_deref(), settings)
}

fn filter_from(
    from_env: Option<&str>,
    settings: &LoggingSettings,
) -> Result<EnvFilter, LoggingError> {
    let directives = from_env.unwrap_or(&settings.filter);
    Ok(EnvFilter::try_new(directives)?)
}

/// Install a compact console subscriber as the global default.
pub fn init_logging(settings: &LoggingSettings) -> Result<(), LoggingError> {
    let filter = env_filter(settings)?;

    let console_layer = fmt::layer()
        .compact()
        .with_target(false)
        .with_thread_names(true)
        .with_ansi(settings.ansi)
        .with_writer(std::io::stdout);

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer);
    tracing::subscriber::set_global_default(subscriber)?;

    tracing::info!("Logging initialized");
    Ok(())
}
