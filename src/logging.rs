//! Log setup. Logs go to stderr; stdout belongs to the screen.

use std::env;
use std::io;

use anyhow::{anyhow, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const DEFAULT_FILTER: &str = "warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable, one event per line.
    Pretty,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Some(Self::Pretty),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// `EnvFilter` directives, e.g. `order_entry=debug`.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Pretty,
            filter: DEFAULT_FILTER.to_owned(),
        }
    }
}

impl LoggingConfig {
    /// Reads `RUST_LOG` and `ORDER_ENTRY_LOG_FORMAT`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let format = env::var("ORDER_ENTRY_LOG_FORMAT")
            .ok()
            .and_then(|value| LogFormat::parse(&value))
            .unwrap_or(defaults.format);
        let filter = env::var("RUST_LOG")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(defaults.filter);
        Self { format, filter }
    }
}

pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_new(&config.filter)
        .map_err(|err| anyhow!("invalid log filter {:?}: {}", config.filter, err))?;

    let fmt_layer = match config.format {
        LogFormat::Pretty => fmt::layer()
            .with_writer(io::stderr)
            .with_target(true)
            .compact()
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(io::stderr)
            .with_current_span(true)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(env_filter))
        .try_init()
        .map_err(|err| anyhow!("failed to install log subscriber: {}", err))?;

    tracing::debug!(format = ?config.format, filter = %config.filter, "logging initialised");
    Ok(())
}
