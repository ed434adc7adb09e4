//! Logging setup shared by the binaries.

use std::str::FromStr;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";
pub const LOG_FORMAT_VAR: &str = "LOG_FORMAT";

/// Output format of log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per line, for CloudWatch
    #[default]
    Json,
    /// Human readable multi-line output, written to stderr
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" | "text" => Ok(LogFormat::Pretty),
            other => Err(format!("Unknown log format: {}", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogSettings {
    /// Default filter, used when `RUST_LOG` is not set
    pub level: String,
    pub format: LogFormat,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Json,
        }
    }
}

impl LogSettings {
    /// Read `LOG_LEVEL` and `LOG_FORMAT`, falling back to defaults
    pub fn from_env() -> Result<Self> {
        let mut settings = Self::default();
        if let Ok(level) = std::env::var(LOG_LEVEL_VAR) {
            settings.level = level;
        }
        if let Ok(format) = std::env::var(LOG_FORMAT_VAR) {
            settings.format = format.parse().map_err(anyhow::Error::msg)?;
        }
        Ok(settings)
    }

    /// Filter built from `level`, which may be any `EnvFilter` directive list.
    /// Falls back to `info` when the directives do not parse.
    fn default_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.level).unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

/// Install the global tracing subscriber
pub fn init_logging(settings: &LogSettings) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| settings.default_filter());

    let registry = tracing_subscriber::registry().with(filter);

    let initialized = match settings.format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_ansi(false)
                    .with_current_span(true)
                    .with_span_list(false)
                    .flatten_event(true),
            )
            .try_init(),
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_file(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };
    initialized.context("Failed to initialize logging")?;

    Ok(())
}
