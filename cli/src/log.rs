use std::{fmt, io};

use clap::ValueEnum;
use tracing_subscriber::{fmt as format, prelude::*, EnvFilter};

#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub(crate) enum LogLevel {
    /// Completely disables logging
    Off,
    /// Only errors from the teams crates
    Error,
    /// Warnings and errors from the teams crates
    #[default]
    Warn,
    /// Info, warning and error messages from the teams crates
    Info,
    /// Debug messages from the teams crates, including every operation sent
    Debug,
    /// Trace, debug, info, warning and error messages from all dependencies
    Trace,
}

impl LogLevel {
    pub(crate) fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "teams=error,teams_api=error,off",
            LogLevel::Warn => "teams=warn,teams_api=warn,off",
            LogLevel::Info => "teams=info,teams_api=info,off",
            LogLevel::Debug => "teams=debug,teams_api=debug,off",
            LogLevel::Trace => "trace",
        }
    }
}

impl AsRef<str> for LogLevel {
    fn as_ref(&self) -> &str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub(crate) enum LogStyle {
    /// Pretty printed logs, spread over several lines
    Pretty,
    /// Standard text
    #[default]
    Text,
    /// JSON objects
    Json,
}

impl AsRef<str> for LogStyle {
    fn as_ref(&self) -> &str {
        match self {
            LogStyle::Pretty => "pretty",
            LogStyle::Text => "text",
            LogStyle::Json => "json",
        }
    }
}

impl fmt::Display for LogStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Installs the global subscriber. Logs go to stderr, stdout is reserved for command output.
///
/// `RUST_LOG` takes precedence over the level when set.
pub(crate) fn init(level: LogLevel, style: LogStyle) {
    let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) if !directives.is_empty() => EnvFilter::builder().parse_lossy(directives),
        _ => EnvFilter::builder().parse_lossy(level.as_filter_str()),
    };

    let registry = tracing_subscriber::registry().with(filter);

    match style {
        LogStyle::Pretty => registry.with(format::layer().pretty().with_writer(io::stderr)).init(),
        LogStyle::Text => registry.with(format::layer().with_writer(io::stderr)).init(),
        LogStyle::Json => registry.with(format::layer().json().with_writer(io::stderr)).init(),
    }
}
