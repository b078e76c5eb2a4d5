//! Logging infrastructure for class model processing
//!
//! Structured logging uses the `tracing` crate. The library only emits
//! events; binaries call [`init_logging`] once at startup to install a
//! `tracing-subscriber` registry.
//!
//! # Usage
//!
//! ```rust,no_run
//! use classforge::core::logging::init_logging;
//!
//! // Initialize with default settings
//! init_logging(None, None).unwrap();
//! ```
//!
//! # Log Formats
//!
//! - `compact`: Single-line format, good for production
//! - `pretty`: Multi-line format with colors, good for development
//! - `json`: JSON format, good for log aggregation systems
//!
//! # Environment Variables
//!
//! - `CLASSFORGE_LOG_LEVEL`: Set log level (trace|debug|info|warn|error|off)
//! - `CLASSFORGE_LOG_FORMAT`: Set log format (compact|pretty|json)
//! - `RUST_LOG`: Alternative way to set log level (tracing-subscriber standard)
//!
//! # Filtering Logs
//!
//! ```bash
//! # Show every mutation applied to the model
//! RUST_LOG="classforge::model=debug" classforge run -i model.cfs
//!
//! # Trace per-class work in the diagram projector only
//! RUST_LOG="info,classforge::diagram=trace" classforge run -i model.cfs
//! ```

use std::str::FromStr;

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

const DEFAULT_LEVEL: &str = "info";
const DEFAULT_FORMAT: LogFormat = LogFormat::Compact;

/// Log format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact single-line format
    Compact,
    /// Pretty multi-line format with colors
    Pretty,
    /// JSON format for log aggregation
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!(
                "Unknown log format: {} (expected one of {})",
                s,
                LogFormat::variants().join(", ")
            )),
        }
    }
}

impl LogFormat {
    /// Get all valid format names
    pub fn variants() -> &'static [&'static str] {
        &["compact", "pretty", "json"]
    }

    /// Stderr layer for this format; only `compact` hides source locations
    fn layer(self) -> Box<dyn Layer<Registry> + Send + Sync> {
        let base = fmt::layer()
            .with_writer(std::io::stderr)
            .with_level(true);
        match self {
            LogFormat::Compact => base
                .with_target(false)
                .with_span_events(FmtSpan::NONE)
                .boxed(),
            LogFormat::Pretty => base
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_span_events(FmtSpan::ACTIVE)
                .pretty()
                .boxed(),
            LogFormat::Json => base
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_span_events(FmtSpan::ACTIVE)
                .json()
                .boxed(),
        }
    }
}

/// Level directive from the argument, then `CLASSFORGE_LOG_LEVEL`, then `RUST_LOG`
fn resolve_level(level: Option<&str>) -> String {
    level
        .map(str::to_string)
        .or_else(|| std::env::var("CLASSFORGE_LOG_LEVEL").ok())
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LEVEL.to_string())
}

fn resolve_format(format: Option<&str>) -> Result<LogFormat, String> {
    match format
        .map(str::to_string)
        .or_else(|| std::env::var("CLASSFORGE_LOG_FORMAT").ok())
    {
        Some(name) => LogFormat::from_str(&name),
        None => Ok(DEFAULT_FORMAT),
    }
}

/// An unparsable directive falls back to the default level
fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

/// Initialize the tracing subscriber with the given log level and format
///
/// * `level` - Optional log level or `EnvFilter` directive. If None, uses
///   `CLASSFORGE_LOG_LEVEL` or `RUST_LOG`, or defaults to `info`.
/// * `format` - Optional log format. If None, uses `CLASSFORGE_LOG_FORMAT`,
///   or defaults to `compact`.
///
/// Logs go to stderr so generated code on stdout stays clean. Returns an
/// error if the format is unknown or a global subscriber is already
/// installed.
pub fn init_logging(
    level: Option<&str>,
    format: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let format = resolve_format(format).map_err(|e| format!("Invalid log format: {}", e))?;
    let filter = build_filter(&resolve_level(level));

    Registry::default()
        .with(format.layer())
        .with(filter)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parsing() {
        assert_eq!(LogFormat::from_str("compact").unwrap(), LogFormat::Compact);
        assert_eq!(LogFormat::from_str("pretty").unwrap(), LogFormat::Pretty);
        assert_eq!(LogFormat::from_str("json").unwrap(), LogFormat::Json);
        assert_eq!(LogFormat::from_str("JSON").unwrap(), LogFormat::Json);
        assert!(LogFormat::from_str("xml").is_err());
    }

    #[test]
    fn test_explicit_arguments_win() {
        assert_eq!(resolve_level(Some("debug")), "debug");
        assert_eq!(resolve_format(Some("pretty")), Ok(LogFormat::Pretty));
        assert!(resolve_format(Some("xml")).unwrap_err().contains("compact, pretty, json"));
    }

    #[test]
    fn test_log_format_variants() {
        let variants = LogFormat::variants();
        assert_eq!(variants.len(), 3);
        assert!(variants.contains(&"pretty"));
    }
}
