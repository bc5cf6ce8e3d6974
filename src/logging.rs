use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::{AppConfig, LogRotation};

impl From<LogRotation> for Rotation {
    fn from(rotation: LogRotation) -> Self {
        match rotation {
            LogRotation::Hourly => Rotation::HOURLY,
            LogRotation::Daily => Rotation::DAILY,
            LogRotation::Never => Rotation::NEVER,
        }
    }
}

/// Directive used when `RUST_LOG` is unset. Request spans from
/// `TraceLayer` stay at info even when the app level is raised.
fn default_directive(log_level: &str) -> String {
    format!("{},tower_http=info", log_level)
}

/// Install the global subscriber.
///
/// Text mode writes to the log file and stdout, JSON mode to the file only.
/// The returned guard flushes the file writer on drop; hold it in `main`.
pub fn init_logging(config: &AppConfig) -> Result<WorkerGuard> {
    let file_appender = RollingFileAppender::builder()
        .rotation(config.rotation.into())
        .filename_prefix(&config.log_file)
        .build(&config.log_dir)
        .with_context(|| format!("Cannot open log directory {}", config.log_dir))?;

    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(&config.log_level)));

    let registry = tracing_subscriber::registry().with(filter);

    if config.use_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_writer(file_writer)
                    .with_ansi(false),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(file_writer)
                    .with_ansi(false),
            )
            .with(fmt::layer().with_target(false))
            .try_init()?;
    }

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_parses() {
        let directive = default_directive("debug");
        assert_eq!(directive, "debug,tower_http=info");
        assert!(EnvFilter::try_new(directive).is_ok());
    }

    #[test]
    fn test_rotation_mapping() {
        assert_eq!(Rotation::from(LogRotation::Hourly), Rotation::HOURLY);
        assert_eq!(Rotation::from(LogRotation::Never), Rotation::NEVER);
    }
}
