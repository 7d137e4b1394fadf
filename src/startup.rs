//! Logging initialization.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Logging settings resolved from the application configuration.
#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub console_output: bool,
    pub file_logging: bool,
    pub log_dir: String,
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            console_output: true,
            file_logging: false,
            log_dir: "logs".to_string(),
            level: "info".to_string(),
        }
    }
}

/// Guard that must be kept alive for the duration of the application.
///
/// Dropping it flushes and shuts down the non-blocking file writers.
pub struct LoggingGuard {
    _guards: Vec<WorkerGuard>,
}

/// Initialize the logging system.
///
/// Sets up a console layer (human-readable, ANSI) and an optional
/// daily-rolling `carga.log` file layer. `RUST_LOG` overrides the configured
/// level for both layers.
pub fn init_logging(
    config: &LoggingConfig,
) -> Result<LoggingGuard, Box<dyn std::error::Error>> {
    if config.file_logging {
        std::fs::create_dir_all(&config.log_dir)?;
    }

    let mut guards: Vec<WorkerGuard> = Vec::new();
    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();

    if config.console_output {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.level.clone()));
        let console_layer = fmt::layer()
            .with_target(true)
            .with_filter(filter);
        layers.push(Box::new(console_layer));
    }

    if config.file_logging {
        let appender = RollingFileAppender::new(Rotation::DAILY, &config.log_dir, "carga.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(appender);
        guards.push(guard);

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.level.clone()));
        let file_layer = fmt::layer()
            .with_writer(non_blocking)
            .with_target(true)
            .with_ansi(false)
            .with_filter(filter);
        layers.push(Box::new(file_layer));
    }

    tracing_subscriber::registry().with(layers).try_init()?;

    Ok(LoggingGuard { _guards: guards })
}
