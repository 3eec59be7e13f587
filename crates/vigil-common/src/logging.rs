//! Structured logging initialization for Vigil.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "vigil_pipeline=trace")
    pub level: String,
    /// Whether to emit compact single-line output instead of the default
    pub compact: bool,
    /// Whether to include target module information
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            compact: false,
            include_targets: true,
        }
    }
}

/// Initialize the tracing subscriber with the given configuration.
///
/// The `RUST_LOG` environment variable takes precedence over the configured
/// level. Calling this twice returns an error from the subscriber registry,
/// so embedders should initialize exactly once at startup.
pub fn init_logging(config: &LoggingConfig) -> crate::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    if config.compact {
        registry
            .with(fmt::layer().compact().with_target(config.include_targets))
            .try_init()
            .map_err(|e| crate::VigilError::config(format!("logging init failed: {e}")))?;
    } else {
        registry
            .with(fmt::layer().with_target(config.include_targets))
            .try_init()
            .map_err(|e| crate::VigilError::config(format!("logging init failed: {e}")))?;
    }

    Ok(())
}
