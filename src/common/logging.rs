use crate::common::error::ClonerError;
use crate::common::result::ClonerResult;
use tracing::Level;
use tracing_subscriber::EnvFilter;

const LOG_TARGET: &str = "gitlab_cloner";

/// Logging setup, built once at startup and handed to [`init_logging`].
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Level applied to this crate when `RUST_LOG` is not set
    pub level: Level,
    /// Emit ANSI colour codes
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            ansi: true,
        }
    }
}

impl LoggingConfig {
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.level = if verbose { Level::DEBUG } else { Level::INFO };
        self
    }

    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    /// Filter directive used when `RUST_LOG` is absent.
    pub fn default_directive(&self) -> String {
        format!("{}={}", LOG_TARGET, self.level.as_str().to_lowercase())
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.default_directive()))
    }
}

/// Install the global `tracing` subscriber.
///
/// Fails if a subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> ClonerResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_ansi(config.ansi)
        .with_target(false)
        .try_init()
        .map_err(|e| ClonerError::config_error(format!("Failed to initialize logging: {}", e)))
}
