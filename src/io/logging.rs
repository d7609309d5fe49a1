//! Structured logging setup on top of `tracing`

use crate::io::error::{ReportError, Result};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Most verbose level that is emitted
    pub level: Level,
    /// Whether to include the module path of each event
    pub include_target: bool,
    /// Whether to use ANSI colors
    pub ansi_colors: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            include_target: false,
            ansi_colors: true,
        }
    }
}

impl LogConfig {
    /// Debug output including targets
    pub const fn verbose() -> Self {
        Self {
            level: Level::DEBUG,
            include_target: true,
            ansi_colors: true,
        }
    }

    /// Errors only
    pub const fn quiet() -> Self {
        Self {
            level: Level::ERROR,
            include_target: false,
            ansi_colors: true,
        }
    }

    /// Pick a configuration from the CLI verbosity flags; `quiet` wins
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            Self::quiet()
        } else if verbose {
            Self::verbose()
        } else {
            Self::default()
        }
    }
}

/// Install the global subscriber
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.level)
        .with_ansi(config.ansi_colors)
        .with_target(config.include_target)
        .with_writer(std::io::stderr)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).map_err(|e| ReportError::Logging {
        reason: e.to_string(),
    })
}
