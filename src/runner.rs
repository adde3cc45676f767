//! Application Runner Module
//!
//! Shared runtime configuration and logging setup for the launcher.

use std::fs::File;
use std::path::Path;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::StartupFlags;

/// Shared application configuration.
///
/// Routing flags (`--browser`) are handled by the dispatcher; this carries
/// only the options that shape the runtime around it.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Enable debug logging
    pub debug: bool,
    /// Enable verbose (trace-level) logging
    pub verbose: bool,
}

impl From<&StartupFlags> for AppConfig {
    fn from(flags: &StartupFlags) -> Self {
        AppConfig {
            debug: flags.debug,
            verbose: flags.verbose,
        }
    }
}

impl AppConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    pub fn default_filter(&self) -> &'static str {
        if self.verbose {
            "trace"
        } else if self.debug {
            "debug"
        } else {
            "warn,aider_launcher=info"
        }
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.default_filter()))
    }
}

/// Log to stderr. Used for browser modes, where stdout carries the marker.
pub fn init_stderr_logging(config: &AppConfig) {
    let _ = tracing_subscriber::registry()
        .with(config.env_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .try_init();
}

/// Log to `path` so the terminal loop owns the screen.
///
/// Falls back to stderr when the file cannot be created.
pub fn init_file_logging(config: &AppConfig, path: &Path) {
    let file = path
        .parent()
        .map_or(Ok(()), std::fs::create_dir_all)
        .and_then(|()| File::create(path));

    match file {
        Ok(file) => {
            let _ = tracing_subscriber::registry()
                .with(config.env_filter())
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(true)
                        .with_ansi(false)
                        .with_writer(std::sync::Mutex::new(file)),
                )
                .try_init();
        }
        Err(e) => {
            init_stderr_logging(config);
            tracing::warn!("Could not create log file {}: {}", path.display(), e);
        }
    }
}
