//! Browser launch collaborators.
//!
//! [`GuiLauncher`] performs the real launch. [`MarkerLauncher`] is the test
//! double selected when `AIDER_TEST_GUI=1`: it prints [`LAUNCH_MARKER`] and
//! returns without touching any display, port or child process.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use thiserror::Error;

/// Literal written to stdout by the stub launch. External harnesses match on it.
pub const LAUNCH_MARKER: &str = "launch_gui_called";

/// Default address of the browser front end.
pub const DEFAULT_GUI_URL: &str = "http://localhost:8501";

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("No graphical display available; cannot open {0}")]
    NoDisplay(String),
    #[error("GUI command not found: {command}")]
    CommandNotFound {
        command: String,
        #[source]
        source: which::Error,
    },
    #[error("Failed to spawn GUI command {}: {source}", .path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to open browser at {url}: {source}")]
    Browser {
        url: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write launch marker: {0}")]
    Marker(#[source] io::Error),
}

/// Capability to bring up the browser front end.
pub trait BrowserLauncher {
    fn launch(&mut self) -> Result<(), LaunchError>;
}

/// Real launcher: spawns a GUI program, or opens the GUI URL in the OS browser.
#[derive(Debug, Clone)]
pub struct GuiLauncher {
    url: String,
    command: Option<String>,
    display_available: bool,
}

impl GuiLauncher {
    /// Create a launcher for `url`, checking the real environment for a display.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            command: None,
            display_available: crate::display_detect::has_display(),
        }
    }

    /// Spawn `command` (resolved on `PATH`) instead of opening a browser.
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    /// Override display detection.
    pub fn with_display(mut self, available: bool) -> Self {
        self.display_available = available;
        self
    }

    fn spawn_command(&self, command: &str) -> Result<(), LaunchError> {
        let path = which::which(command).map_err(|source| LaunchError::CommandNotFound {
            command: command.to_string(),
            source,
        })?;

        let child = Command::new(&path)
            .arg(&self.url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| LaunchError::Spawn {
                path: path.clone(),
                source,
            })?;

        // The child owns its own lifetime from here on.
        tracing::info!(pid = child.id(), command = %path.display(), "Spawned GUI process");
        Ok(())
    }

    fn open_url(&self) -> Result<(), LaunchError> {
        if !self.display_available {
            return Err(LaunchError::NoDisplay(self.url.clone()));
        }
        webbrowser::open(&self.url).map_err(|source| LaunchError::Browser {
            url: self.url.clone(),
            source,
        })?;
        tracing::info!(url = %self.url, "Opened GUI in browser");
        Ok(())
    }
}

impl BrowserLauncher for GuiLauncher {
    fn launch(&mut self) -> Result<(), LaunchError> {
        match self.command.as_deref() {
            Some(command) => self.spawn_command(command),
            None => self.open_url(),
        }
    }
}

/// Stub launcher: writes [`LAUNCH_MARKER`] and a newline, then flushes.
#[derive(Debug)]
pub struct MarkerLauncher<W: Write> {
    out: W,
}

impl MarkerLauncher<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> MarkerLauncher<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> BrowserLauncher for MarkerLauncher<W> {
    fn launch(&mut self) -> Result<(), LaunchError> {
        writeln!(self.out, "{LAUNCH_MARKER}").map_err(LaunchError::Marker)?;
        self.out.flush().map_err(LaunchError::Marker)
    }
}
