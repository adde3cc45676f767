//! Mode dispatcher: owns the process lifecycle from argv to exit code.
//!
//! ```text
//! Start -> FlagsParsed -> DecisionMade -> TerminalRunning  -> Exited
//!                                      -> BrowserLaunching -> Exited
//!                                      -> StubEmitted      -> Exited
//! ```
//!
//! Nothing here retries. A bad flag or a failed launch is reported once on
//! stderr and turns into a non-zero exit code.

use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use thiserror::Error;

use crate::cli::{parse_flags, StartupFlags, StdioRepl, TerminalLoop, TerminalSession};
use crate::config::XdgDirs;
use crate::display_detect::has_display_with;
use crate::launch::{
    decide, BrowserLauncher, GuiLauncher, LaunchDecision, LaunchError, MarkerLauncher,
    TestModeSignal,
};
use crate::runner::{init_file_logging, init_stderr_logging, AppConfig};

/// Exit code for malformed or unknown command-line input.
pub const EXIT_INVALID_ARGUMENT: u8 = 2;
/// Exit code when the real browser/GUI launch fails.
pub const EXIT_LAUNCH_FAILURE: u8 = 3;
/// Exit code when the terminal loop fails with an error.
pub const EXIT_TERMINAL_ERROR: u8 = 1;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[source] clap::Error),
    #[error("Cannot change directory to {path}: {source}")]
    WorkingDirectory {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Launch failure: {0}")]
    LaunchFailure(#[from] LaunchError),
    #[error("Terminal session failed: {0:#}")]
    Terminal(anyhow::Error),
}

impl DispatchError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidArgument(_) | Self::WorkingDirectory { .. } => EXIT_INVALID_ARGUMENT,
            Self::LaunchFailure(_) => EXIT_LAUNCH_FAILURE,
            Self::Terminal(_) => EXIT_TERMINAL_ERROR,
        }
    }
}

/// The external subsystems the dispatcher hands control to.
pub struct Collaborators<'a> {
    pub terminal: Box<dyn TerminalLoop + 'a>,
    pub browser: Box<dyn BrowserLauncher + 'a>,
    pub stub: Box<dyn BrowserLauncher + 'a>,
}

impl Collaborators<'static> {
    /// Production collaborators: stdio REPL, real GUI launcher, stdout marker.
    pub fn for_flags(flags: &StartupFlags, display_available: bool) -> Self {
        let mut browser = GuiLauncher::new(flags.gui_url.clone()).with_display(display_available);
        if let Some(command) = &flags.gui_command {
            browser = browser.with_command(command.clone());
        }
        Self {
            terminal: Box::new(StdioRepl::stdio()),
            browser: Box::new(browser),
            stub: Box::new(MarkerLauncher::stdout()),
        }
    }
}

/// Routes a [`LaunchDecision`] to the matching collaborator.
///
/// Test mode is fixed at construction so dispatch never consults the
/// environment.
pub struct ModeDispatcher<'a> {
    test_mode: bool,
    collaborators: Collaborators<'a>,
}

impl<'a> ModeDispatcher<'a> {
    pub fn new(test_mode: bool, collaborators: Collaborators<'a>) -> Self {
        Self {
            test_mode,
            collaborators,
        }
    }

    pub fn decide(&self, flags: &StartupFlags) -> LaunchDecision {
        decide(flags.browser, self.test_mode)
    }

    /// Run the chosen mode and return its exit code.
    pub fn dispatch(
        &mut self,
        decision: LaunchDecision,
        flags: &StartupFlags,
    ) -> Result<u8, DispatchError> {
        match decision {
            LaunchDecision::RunTerminal => {
                tracing::debug!(auto_confirm = flags.yes, "State: TerminalRunning");
                let session = TerminalSession::from(flags);
                self.collaborators
                    .terminal
                    .run(&session)
                    .map_err(DispatchError::Terminal)
            }
            LaunchDecision::RunBrowserReal => {
                tracing::debug!(url = %flags.gui_url, "State: BrowserLaunching");
                self.collaborators.browser.launch()?;
                Ok(0)
            }
            LaunchDecision::RunBrowserStub => {
                tracing::debug!("State: StubEmitted");
                self.collaborators.stub.launch()?;
                Ok(0)
            }
        }
    }

    /// Decide and dispatch in one step.
    pub fn run(&mut self, flags: &StartupFlags) -> Result<u8, DispatchError> {
        let decision = self.decide(flags);
        tracing::debug!(?decision, test_mode = self.test_mode, "State: DecisionMade");
        self.dispatch(decision, flags)
    }
}

/// Full lifecycle against the real process: argv, environment, stdio.
pub fn run_from_env() -> ExitCode {
    let code = run(std::env::args_os(), |key| std::env::var(key).ok());
    ExitCode::from(code)
}

/// Full lifecycle with an explicit argv and environment lookup.
///
/// Every error is written to stderr exactly once; the return value is the
/// process exit code.
pub fn run<I, T, F>(argv: I, lookup: F) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    F: Fn(&str) -> Option<String>,
{
    let flags = match parse_flags(argv) {
        Ok(flags) => flags,
        Err(err) if !err.use_stderr() => {
            // --help / --version
            let _ = err.print();
            return 0;
        }
        Err(err) => return report(DispatchError::InvalidArgument(err)),
    };

    if let Some(cwd) = &flags.cwd {
        if let Err(source) = std::env::set_current_dir(cwd) {
            return report(DispatchError::WorkingDirectory {
                path: cwd.clone(),
                source,
            });
        }
    }

    let test_mode = TestModeSignal::from_lookup(&lookup).is_enabled();
    let collaborators = Collaborators::for_flags(&flags, has_display_with(&lookup));
    let mut dispatcher = ModeDispatcher::new(test_mode, collaborators);
    let decision = dispatcher.decide(&flags);

    // Browser modes keep stdout for the marker; the terminal loop owns the screen.
    let config = AppConfig::from(&flags);
    if decision.is_browser() {
        init_stderr_logging(&config);
    } else {
        init_file_logging(&config, &XdgDirs::with_lookup(&lookup).log_file());
    }
    tracing::debug!(?decision, test_mode, yes = flags.yes, "State: DecisionMade");

    match dispatcher.dispatch(decision, &flags) {
        Ok(code) => {
            tracing::debug!(code, "State: Exited");
            code
        }
        Err(err) => report(err),
    }
}

fn report(err: DispatchError) -> u8 {
    let code = err.exit_code();
    match &err {
        DispatchError::InvalidArgument(clap_err) => {
            // clap renders its own usage hint.
            let _ = clap_err.print();
        }
        other => {
            let _ = writeln!(std::io::stderr(), "Error: {other}");
        }
    }
    code
}
