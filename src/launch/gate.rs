//! Launch gate: picks the run mode from the startup flags and the test signal.

/// Which mode the process enters after startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaunchDecision {
    /// Interactive terminal loop.
    RunTerminal,
    /// Real browser/GUI launch with OS-level side effects.
    RunBrowserReal,
    /// Marker-only launch used by automated tests.
    RunBrowserStub,
}

impl LaunchDecision {
    /// True for both browser variants.
    pub fn is_browser(self) -> bool {
        matches!(self, Self::RunBrowserReal | Self::RunBrowserStub)
    }
}

/// Decide the run mode.
///
/// The test signal only matters when the browser was requested; without
/// `--browser` the terminal loop always wins.
pub fn decide(browser_requested: bool, test_mode: bool) -> LaunchDecision {
    match (browser_requested, test_mode) {
        (false, _) => LaunchDecision::RunTerminal,
        (true, true) => LaunchDecision::RunBrowserStub,
        (true, false) => LaunchDecision::RunBrowserReal,
    }
}
