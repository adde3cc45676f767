//! Launch mode selection and the browser launch collaborators.

pub mod browser;
pub mod gate;
pub mod signal;

pub use browser::{
    BrowserLauncher, GuiLauncher, LaunchError, MarkerLauncher, DEFAULT_GUI_URL, LAUNCH_MARKER,
};
pub use gate::{decide, LaunchDecision};
pub use signal::{read_test_mode_signal, TestModeSignal, TEST_GUI_ENV};
