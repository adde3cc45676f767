//! Aider - terminal or browser entry point
//!
//! Starts the interactive terminal loop by default. `--browser` hands off to
//! the browser front end; with `AIDER_TEST_GUI=1` that hand-off only prints
//! `launch_gui_called` so tests can observe it.

use std::process::ExitCode;

fn main() -> ExitCode {
    aider_launcher::run_from_env()
}
