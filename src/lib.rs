//! Aider launcher library.
//!
//! Parses startup flags, decides between the terminal loop and the browser
//! front end, and exposes the `AIDER_TEST_GUI` seam that replaces the real
//! browser launch with a printed marker.

pub mod cli;
pub mod config;
pub mod dispatch;
pub mod display_detect;
pub mod launch;
pub mod runner;

pub use dispatch::{run, run_from_env, Collaborators, DispatchError, ModeDispatcher};
pub use launch::{LaunchDecision, LAUNCH_MARKER};
