//! Command-line surface: startup flags and the terminal loop.

pub mod args;
pub mod commands;
pub mod repl;
pub mod settings;

pub use args::{parse_flags, StartupFlags};
pub use repl::{StdioRepl, TerminalLoop, TerminalSession};
