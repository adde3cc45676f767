//! Startup flag parsing.

use std::ffi::OsString;

use clap::Parser;

use crate::launch::DEFAULT_GUI_URL;

/// Aider - AI pair programmer in your terminal or browser
#[derive(Parser, Debug, Clone)]
#[command(name = "aider")]
#[command(version, about, long_about = None)]
#[command(
    after_help = "EXAMPLES:\n  aider --model gpt-4\n  aider -m \"Refactor main.rs\"\n  aider --browser"
)]
pub struct StartupFlags {
    /// Run the browser-based GUI
    #[arg(long)]
    pub browser: bool,

    /// Automatically answer yes to all prompts
    #[arg(long)]
    pub yes: bool,

    /// Change to this directory before running
    #[arg(short = 'C', long, visible_alias = "directory")]
    pub cwd: Option<String>,

    /// Enable debug logging
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Enable verbose (trace-level) logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// LLM model to use
    #[arg(long, default_value = "gpt-4")]
    pub model: String,

    /// Handle a single message and exit
    #[arg(short = 'm', long)]
    pub message: Option<String>,

    /// OpenAI API key
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    /// Anthropic API key
    #[arg(long, env = "ANTHROPIC_API_KEY", hide_env_values = true)]
    pub anthropic_api_key: Option<String>,

    /// URL of the browser front end
    #[arg(long, default_value = DEFAULT_GUI_URL)]
    pub gui_url: String,

    /// Spawn this GUI program (with the GUI URL as argument) instead of opening a browser
    #[arg(long)]
    pub gui_command: Option<String>,

    /// Optional prompt to start the session
    #[arg()]
    pub prompt: Vec<String>,
}

/// Parse startup flags from a full argv (program name first).
///
/// Returns the raw clap error so the caller can tell `--help`/`--version`
/// apart from real usage errors.
pub fn parse_flags<I, T>(argv: I) -> Result<StartupFlags, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    StartupFlags::try_parse_from(argv)
}
