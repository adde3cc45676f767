//! Terminal loop: the interactive side of the launcher.
//!
//! The dispatcher only knows the [`TerminalLoop`] trait. [`StdioRepl`] is the
//! line-oriented implementation the binary ships with. It has no model backend,
//! so plain prompts are acknowledged but not sent anywhere.

use std::io::{self, BufRead, Write};
use std::process::{Command, Stdio};

use serde::Serialize;

use super::args::StartupFlags;
use super::commands::{command_args, extract_command, is_special_command};
use super::settings::format_settings;

/// Read-only view of the startup flags handed to the terminal loop.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TerminalSession {
    pub auto_confirm: bool,
    pub model: String,
    pub message: Option<String>,
    pub prompt: Vec<String>,
    pub openai_api_key: Option<String>,
    pub anthropic_api_key: Option<String>,
}

impl From<&StartupFlags> for TerminalSession {
    fn from(flags: &StartupFlags) -> Self {
        Self {
            auto_confirm: flags.yes,
            model: flags.model.clone(),
            message: flags.message.clone(),
            prompt: flags.prompt.clone(),
            openai_api_key: flags.openai_api_key.clone(),
            anthropic_api_key: flags.anthropic_api_key.clone(),
        }
    }
}

impl TerminalSession {
    /// The single prompt to handle before exiting, if any.
    ///
    /// `--message` wins over positional prompt words.
    pub fn single_prompt(&self) -> Option<String> {
        self.message.clone().or_else(|| {
            if self.prompt.is_empty() {
                None
            } else {
                Some(self.prompt.join(" "))
            }
        })
    }
}

/// An interactive terminal front end. Returns the process exit code.
pub trait TerminalLoop {
    fn run(&mut self, session: &TerminalSession) -> anyhow::Result<u8>;
}

/// Whether the loop keeps reading after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Line-oriented REPL over any reader/writer pair.
pub struct StdioRepl<R, W> {
    input: R,
    output: W,
    model: String,
}

impl StdioRepl<io::StdinLock<'static>, io::Stdout> {
    /// REPL over the process stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StdioRepl<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            model: String::new(),
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn print_banner(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "  aider v{}", env!("CARGO_PKG_VERSION"))?;
        writeln!(self.output, "  Model: {}", self.model)?;
        writeln!(self.output, "  Type /help for commands, /exit to quit.")?;
        writeln!(self.output)
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn handle_line(&mut self, line: &str, session: &TerminalSession) -> anyhow::Result<Flow> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Flow::Continue);
        }
        if !is_special_command(line) {
            self.handle_prompt(line)?;
            return Ok(Flow::Continue);
        }
        if let Some(shell) = line.strip_prefix('!') {
            self.handle_shell(shell.trim(), session)?;
            return Ok(Flow::Continue);
        }

        match extract_command(line) {
            Some("exit") | Some("quit") => return Ok(Flow::Exit),
            Some("help") => self.show_help()?,
            Some("settings") => {
                let mut shown = session.clone();
                shown.model = self.model.clone();
                let text = format_settings(
                    &shown,
                    session.openai_api_key.as_deref(),
                    session.anthropic_api_key.as_deref(),
                );
                write!(self.output, "{text}")?;
            }
            Some("model") => {
                let name = command_args(line);
                if name.is_empty() {
                    writeln!(self.output, "Current model: {}", self.model)?;
                } else {
                    self.model = name.to_string();
                    tracing::debug!(model = %self.model, "Switched model");
                    writeln!(self.output, "Model set to {}", self.model)?;
                }
            }
            Some(other) => writeln!(self.output, "Unknown command: /{other}")?,
            None => writeln!(self.output, "Unknown command: {line}")?,
        }
        Ok(Flow::Continue)
    }

    fn handle_prompt(&mut self, prompt: &str) -> io::Result<()> {
        tracing::info!(model = %self.model, chars = prompt.len(), "Prompt received");
        writeln!(
            self.output,
            "No model backend is connected; prompt was not sent to {}.",
            self.model
        )
    }

    fn handle_shell(&mut self, command: &str, session: &TerminalSession) -> anyhow::Result<()> {
        if command.is_empty() {
            writeln!(self.output, "Usage: !<shell command>")?;
            return Ok(());
        }
        if !session.auto_confirm && !self.confirm(&format!("Run shell command `{command}`?"))? {
            writeln!(self.output, "Skipped.")?;
            return Ok(());
        }

        let (shell, flag) = if cfg!(windows) { ("cmd", "/C") } else { ("sh", "-c") };
        let result = Command::new(shell)
            .arg(flag)
            .arg(command)
            .stdin(Stdio::null())
            .output()?;

        self.output.write_all(&result.stdout)?;
        self.output.write_all(&result.stderr)?;
        if !result.status.success() {
            writeln!(
                self.output,
                "Command exited with code {}",
                result.status.code().unwrap_or(-1)
            )?;
        }
        Ok(())
    }

    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        write!(self.output, "{question} [y/N] ")?;
        self.output.flush()?;
        let answer = self.read_line()?.unwrap_or_default();
        Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
    }

    fn show_help(&mut self) -> io::Result<()> {
        writeln!(self.output, "Commands:")?;
        writeln!(self.output, "  /help            Show this help")?;
        writeln!(self.output, "  /model [name]    Show or switch the model")?;
        writeln!(self.output, "  /settings        Show option settings")?;
        writeln!(self.output, "  /exit, /quit     Leave the session")?;
        writeln!(self.output, "  !<command>       Run a shell command")
    }
}

impl<R: BufRead, W: Write> TerminalLoop for StdioRepl<R, W> {
    fn run(&mut self, session: &TerminalSession) -> anyhow::Result<u8> {
        self.model = session.model.clone();

        if let Some(prompt) = session.single_prompt() {
            tracing::debug!("Single prompt mode");
            self.handle_line(&prompt, session)?;
            self.output.flush()?;
            return Ok(0);
        }

        self.print_banner()?;
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                break;
            };
            if self.handle_line(&line, session)? == Flow::Exit {
                break;
            }
        }
        self.output.flush()?;
        Ok(0)
    }
}
