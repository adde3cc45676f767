//! Special command recognition for the terminal loop.
//!
//! Lines starting with `/` are assistant commands, lines starting with `!`
//! are shell commands.

/// Whether `line` is a special command.
pub fn is_special_command(line: &str) -> bool {
    matches!(line.chars().next(), Some('/') | Some('!'))
}

/// Command name without its prefix, or `None` for ordinary input.
pub fn extract_command(line: &str) -> Option<&str> {
    if !is_special_command(line) {
        return None;
    }
    line[1..].split_whitespace().next()
}

/// Everything after the command name, trimmed.
pub fn command_args(line: &str) -> &str {
    let rest = line.get(1..).unwrap_or_default().trim_start();
    match rest.find(char::is_whitespace) {
        Some(idx) => rest[idx..].trim(),
        None => "",
    }
}
