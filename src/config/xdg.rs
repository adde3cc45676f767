//! XDG Base Directory support.

use std::path::PathBuf;

/// XDG directory paths for aider.
#[derive(Debug, Clone)]
pub struct XdgDirs {
    /// State directory (~/.local/state/aider or XDG_STATE_HOME/aider)
    pub state: PathBuf,
}

impl XdgDirs {
    /// Get XDG directories, respecting environment variables.
    pub fn new() -> Self {
        Self::with_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve directories reading variables through `lookup`.
    pub fn with_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));

        Self {
            state: lookup("XDG_STATE_HOME")
                .map(PathBuf::from)
                .unwrap_or_else(|| home.join(".local/state"))
                .join("aider"),
        }
    }

    /// Ensure the state directory exists.
    pub fn ensure_state_dir(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.state)
    }

    /// Log file used by the terminal loop.
    pub fn log_file(&self) -> PathBuf {
        self.state.join("aider.log")
    }
}

impl Default for XdgDirs {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_respects_xdg_state_home() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().to_string_lossy().to_string();
        let dirs = XdgDirs::with_lookup(|key| (key == "XDG_STATE_HOME").then(|| root.clone()));

        assert_eq!(dirs.state, tmp.path().join("aider"));
        assert_eq!(dirs.log_file(), tmp.path().join("aider").join("aider.log"));

        dirs.ensure_state_dir().unwrap();
        assert!(dirs.state.is_dir());
    }

    #[test]
    fn test_falls_back_to_home() {
        let dirs = XdgDirs::with_lookup(|_| None);
        assert!(dirs.state.ends_with(".local/state/aider"));
    }
}
