//! Display Detection Module
//!
//! Cross-platform detection of graphical display availability. The real
//! browser launcher refuses to open a URL when no display is present, since
//! the OS fallback would be a text-mode browser taking over the terminal.

/// Detects whether a graphical display is available using the process environment.
///
/// # Platform Behavior
///
/// - **Linux**: `true` if `DISPLAY` or `WAYLAND_DISPLAY` is set (X11 or Wayland).
/// - **macOS**: `true` unless `SSH_TTY` is set.
/// - **Windows**: always `true`.
/// - **Other**: `true` if `DISPLAY` is set.
pub fn has_display() -> bool {
    has_display_with(|key| std::env::var(key).ok())
}

/// Same as [`has_display`], reading variables through `lookup`.
#[cfg(target_os = "linux")]
pub fn has_display_with<F>(lookup: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    lookup("DISPLAY").is_some() || lookup("WAYLAND_DISPLAY").is_some()
}

#[cfg(target_os = "macos")]
pub fn has_display_with<F>(lookup: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    lookup("SSH_TTY").is_none()
}

#[cfg(target_os = "windows")]
pub fn has_display_with<F>(_lookup: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    true
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
pub fn has_display_with<F>(lookup: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    lookup("DISPLAY").is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_display_returns_bool() {
        let _: bool = has_display();
    }

    #[cfg(target_os = "linux")]
    mod linux_tests {
        use super::*;

        #[test]
        fn detects_x11_display() {
            assert!(has_display_with(|key| (key == "DISPLAY").then(|| ":0".to_string())));
        }

        #[test]
        fn detects_wayland_display() {
            assert!(has_display_with(
                |key| (key == "WAYLAND_DISPLAY").then(|| "wayland-0".to_string())
            ));
        }

        #[test]
        fn no_display_variables() {
            assert!(!has_display_with(|_| None));
        }
    }

    #[cfg(target_os = "macos")]
    mod macos_tests {
        use super::*;

        #[test]
        fn detects_ssh_session() {
            assert!(!has_display_with(
                |key| (key == "SSH_TTY").then(|| "/dev/ttys000".to_string())
            ));
            assert!(has_display_with(|_| None));
        }
    }
}
