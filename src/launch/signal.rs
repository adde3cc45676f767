//! Test-mode signal read from the process environment.
//!
//! The signal is read once at startup and handed to the dispatcher as a plain
//! bool, so nothing below this module touches the environment.

/// Environment variable that swaps the real browser launch for the marker.
pub const TEST_GUI_ENV: &str = "AIDER_TEST_GUI";

/// The only value that enables test mode.
const TRUTHY: &str = "1";

/// Read the test-mode signal through an arbitrary variable lookup.
///
/// Returns true only for an exact `"1"`; an unset variable or any other value
/// (including `"true"` or `" 1"`) yields false.
pub fn read_test_mode_signal<F>(lookup: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    lookup(TEST_GUI_ENV).is_some_and(|value| value == TRUTHY)
}

/// Snapshot of the test-mode signal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TestModeSignal(bool);

impl TestModeSignal {
    /// Read the signal from the real process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the signal through a custom lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self(read_test_mode_signal(lookup))
    }

    pub fn is_enabled(self) -> bool {
        self.0
    }
}

impl From<TestModeSignal> for bool {
    fn from(signal: TestModeSignal) -> Self {
        signal.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_exact_one_enables() {
        assert!(read_test_mode_signal(lookup_from(&[(TEST_GUI_ENV, "1")])));
    }

    #[test]
    fn test_absent_disables() {
        assert!(!read_test_mode_signal(lookup_from(&[])));
    }

    #[test]
    fn test_other_values_disable() {
        for value in ["", "0", "true", "yes", " 1", "1 ", "11"] {
            assert!(
                !read_test_mode_signal(lookup_from(&[(TEST_GUI_ENV, value)])),
                "value {value:?} should not enable test mode"
            );
        }
    }

    #[test]
    fn test_unrelated_variable_ignored() {
        assert!(!read_test_mode_signal(lookup_from(&[("AIDER_TEST", "1")])));
    }

    #[test]
    fn test_repeated_reads_agree() {
        let lookup = lookup_from(&[(TEST_GUI_ENV, "1")]);
        let first = TestModeSignal::from_lookup(&lookup);
        let second = TestModeSignal::from_lookup(&lookup);
        assert_eq!(first, second);
        assert!(first.is_enabled());
    }

    #[test]
    #[serial]
    fn test_from_env_reads_process_environment() {
        let original = std::env::var(TEST_GUI_ENV).ok();

        std::env::set_var(TEST_GUI_ENV, "1");
        assert!(TestModeSignal::from_env().is_enabled());
        assert!(TestModeSignal::from_env().is_enabled());

        std::env::remove_var(TEST_GUI_ENV);
        assert!(!TestModeSignal::from_env().is_enabled());

        match original {
            Some(v) => std::env::set_var(TEST_GUI_ENV, v),
            None => std::env::remove_var(TEST_GUI_ENV),
        }
    }
}
