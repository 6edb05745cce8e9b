//! Environment variable utilities
//!
//! Provides helpers for reading environment variables with defaults.

/// Get environment variable or return default value
///
/// # Example
/// ```rust
/// use upgrade_deployer::utils::env_or_default;
///
/// let artifacts_dir = env_or_default("ARTIFACTS_DIR", "artifacts");
/// ```
pub fn env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get environment variable as Option
///
/// Returns `Some(value)` if set, `None` if not set.
pub fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_env_helpers() {
        std::env::set_var("UPGRADE_DEPLOYER_TEST_VAR", "value");
        assert_eq!(env_opt("UPGRADE_DEPLOYER_TEST_VAR").as_deref(), Some("value"));
        assert_eq!(env_or_default("UPGRADE_DEPLOYER_TEST_VAR", "other"), "value");

        std::env::remove_var("UPGRADE_DEPLOYER_TEST_VAR");
        assert_eq!(env_opt("UPGRADE_DEPLOYER_TEST_VAR"), None);
        assert_eq!(env_or_default("UPGRADE_DEPLOYER_TEST_VAR", "other"), "other");
    }
}
