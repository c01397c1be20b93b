//! Identity lookup backed by version-control configuration
//!
//! The builder never reads process-wide state directly; it asks an
//! [`IdentitySource`] for values such as the configured author name or the
//! hosting username.

use std::collections::HashMap;
use std::process::Command;

/// Git key holding the author's display name
pub const USER_NAME: &str = "user.name";

/// Git key holding the author's email
pub const USER_EMAIL: &str = "user.email";

/// Git key holding the hosting service username
pub const HOSTING_USER: &str = "github.user";

/// Read-only lookup of identity values
pub trait IdentitySource: Send + Sync {
    /// Return the value configured for `key`, or `default` when absent.
    fn get_value(&self, key: &str, default: &str) -> String;
}

/// Reads values from the user's git configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct GitConfig;

impl IdentitySource for GitConfig {
    fn get_value(&self, key: &str, default: &str) -> String {
        Command::new("git")
            .args(["config", "--get", key])
            .output()
            .ok()
            .and_then(|output| {
                if output.status.success() {
                    String::from_utf8(output.stdout)
                        .ok()
                        .map(|s| s.trim().to_string())
                } else {
                    None
                }
            })
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| default.to_string())
    }
}

/// Fixed set of identity values
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity {
    values: HashMap<String, String>,
}

impl StaticIdentity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value for `key`
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl IdentitySource for StaticIdentity {
    fn get_value(&self, key: &str, default: &str) -> String {
        self.values
            .get(key)
            .filter(|value| !value.is_empty())
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_identity_returns_configured_value() {
        let identity = StaticIdentity::new().with(USER_NAME, "Alice");
        assert_eq!(identity.get_value(USER_NAME, ""), "Alice");
    }

    #[test]
    fn test_static_identity_falls_back_to_default() {
        let identity = StaticIdentity::new().with(USER_EMAIL, "");
        assert_eq!(identity.get_value(USER_EMAIL, "none"), "none");
        assert_eq!(identity.get_value(HOSTING_USER, ""), "");
    }

    #[test]
    fn test_git_config_never_fails() {
        // Whether or not git is installed, a lookup of an unset key yields the default
        let value = GitConfig.get_value("pkgplate.test-key-that-is-not-set", "fallback");
        assert_eq!(value, "fallback");
    }
}
