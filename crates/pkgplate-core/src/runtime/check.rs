//! Runtime detection for the Rust toolchain

use anyhow::Result;
use semver::Version;
use std::process::Command;

/// Used as the system version when `rustc` cannot be queried
pub const FALLBACK_RUST_VERSION: Version = Version::new(1, 70, 0);

/// Version reported by `rustc --version`, if it can be run
pub fn check_rustc() -> Option<Version> {
    let output = Command::new("rustc").arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }
    parse_rustc_output(&String::from_utf8_lossy(&output.stdout))
}

/// Version of the running toolchain, or [`FALLBACK_RUST_VERSION`]
pub fn system_version() -> Version {
    check_rustc().unwrap_or_else(|| {
        tracing::debug!(
            "rustc not detected, using fallback version {}",
            FALLBACK_RUST_VERSION
        );
        FALLBACK_RUST_VERSION
    })
}

/// Extract the version from output like `rustc 1.80.1 (3f5fd8dd4 2024-08-06)`
fn parse_rustc_output(output: &str) -> Option<Version> {
    let raw = output.split_whitespace().nth(1)?;
    let version = Version::parse(raw).ok()?;
    // Channel suffixes such as `-nightly` are not part of a minimum version
    Some(Version::new(version.major, version.minor, version.patch))
}

/// Parse version string, allowing a leading 'v'
pub fn parse_version(version_str: &str) -> Result<Version> {
    let trimmed = version_str.trim();
    let cleaned = trimmed.strip_prefix('v').unwrap_or(trimmed);
    Version::parse(cleaned).map_err(|e| anyhow::anyhow!("Invalid version '{}': {}", version_str, e))
}
