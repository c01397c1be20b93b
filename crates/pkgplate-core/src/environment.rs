//! Collaborators consulted while resolving defaults

use crate::identity::{GitConfig, IdentitySource};
use crate::license::{BuiltinLicenses, LicenseCatalog};
use crate::runtime;
use semver::Version;
use std::path::PathBuf;

/// Everything outside the option set that template construction depends on
///
/// The builder and the interactive flow read identity values, license
/// availability, the running toolchain version and the current/home
/// directories only through this value, so tests can substitute any of them.
pub struct Environment {
    pub identity: Box<dyn IdentitySource>,
    pub licenses: Box<dyn LicenseCatalog>,
    /// Default for the minimum supported toolchain version
    pub system_version: Version,
    /// Used to expand a leading `~`
    pub home_dir: Option<PathBuf>,
    /// Base for relative package directories
    pub current_dir: PathBuf,
}

impl Environment {
    /// Environment of the running process: git configuration, built-in
    /// licenses, detected `rustc` version and real directories
    pub fn detect() -> Self {
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            identity: Box::new(GitConfig),
            licenses: Box::new(BuiltinLicenses),
            system_version: runtime::system_version(),
            home_dir: dirs::home_dir(),
            current_dir,
        }
    }

    pub fn with_identity(mut self, identity: impl IdentitySource + 'static) -> Self {
        self.identity = Box::new(identity);
        self
    }

    pub fn with_licenses(mut self, licenses: impl LicenseCatalog + 'static) -> Self {
        self.licenses = Box::new(licenses);
        self
    }

    pub fn with_system_version(mut self, version: Version) -> Self {
        self.system_version = version;
        self
    }

    pub fn with_dirs(mut self, home_dir: Option<PathBuf>, current_dir: PathBuf) -> Self {
        self.home_dir = home_dir;
        self.current_dir = current_dir;
        self
    }
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment")
            .field("system_version", &format_args!("{}", self.system_version))
            .field("home_dir", &self.home_dir)
            .field("current_dir", &self.current_dir)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::identity::StaticIdentity;

    /// Deterministic environment rooted at `/work` with home `/home/alice`
    pub fn environment(identity: StaticIdentity) -> Environment {
        Environment {
            identity: Box::new(identity),
            licenses: Box::new(BuiltinLicenses),
            system_version: Version::new(1, 80, 0),
            home_dir: Some(PathBuf::from("/home/alice")),
            current_dir: PathBuf::from("/work"),
        }
    }
}
