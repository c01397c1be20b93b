//! .gitignore generation

use super::{write_params, yes_no, Plugin};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Creates a `.gitignore` for build output and editor files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Gitignore {
    /// Also ignore `Cargo.lock` (libraries usually do)
    pub ignore_lockfile: bool,
    /// Extra patterns appended after the standard ones
    pub extra: Vec<String>,
}

impl Default for Gitignore {
    fn default() -> Self {
        Self {
            ignore_lockfile: true,
            extra: Vec::new(),
        }
    }
}

impl fmt::Display for Gitignore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let extra = if self.extra.is_empty() {
            "None".to_string()
        } else {
            self.extra.join(", ")
        };
        write_params(
            f,
            "Gitignore",
            &[
                ("Ignore Cargo.lock", yes_no(self.ignore_lockfile)),
                ("Extra patterns", extra),
            ],
        )
    }
}

pub fn instantiate() -> Plugin {
    Plugin::Gitignore(Gitignore::default())
}
