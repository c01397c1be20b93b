//! Codecov integration

use super::{write_params, Plugin};
use crate::prompt::Prompter;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;

/// Adds a Codecov badge and, optionally, a `codecov.yml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Codecov {
    /// Path of a `codecov.yml` to copy into the package
    pub config_file: Option<String>,
}

impl fmt::Display for Codecov {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = self.config_file.as_deref().unwrap_or("None").to_string();
        write_params(f, "Codecov", &[("Config file", config)])
    }
}

pub fn instantiate() -> Plugin {
    Plugin::Codecov(Codecov::default())
}

pub fn interactive(prompter: &mut dyn Prompter) -> io::Result<Plugin> {
    let answer = prompter.input("Codecov: config file (leave empty for none)", "")?;
    let config_file = Some(answer.trim().to_string()).filter(|path| !path.is_empty());
    Ok(Plugin::Codecov(Codecov { config_file }))
}
