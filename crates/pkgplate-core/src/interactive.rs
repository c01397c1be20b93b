//! Prompt-driven construction of a [`PackageTemplate`]
//!
//! The flow asks for each option in a fixed order and applies the same
//! defaults the builder would. Plugin kinds are discovered on a background
//! task started before the first prompt and joined at the plugin step.

use crate::environment::Environment;
use crate::error::{ConfigError, InteractiveError};
use crate::identity::{HOSTING_USER, USER_NAME};
use crate::options::{Authors, TemplateOptions};
use crate::plugins::{self, Plugin, PluginDescriptor};
use crate::prompt::{parse_yes_no, Prompter};
use crate::runtime;
use crate::template::{PackageTemplate, DEFAULT_DIRECTORY, DEFAULT_HOST, DEFAULT_LICENSE};
use std::path::PathBuf;

/// Label of the "no license" menu entry
const NO_LICENSE: &str = "None";

/// Ask for every option and build the template
///
/// In `fast` mode only the owner and the plugin selection are prompted; every
/// other option takes its default. Validation errors from the builder are
/// returned unchanged inside [`InteractiveError::Config`].
pub async fn interactive_template(
    env: &Environment,
    prompter: &mut dyn Prompter,
    fast: bool,
) -> Result<PackageTemplate, InteractiveError> {
    let options = interactive_options(env, prompter, fast).await?;
    Ok(PackageTemplate::new(options, env)?)
}

/// Run the prompt sequence and return the collected options unvalidated
pub async fn interactive_options(
    env: &Environment,
    prompter: &mut dyn Prompter,
    fast: bool,
) -> Result<TemplateOptions, InteractiveError> {
    complete_options(env, prompter, fast, TemplateOptions::default()).await
}

/// Prompt only for the options `preset` leaves unset
///
/// Values already present in `preset` (flags, an options file) are kept as
/// they are and their prompts are skipped, in fast mode as well.
pub async fn complete_options(
    env: &Environment,
    prompter: &mut dyn Prompter,
    fast: bool,
    preset: TemplateOptions,
) -> Result<TemplateOptions, InteractiveError> {
    let discovery = tokio::task::spawn_blocking(plugins::discover_interactive);

    let owner = match preset.owner {
        Some(owner) => owner,
        None => {
            let default_owner = env.identity.get_value(HOSTING_USER, "");
            prompter.input("Username", &default_owner)?
        }
    };

    let host = match preset.host {
        Some(host) => host,
        None if fast => DEFAULT_HOST.to_string(),
        None => prompter.input("Code hosting service", DEFAULT_HOST)?,
    };

    let license = match preset.license {
        Some(license) => license,
        None if fast => DEFAULT_LICENSE.to_string(),
        None => select_license(env, prompter)?,
    };

    let authors = match preset.authors {
        Some(authors) => authors,
        None => {
            let default_authors = env.identity.get_value(USER_NAME, "");
            if fast {
                Authors::One(default_authors)
            } else {
                Authors::One(prompter.input("Package author(s)", &default_authors)?)
            }
        }
    };

    let directory = match preset.directory {
        Some(directory) => directory,
        None if fast => PathBuf::from(DEFAULT_DIRECTORY),
        None => PathBuf::from(prompter.input("Path to package directory", DEFAULT_DIRECTORY)?),
    };

    let minimum_version = match preset.minimum_version {
        Some(version) => version,
        None if fast => env.system_version.clone(),
        None => {
            let answer = prompter.input("Minimum Rust version", &env.system_version.to_string())?;
            runtime::parse_version(&answer)
                .map_err(|e| ConfigError::invalid("minimum_version", answer.as_str(), e))?
        }
    };

    let use_ssh_remote = match preset.use_ssh_remote {
        Some(ssh) => ssh,
        None if fast => false,
        None => {
            let answer = prompter.input("Set remote to SSH?", "no")?;
            parse_yes_no(&answer, false).ok_or_else(|| {
                ConfigError::invalid("use_ssh_remote", answer.as_str(), "expected yes or no")
            })?
        }
    };

    let chosen = match preset.plugins {
        Some(plugins) => plugins,
        None => select_plugins(prompter, &discovery.await?, fast)?,
    };

    Ok(TemplateOptions {
        owner: Some(owner),
        host: Some(host),
        license: Some(license),
        authors: Some(authors),
        directory: Some(directory),
        minimum_version: Some(minimum_version),
        use_ssh_remote: Some(use_ssh_remote),
        plugins: Some(chosen),
    })
}

/// Plugin menu over the discovered kinds; fast mode skips their own prompts
fn select_plugins(
    prompter: &mut dyn Prompter,
    available: &[&'static PluginDescriptor],
    fast: bool,
) -> Result<Vec<Plugin>, InteractiveError> {
    let names: Vec<String> = available
        .iter()
        .map(|descriptor| descriptor.kind.name().to_string())
        .collect();
    let selected = prompter.multiselect("Select plugins", &names)?;

    let mut chosen: Vec<Plugin> = Vec::with_capacity(selected.len());
    for index in selected {
        let Some(descriptor) = available.get(index) else {
            tracing::debug!("ignoring out-of-range plugin selection {}", index);
            continue;
        };
        let plugin = match descriptor.interactive {
            Some(elicit) if !fast => elicit(prompter)?,
            _ => (descriptor.instantiate)(),
        };
        chosen.push(plugin);
    }
    Ok(chosen)
}

/// License menu; aborting the menu counts as choosing "None"
fn select_license(
    env: &Environment,
    prompter: &mut dyn Prompter,
) -> Result<String, InteractiveError> {
    let available = env.licenses.list_available();
    let mut options = vec![NO_LICENSE.to_string()];
    options.extend(
        available
            .iter()
            .map(|(id, description)| format!("{} ({})", id, description)),
    );

    let license = match prompter.select("License", &options)? {
        Some(0) | None => String::new(),
        Some(index) => available
            .get(index - 1)
            .map(|(id, _)| id.clone())
            .unwrap_or_default(),
    };
    Ok(license)
}
