//! Charm-style CLI prompts using cliclack

use crate::environment::Environment;
use crate::interactive::complete_options;
use crate::options::TemplateOptions;
use crate::prompt::Prompter;
use crate::template::PackageTemplate;
use anyhow::{Context, Result};
use std::io;

/// Arguments for building a template from the command line
#[derive(Debug, Clone, Default)]
pub struct NewArgs {
    /// Options given as flags or read from an options file
    pub options: TemplateOptions,

    /// Ask for every option `options` leaves unset
    pub interactive: bool,

    /// Only ask for the owner and plugins (implies interactive)
    pub fast: bool,
}

/// [`Prompter`] backed by cliclack widgets
#[derive(Debug, Default)]
pub struct CliclackPrompter;

impl Prompter for CliclackPrompter {
    fn input(&mut self, label: &str, default: &str) -> io::Result<String> {
        let prompt = if default.is_empty() {
            label.to_string()
        } else {
            format!("{} [{}]", label, default)
        };
        let answer: String = cliclack::input(prompt)
            .default_input(default)
            .required(false)
            .interact()?;
        if answer.trim().is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer)
        }
    }

    fn select(&mut self, label: &str, options: &[String]) -> io::Result<Option<usize>> {
        let mut select = cliclack::select(label);
        for (idx, option) in options.iter().enumerate() {
            select = select.item(idx, option, "");
        }
        match select.interact() {
            Ok(idx) => Ok(Some(idx)),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn multiselect(&mut self, label: &str, options: &[String]) -> io::Result<Vec<usize>> {
        if options.is_empty() {
            return Ok(Vec::new());
        }
        let mut multi = cliclack::multiselect(label);
        for (idx, option) in options.iter().enumerate() {
            multi = multi.item(idx, option, "");
        }
        let mut selected: Vec<usize> = multi.required(false).interact()?;
        selected.sort_unstable();
        Ok(selected)
    }
}

/// Build a template from flags or prompts and print its summary
pub async fn run(env: &Environment, args: NewArgs) -> Result<PackageTemplate> {
    cliclack::intro("pkgplate")?;

    let options = if args.interactive || args.fast {
        if args.fast {
            cliclack::log::info("Fast mode: only the username and plugins are asked")?;
        }
        let mut prompter = CliclackPrompter;
        // Flags and the options file are kept; only the rest is asked
        complete_options(env, &mut prompter, args.fast, args.options)
            .await
            .context("Interactive setup failed")?
    } else {
        args.options
    };

    let (template, warnings) = match PackageTemplate::build(options, env) {
        Ok(built) => built,
        Err(e) => {
            cliclack::log::error(format!("{}", e))?;
            cliclack::outro_cancel("Template not created")?;
            return Err(e).context("Invalid template options");
        }
    };

    for warning in &warnings {
        tracing::debug!("{}", warning);
        cliclack::log::warning(format!("{}", warning))?;
    }

    cliclack::note("Package template", template.to_string())?;
    cliclack::outro("Template ready")?;

    Ok(template)
}
