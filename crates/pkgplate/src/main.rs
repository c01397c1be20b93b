//! pkgplate CLI - build package scaffolding configurations

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use pkgplate_core::plugins::{self, PluginKind};
use pkgplate_core::runtime::parse_version;
use pkgplate_core::tui::NewArgs;
use pkgplate_core::{Authors, BuiltinLicenses, Environment, LicenseCatalog, TemplateOptions};
use semver::Version;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pkgplate")]
#[command(about = "Build a validated configuration for scaffolding a new package")]
#[command(version)]
pub struct Args {
    /// Increase log verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a package template and print its summary
    New(CliNewArgs),
    /// List available licenses
    Licenses,
    /// List available plugins
    Plugins,
}

#[derive(Parser, Debug, Default)]
pub struct CliNewArgs {
    /// YAML file with template options; flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Hosting username (defaults to `git config github.user`)
    #[arg(short, long)]
    pub owner: Option<String>,

    /// Code hosting service, as hostname or URL
    #[arg(long)]
    pub host: Option<String>,

    /// License identifier; pass an empty string for none
    #[arg(short, long)]
    pub license: Option<String>,

    /// Package authors (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub authors: Option<Vec<String>>,

    /// Directory the package is created in
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Minimum supported Rust version (defaults to the installed rustc)
    #[arg(long = "min-version", value_parser = parse_min_version)]
    pub min_version: Option<Version>,

    /// Use an SSH remote instead of HTTPS
    #[arg(long)]
    pub ssh: bool,

    /// Plugin to enable with default settings (repeatable)
    #[arg(short, long = "plugin")]
    pub plugins: Vec<PluginKind>,

    /// Ask for every option interactively
    #[arg(short, long)]
    pub interactive: bool,

    /// Only ask for the username and plugins
    #[arg(short, long)]
    pub fast: bool,
}

fn parse_min_version(s: &str) -> Result<Version, String> {
    parse_version(s).map_err(|e| e.to_string())
}

impl CliNewArgs {
    /// Merge the options file (if any) with the flags given on the command line
    fn into_new_args(self) -> Result<NewArgs> {
        let base = match &self.config {
            Some(path) => TemplateOptions::from_yaml_file(path)?,
            None => TemplateOptions::default(),
        };

        let flags = TemplateOptions {
            owner: self.owner,
            host: self.host,
            license: self.license,
            authors: self.authors.map(Authors::Many),
            directory: self.directory,
            minimum_version: self.min_version,
            use_ssh_remote: self.ssh.then_some(true),
            plugins: if self.plugins.is_empty() {
                None
            } else {
                Some(
                    self.plugins
                        .iter()
                        .map(|kind| (plugins::descriptor(*kind).instantiate)())
                        .collect(),
                )
            },
        };

        Ok(NewArgs {
            options: base.overlay(flags),
            interactive: self.interactive,
            fast: self.fast,
        })
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn list_licenses(out: &mut impl Write, catalog: &dyn LicenseCatalog) -> io::Result<()> {
    writeln!(out, "{}", "Available licenses".cyan().bold())?;
    writeln!(out)?;
    for (id, description) in catalog.list_available() {
        writeln!(out, "  {} {:<14} {}", "->".blue(), id, description.dimmed())?;
    }
    Ok(())
}

fn list_plugins() {
    println!("{}", "Available plugins".cyan().bold());
    println!();
    for descriptor in plugins::registry() {
        let mode = if descriptor.interactive.is_some() {
            "interactive"
        } else {
            "defaults only"
        };
        println!(
            "  {} {:<16} {}",
            "->".blue(),
            descriptor.kind.name(),
            mode.dimmed()
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    init_logging(args.verbose);

    match args.command {
        Some(Command::Licenses) => {
            list_licenses(&mut io::stdout().lock(), &BuiltinLicenses)?;
            Ok(())
        }
        Some(Command::Plugins) => {
            list_plugins();
            Ok(())
        }
        Some(Command::New(new_args)) => {
            let new_args = new_args
                .into_new_args()
                .context("Failed to load template options")?;
            new_package(new_args).await
        }
        None => {
            // No subcommand provided, default to the interactive flow
            new_package(NewArgs {
                interactive: true,
                ..Default::default()
            })
            .await
        }
    }
}

/// Detect the environment and run the template flow
async fn new_package(args: NewArgs) -> Result<()> {
    let env = Environment::detect();
    let result = pkgplate_core::run(&env, args).await.map(|_| ());

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
