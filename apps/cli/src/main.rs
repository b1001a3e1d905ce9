//! # cronoszkevm
//!
//! Checks Cronos zkEVM plugin configuration the way the agent resolves it:
//! the settings file and `--set` overrides first, the process environment
//! as fallback.

mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use cronoszkevm_config::{MapSettings, TomlSettings};
use cronoszkevm_plugin::validate_from_runtime;

use crate::report::OutputFormat;

/// Cronos zkEVM plugin tooling.
#[derive(Parser)]
#[command(name = "cronoszkevm")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the plugin configuration.
    Check(CheckArgs),
}

#[derive(clap::Args)]
struct CheckArgs {
    /// Flat TOML file of string settings.
    #[arg(short, long, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Setting applied on top of the file. Repeatable.
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    overrides: Vec<(String, String)>,

    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn parse_key_value(arg: &str) -> Result<(String, String), String> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{arg}'"))?;
    if key.is_empty() {
        return Err("setting key must not be empty".to_owned());
    }
    Ok((key.to_owned(), value.to_owned()))
}

fn load_settings(args: &CheckArgs) -> anyhow::Result<MapSettings> {
    let mut settings = MapSettings::new();
    if let Some(path) = &args.settings {
        let file = TomlSettings::from_path(path)
            .with_context(|| format!("loading settings from {}", path.display()))?;
        settings.extend(file);
    }
    settings.extend(args.overrides.iter().cloned());
    Ok(settings)
}

fn check(args: CheckArgs) -> anyhow::Result<ExitCode> {
    let settings = load_settings(&args)?;
    let mut stdout = std::io::stdout().lock();

    match validate_from_runtime(&settings) {
        Ok(config) => {
            report::write_valid(&mut stdout, args.format, &config)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            if err.validation_errors().is_none() {
                return Err(err.into());
            }
            report::write_invalid(&mut std::io::stderr().lock(), args.format, &err)?;
            Ok(ExitCode::FAILURE)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = cronoszkevm_log::init() {
        eprintln!("warning: logging disabled: {e}");
    }

    let result = match cli.command {
        Commands::Check(args) => check(args),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            let e = cronoszkevm_log::log_error!(e, "check aborted");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
