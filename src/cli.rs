//! Command line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::property::Group;
use crate::report::ReportOptions;

#[derive(Parser)]
struct SourceArgs {
    /// Settings file to read instead of the default location
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Set a property, overriding the environment and the settings file
    #[arg(short = 's', long = "set", value_name = "KEY=VALUE", action = clap::ArgAction::Append)]
    overrides: Vec<String>,

    /// Ignore environment variables
    #[arg(long)]
    no_env: bool,
}

#[derive(Parser)]
struct OutputArgs {
    /// Only list properties in this group
    #[arg(short = 'g', long, value_enum)]
    group: Option<Group>,

    /// Also list advanced properties
    #[arg(short = 'a', long)]
    advanced: bool,

    /// Print a single JSON document instead of the human readable listing
    #[arg(long)]
    json: bool,

    /// Log what is loaded and resolved to stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[derive(Parser)]
struct ValidationArgs {
    /// Treat keys that no property is registered under as errors
    #[arg(long)]
    strict: bool,
}

#[derive(Parser)]
#[command(name = "detect-config")]
#[command(about = "Validate and print the effective detector configuration")]
pub struct Cli {
    /// Where raw values come from
    #[command(flatten)]
    sources: SourceArgs,

    /// What is printed
    #[command(flatten)]
    output: OutputArgs,

    /// How strictly values are checked
    #[command(flatten)]
    validation: ValidationArgs,
}

/// Where the binary collects raw values from.
#[derive(Clone, Debug)]
pub struct SourceOptions {
    pub config: Option<PathBuf>,
    pub overrides: Vec<String>,
    pub use_env: bool,
}

impl Cli {
    #[must_use]
    pub fn source_options(&self) -> SourceOptions {
        SourceOptions {
            config: self.sources.config.clone(),
            overrides: self.sources.overrides.clone(),
            use_env: !self.sources.no_env,
        }
    }

    #[must_use]
    pub const fn report_options(&self) -> ReportOptions {
        ReportOptions {
            include_advanced: self.output.advanced,
            group: self.output.group,
        }
    }

    #[must_use]
    pub const fn json(&self) -> bool {
        self.output.json
    }

    #[must_use]
    pub const fn verbose(&self) -> bool {
        self.output.verbose
    }

    #[must_use]
    pub const fn strict(&self) -> bool {
        self.validation.strict
    }
}
