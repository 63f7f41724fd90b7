//! # detect-config
//!
//! Validate and print the effective configuration of the detector.
//!
//! Values are collected from three layers, highest precedence first:
//!
//! 1. `--set key=value` on the command line
//! 2. environment variables (`DETECT_SOURCE_PATH` supplies `detect.source.path`)
//! 3. the settings file, `~/.config/detect-config/application.toml` by default
//!
//! Anything not supplied falls back to the declared default.
//!
//! ## Usage
//!
//! ```bash
//! # Show the effective configuration
//! detect-config
//!
//! # Override a value and list advanced properties too
//! detect-config --set blackduck.timeout=30 --advanced
//!
//! # Machine readable output for one group, failing on unknown keys
//! detect-config --group proxy --json --strict
//! ```

use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::Colorize;
use detect_config::{
    catalog::DetectProperties,
    cli::{Cli, SourceOptions},
    config::{MapPropertySource, PropertyConfiguration, PropertySource, env, file},
    logging,
    registry::Registry,
    report::Report,
};
use std::process::exit;

/// Entry point for the detect-config application.
///
/// This function handles all errors gracefully by calling [`inner_main`] and printing
/// any errors to stderr before exiting with a non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err:#}");

        exit(1);
    }
}

/// Collect the sources, highest precedence first.
fn load_sources(
    options: &SourceOptions,
    registry: &Registry<'_>,
    json_mode: bool,
) -> Result<Vec<Box<dyn PropertySource>>> {
    let mut sources: Vec<Box<dyn PropertySource>> = Vec::new();

    sources.push(Box::new(
        MapPropertySource::from_overrides("command line", options.overrides.as_slice())
            .context("invalid --set argument")?,
    ));

    if options.use_env {
        sources.push(Box::new(env::from_vars_os(std::env::vars_os(), registry)));
    }

    let settings = match &options.config {
        Some(path) => file::load(path)?,
        None => match file::load_default() {
            Ok(settings) => settings,
            Err(e) => {
                if !json_mode {
                    eprintln!("{} {e}", "Warning: Failed to load settings file:".yellow());
                }
                MapPropertySource::new("default settings file")
            }
        },
    };
    sources.push(Box::new(settings));

    Ok(sources)
}

/// Main application logic that can return errors.
///
/// This function:
/// 1. Parses command-line arguments and installs logging
/// 2. Registers every property of the catalog
/// 3. Loads the command line, environment and settings file layers
/// 4. Rejects unknown keys in `--strict` mode and invalid values always
/// 5. Resolves the active tools and detectors, checking required detectors
/// 6. Prints the report, as JSON when `--json` is active
///
/// # Errors
///
/// This function can return errors from:
/// - Registering the catalog (duplicate keys)
/// - Reading or parsing the settings file
/// - Malformed `--set` arguments
/// - Values that do not parse
/// - Required detectors that are not active
/// - JSON serialization
fn inner_main() -> Result<()> {
    let args = Cli::parse();
    let json_mode = args.json();

    logging::init(args.verbose());

    let catalog = DetectProperties::new();
    let registry = Registry::new(catalog.all())?;

    let sources = load_sources(&args.source_options(), &registry, json_mode)?;
    let config = PropertyConfiguration::new(&registry, sources);

    let unknown_keys = config.unknown_keys();
    if !unknown_keys.is_empty() {
        if args.strict() {
            bail!(
                "unknown properties: {}",
                unknown_keys.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
            );
        }
        if !json_mode {
            for key in &unknown_keys {
                eprintln!("{} {key}", "Warning: Unknown property:".yellow());
            }
        }
    }

    let failures = config.validate();
    if !failures.is_empty() {
        for failure in &failures {
            eprintln!("  {}", failure.to_string().red());
        }
        bail!("{} properties have invalid values", failures.len());
    }

    let tools = config
        .selection(&catalog.detect_tools, &catalog.detect_tools_excluded)?
        .resolve();
    let detectors = config
        .selection(
            &catalog.detect_included_detector_types,
            &catalog.detect_excluded_detector_types,
        )?
        .resolve();

    if let Some(required) = config.get(&catalog.detect_required_detector_types)? {
        detectors.require(&required)?;
    }

    let report = Report::new(
        config.effective_values()?,
        &args.report_options(),
        &tools,
        &detectors,
        unknown_keys,
    );

    if json_mode {
        println!("{}", report.to_json()?);
    } else {
        report.print();
    }

    Ok(())
}
