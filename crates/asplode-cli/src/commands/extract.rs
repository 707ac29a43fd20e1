//! Extract command implementation.

use crate::cli::Cli;
use crate::error::convert_asplode_error;
use crate::observer::CliObserver;
use crate::output::OutputFormatter;
use anyhow::Context;
use anyhow::Result;
use anyhow::bail;
use asplode_core::AsplodeConfig;
use asplode_core::Asploder;
use std::env;
use std::path::PathBuf;

/// Builds the library configuration from command-line flags.
fn config_from_args(cli: &Cli) -> AsplodeConfig {
    AsplodeConfig::default()
        .with_recursive(!cli.no_recurse)
        .with_remove_nested_archives(!cli.keep_nested)
        .with_preserve_permissions(cli.preserve_permissions)
}

/// Resolves the `-C` directory, falling back to the current directory.
fn output_dir_from_args(cli: &Cli) -> Result<PathBuf> {
    let output_dir = match &cli.directory {
        Some(dir) => dir.clone(),
        None => env::current_dir().context("failed to get current directory")?,
    };

    if !output_dir.is_dir() {
        bail!(
            "Target directory not found: {}\n\
             HINT: -C must name an existing directory.",
            output_dir.display()
        );
    }

    Ok(output_dir)
}

pub fn execute(cli: &Cli, formatter: &dyn OutputFormatter) -> Result<()> {
    let output_dir = output_dir_from_args(cli)?;

    let asploder = Asploder::new(config_from_args(cli));
    let mut observer = CliObserver::new(formatter);

    let report = asploder
        .process_with_observer(&cli.archive, &output_dir, &mut observer)
        .map_err(convert_asplode_error)?;

    formatter.format_report(&report)?;

    Ok(())
}
