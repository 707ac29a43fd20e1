//! CLI argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "asplode")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the archive file
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Directory that receives the result (default: current directory)
    #[arg(short = 'C', long = "directory", value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Print each archive as it is extracted
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long)]
    pub json: bool,

    /// Do not descend into archives found inside the result
    #[arg(long)]
    pub no_recurse: bool,

    /// Keep nested archive files after extracting them
    #[arg(long)]
    pub keep_nested: bool,

    /// Preserve file permissions from archive
    #[arg(long)]
    pub preserve_permissions: bool,
}
