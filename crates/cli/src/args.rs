//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Arguments accepted by the `lintrun` binary.
#[derive(Clone, Debug, Parser)]
#[command(
    name = "lintrun",
    version,
    about = "Resolve files, run per-file checks, and report diagnostics",
    long_about = None
)]
pub struct Args {
    /// Files, directories, or glob patterns to process. With none given,
    /// piped standard input is processed instead.
    #[arg(value_name = "SPECIFIER")]
    pub specifiers: Vec<String>,

    /// Extension allow-list applied to directory search (repeatable; with
    /// or without a leading dot). Explicit files are processed regardless.
    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Name of the per-directory ignore file to honor. Omitting this
    /// disables ignore handling entirely.
    #[arg(long, value_name = "NAME")]
    pub ignore_file_name: Option<String>,

    /// Drop explicitly named ignored files silently instead of erroring.
    #[arg(long)]
    pub silently_ignore: bool,

    /// Treat warnings as errors when computing the exit code.
    #[arg(long)]
    pub frail: bool,

    /// Do not print `no issues found` lines for clean files.
    #[arg(long, short)]
    pub quiet: bool,

    /// Print only error diagnostics.
    #[arg(long, short = 'S')]
    pub silent: bool,

    /// Worker threads for file processing (0 = automatic).
    #[arg(long, short, value_name = "N", default_value_t = 0)]
    pub jobs: usize,

    /// Working directory used for resolution and glob rooting.
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,
}
