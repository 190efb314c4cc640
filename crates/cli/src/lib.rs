#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` is the command-line frontend over the lintrun engine: it parses
//! arguments, decides whether standard input stands in for missing
//! specifiers, runs the engine with the built-in [`TextChecks`] processor,
//! and writes the report to the error stream so the primary output stream
//! stays clean for piping.
//!
//! # Design
//!
//! - [`run`] is the binary's entry point. It takes the raw argument iterator
//!   together with injected stdout/stderr writers, which keeps every
//!   execution path unit-testable without spawning processes.
//! - [`execute`] is the testable core underneath [`run`]: it receives the
//!   already-parsed [`Args`] and an explicit [`Input`], so tests can spoof
//!   an interactive or piped stream.
//! - Engine-fatal failures (`No input`) and I/O problems while reporting are
//!   printed as a single `lintrun: ...` line on the error stream.
//!
//! # See also
//!
//! - `engine` for the resolution and scheduling pipeline.
//! - `report` for the report format this frontend prints.

mod args;
mod checks;

pub use args::Args;
pub use checks::TextChecks;

use std::ffi::OsString;
use std::io::{Read, Write};
use std::path::PathBuf;

use clap::Parser;
use clap::error::ErrorKind;
use engine::{Engine, Input, Options, Specifier};
use is_terminal::IsTerminal;
use report::{ReportOptions, write_report};
use tracing_subscriber::EnvFilter;
use vfile::ExitCode;

/// Parses `args`, runs the engine, and writes the report to `stderr`.
///
/// Standard input is consulted only when no specifiers are given: piped
/// content is processed as a single synthetic file, while an interactive
/// terminal with nothing piped fails with `No input`.
pub fn run<I, Out, Err>(args: I, stdout: &mut Out, stderr: &mut Err) -> ExitCode
where
    I: IntoIterator,
    I::Item: Into<OsString> + Clone,
    Out: Write,
    Err: Write,
{
    let args = match Args::try_parse_from(args) {
        Ok(args) => args,
        Err(error) => {
            let rendered = error.render();
            return match error.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    let _ = write!(stdout, "{rendered}");
                    ExitCode::Ok
                }
                _ => {
                    let _ = write!(stderr, "{rendered}");
                    ExitCode::Failure
                }
            };
        }
    };

    let input = if args.specifiers.is_empty() {
        read_stdin()
    } else {
        Input::Interactive
    };
    execute(args, input, stdout, stderr)
}

/// Runs the engine for already-parsed arguments and an explicit input
/// stream state.
pub fn execute<Out, Err>(args: Args, input: Input, _stdout: &mut Out, stderr: &mut Err) -> ExitCode
where
    Out: Write,
    Err: Write,
{
    init_tracing();

    let cwd = match args.cwd.clone().map_or_else(std::env::current_dir, Ok) {
        Ok(cwd) => cwd,
        Err(error) => {
            let _ = writeln!(stderr, "lintrun: cannot determine working directory: {error}");
            return ExitCode::Failure;
        }
    };

    let engine = Engine::new(options(&args, cwd));
    let specifiers: Vec<Specifier> = args
        .specifiers
        .iter()
        .map(|raw| Specifier::parse(raw))
        .collect();

    let result = match engine.run(specifiers, input, &TextChecks::default()) {
        Ok(result) => result,
        Err(error) => {
            let _ = writeln!(stderr, "lintrun: {error}");
            return ExitCode::Failure;
        }
    };
    tracing::debug!(
        files = result.entries().len(),
        errors = result.errors(),
        warnings = result.warnings(),
        "run complete"
    );

    let report_options = ReportOptions {
        quiet: args.quiet,
        silent: args.silent,
        frail: args.frail,
    };
    match write_report(&result, &report_options, stderr) {
        Ok(code) => code,
        Err(error) => {
            let _ = writeln!(stderr, "lintrun: cannot write report: {error}");
            ExitCode::Failure
        }
    }
}

fn options(args: &Args, cwd: PathBuf) -> Options {
    let mut options = Options::new(cwd);
    options.extensions = args.extensions.clone();
    options.ignore_file_name = args.ignore_file_name.clone();
    options.silently_ignore = args.silently_ignore;
    options.jobs = args.jobs;
    options
}

/// Classifies the real standard input stream.
fn read_stdin() -> Input {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Input::Interactive;
    }
    let mut content = String::new();
    match stdin.lock().read_to_string(&mut content) {
        Ok(_) => Input::Piped(content),
        Err(_) => Input::Interactive,
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}
