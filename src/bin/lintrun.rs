//! Binary entry point for `lintrun`.
//!
//! All behavior lives in the `cli` crate; this shim only wires the real
//! process streams and argument list into [`cli::run`] and maps the result
//! onto the process exit status.

use std::process::ExitCode;

fn main() -> ExitCode {
    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr().lock();
    cli::run(std::env::args_os(), &mut stdout, &mut stderr).into()
}
