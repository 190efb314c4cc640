#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `report` renders a [`RunResult`] into the deterministic textual report
//! lintrun prints on its error stream, and computes the final [`ExitCode`].
//! The rendering is a pure function of the run result, so identical runs
//! produce byte-identical reports.
//!
//! # Design
//!
//! - Files appear in the result's order (the resolver's lexicographic
//!   order). A file with messages renders as a header line followed by one
//!   `line:column  severity  text` line per message and a trailing blank
//!   line; a clean file renders as a single `path: no issues found` line.
//! - When any errors or warnings exist, a one-line summary with a marker
//!   glyph (`✗` for failures, `⚠` for warnings only) and totals is appended,
//!   separated from the body by exactly one blank line. Info messages are
//!   displayed but never counted.
//! - [`ReportOptions::quiet`] hides clean files; [`ReportOptions::silent`]
//!   additionally restricts output and totals to error-severity messages.
//!
//! # Examples
//!
//! ```
//! use report::{ReportOptions, render};
//! use vfile::{FileOutcome, Message, Outcome, RunResult, VirtualFile};
//!
//! let mut file = VirtualFile::new("missing.md");
//! file.append_message(Message::error(1, 1, "No such file or directory"));
//! let result = RunResult::new(vec![FileOutcome {
//!     file,
//!     outcome: Outcome::FailedResolution,
//! }]);
//!
//! let text = render(&result, &ReportOptions::default());
//! assert_eq!(
//!     text,
//!     "missing.md\n  1:1  error  No such file or directory\n\n\u{2717} 1 error\n"
//! );
//! ```
//!
//! # See also
//!
//! - `engine` for how the rendered result is produced.

use std::io::{self, Write};

use vfile::{ExitCode, Message, RunResult, Severity};

/// Marker glyph prefixed to a summary that contains errors.
const CROSS: char = '\u{2717}';

/// Marker glyph prefixed to a warnings-only summary.
const WARNING_SIGN: char = '\u{26a0}';

/// Presentation flags consumed by the reporter.
///
/// `frail` is the stricter exit-code mode: warnings alone fail the run. It
/// is configuration owned by the caller and merely consumed here.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReportOptions {
    /// Hide `no issues found` lines for clean files.
    pub quiet: bool,
    /// Show and count only error-severity messages; implies `quiet`.
    pub silent: bool,
    /// Fail the run on warnings as well as errors.
    pub frail: bool,
}

/// Renders the report text for `result`.
#[must_use]
pub fn render(result: &RunResult, options: &ReportOptions) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut errors = 0usize;
    let mut warnings = 0usize;

    for file in result.files() {
        let shown: Vec<&Message> = file
            .messages()
            .iter()
            .filter(|message| !options.silent || message.severity() == Severity::Error)
            .collect();

        if shown.is_empty() {
            if !options.quiet && !options.silent {
                lines.push(format!("{}: no issues found", file.display_path()));
            }
            continue;
        }

        for message in &shown {
            match message.severity() {
                Severity::Error => errors += 1,
                Severity::Warning => warnings += 1,
                Severity::Info => {}
            }
        }

        lines.push(file.display_path().to_owned());
        for message in shown {
            lines.push(format!(
                "  {}:{}  {}  {}",
                message.line(),
                message.column(),
                message.severity(),
                message.text()
            ));
        }
        lines.push(String::new());
    }

    if errors > 0 || warnings > 0 {
        // One blank line before the summary, collapsing with a message
        // block's trailing blank.
        if lines.last().is_none_or(|line| !line.is_empty()) {
            lines.push(String::new());
        }
        lines.push(summary_line(errors, warnings));
    } else if lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    if lines.is_empty() {
        return String::new();
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Renders the report into `writer` and returns the exit code.
///
/// The code is computed from the full run result, not the (possibly
/// filtered) rendering, so `silent` cannot turn a failing run green.
pub fn write_report<W: Write>(
    result: &RunResult,
    options: &ReportOptions,
    writer: &mut W,
) -> io::Result<ExitCode> {
    writer.write_all(render(result, options).as_bytes())?;
    Ok(result.exit_code(options.frail))
}

fn summary_line(errors: usize, warnings: usize) -> String {
    let glyph = if errors > 0 { CROSS } else { WARNING_SIGN };
    let mut parts = Vec::new();
    if errors > 0 {
        parts.push(count_label(errors, "error"));
    }
    if warnings > 0 {
        parts.push(count_label(warnings, "warning"));
    }
    format!("{glyph} {}", parts.join(", "))
}

fn count_label(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
