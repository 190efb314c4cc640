//! Aggregated outcome of a complete run.

use crate::exit_code::ExitCode;
use crate::file::VirtualFile;
use crate::message::Severity;

/// How a single file fared in the scheduler.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Outcome {
    /// The processor ran; the file may still carry warnings or infos.
    Processed,
    /// Resolution attached a hard error; the processor was bypassed.
    FailedResolution,
    /// Reading the file or running the processor failed; the failure was
    /// converted into an error message on the file.
    FailedProcessing,
}

/// One `(file, outcome)` pair in a [`RunResult`].
#[derive(Clone, Debug)]
pub struct FileOutcome {
    /// The processed (or failed) file with its final message list.
    pub file: VirtualFile,
    /// What happened to it.
    pub outcome: Outcome,
}

/// Ordered collection of per-file outcomes plus derived totals.
///
/// Entry order is the resolver's deterministic order; the scheduler merges
/// outcomes back by index, so the order is independent of processing
/// concurrency or completion order.
#[derive(Clone, Debug, Default)]
pub struct RunResult {
    entries: Vec<FileOutcome>,
}

impl RunResult {
    /// Wraps already-ordered entries.
    #[must_use]
    pub fn new(entries: Vec<FileOutcome>) -> Self {
        Self { entries }
    }

    /// Returns the ordered entries.
    #[must_use]
    pub fn entries(&self) -> &[FileOutcome] {
        &self.entries
    }

    /// Returns the ordered files without their outcomes.
    pub fn files(&self) -> impl Iterator<Item = &VirtualFile> {
        self.entries.iter().map(|entry| &entry.file)
    }

    /// Total number of error-severity messages across all files.
    #[must_use]
    pub fn errors(&self) -> usize {
        self.count(Severity::Error)
    }

    /// Total number of warning-severity messages across all files.
    #[must_use]
    pub fn warnings(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.files().map(|file| file.count(severity)).sum()
    }

    /// Computes the exit code.
    ///
    /// Errors always fail; `frail` additionally fails warnings-only runs.
    #[must_use]
    pub fn exit_code(&self, frail: bool) -> ExitCode {
        let failed = self.errors() > 0 || (frail && self.warnings() > 0);
        ExitCode::from_success(!failed)
    }
}

#[cfg(test)]
mod tests {
    use super::{FileOutcome, Outcome, RunResult};
    use crate::exit_code::ExitCode;
    use crate::file::VirtualFile;
    use crate::message::Message;

    fn entry(name: &str, messages: Vec<Message>) -> FileOutcome {
        let mut file = VirtualFile::new(name);
        for message in messages {
            file.append_message(message);
        }
        FileOutcome {
            file,
            outcome: Outcome::Processed,
        }
    }

    #[test]
    fn counts_span_all_files() {
        let result = RunResult::new(vec![
            entry("a", vec![Message::error(1, 1, "x"), Message::warning(2, 1, "y")]),
            entry("b", vec![Message::warning(1, 1, "z"), Message::info(1, 2, "note")]),
        ]);
        assert_eq!(result.errors(), 1);
        assert_eq!(result.warnings(), 2);
    }

    #[test]
    fn warnings_fail_only_in_frail_mode() {
        let result = RunResult::new(vec![entry("a", vec![Message::warning(1, 1, "y")])]);
        assert_eq!(result.exit_code(false), ExitCode::Ok);
        assert_eq!(result.exit_code(true), ExitCode::Failure);
    }

    #[test]
    fn info_messages_never_fail() {
        let result = RunResult::new(vec![entry("a", vec![Message::info(1, 1, "note")])]);
        assert_eq!(result.exit_code(true), ExitCode::Ok);
    }

    #[test]
    fn empty_run_succeeds() {
        let result = RunResult::default();
        assert_eq!(result.exit_code(false), ExitCode::Ok);
        assert_eq!(result.entries().len(), 0);
    }
}
