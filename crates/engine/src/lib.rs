#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `engine` is the resolution, filtering, and aggregation pipeline at the
//! heart of lintrun. Given a working directory, a sequence of input
//! specifiers, and a pluggable [`Processor`], it resolves the specifiers to a
//! deduplicated, deterministically ordered set of [`VirtualFile`]s, applies
//! ignore-file and extension policy, runs every file through the processor
//! with bounded concurrency, and merges the outcomes into a single
//! [`RunResult`].
//!
//! # Design
//!
//! - [`Specifier`] is a tagged variant: a literal path, a glob pattern, or a
//!   pre-built file handle. Each variant's resolution is a pure function of
//!   its payload plus the run context; failures are attached file-by-file
//!   and never abort the batch.
//! - The resolver distinguishes *explicit* intent (paths and handles named
//!   directly) from *discovered* intent (directory and glob expansion).
//!   Explicit files are processed regardless of extension and hard-error
//!   when ignored; discovered files are filtered silently.
//! - The scheduler dispatches independent per-file read-and-process units on
//!   a rayon pool sized by [`Options::jobs`] and merges outcomes back by
//!   index, so report order never depends on completion order.
//!
//! # Invariants
//!
//! - Resolution output is sorted ascending-lexicographically by display path
//!   after deduplication; running twice over an unchanged tree yields an
//!   identical ordered set.
//! - A file's [`Origin`](vfile::Origin) is fixed at resolution time, except
//!   for the single promotion from discovered to explicit when the same path
//!   is also named directly.
//! - Only the engine-fatal [`EngineError::NoInput`] aborts a run before any
//!   per-file work; every other problem surfaces as a message on some file.
//!
//! # Examples
//!
//! Process a pre-built handle without touching the disk:
//!
//! ```
//! use engine::{Engine, Input, Options, ProcessorError, Specifier};
//! use vfile::VirtualFile;
//!
//! let engine = Engine::new(Options::new("."));
//! let handle = VirtualFile::new("draft.txt").with_content("hello\n");
//! let noop = |_file: &mut VirtualFile| -> Result<(), ProcessorError> { Ok(()) };
//!
//! let result = engine
//!     .run(vec![Specifier::Handle(handle)], Input::Interactive, &noop)
//!     .unwrap();
//! assert_eq!(result.entries().len(), 1);
//! assert!(result.exit_code(false).is_ok());
//! ```
//!
//! # See also
//!
//! - `ignores` for the hierarchical ignore-file registry consulted during
//!   resolution.
//! - `report` for rendering the [`RunResult`] this crate produces.

mod error;
mod options;
mod processor;
mod resolver;
mod scheduler;
mod specifier;

pub use error::EngineError;
pub use options::{DEFAULT_EXTENSIONS, Options};
pub use processor::{Processor, ProcessorError};
pub use specifier::Specifier;

use ignores::IgnoreRegistry;
use vfile::{RunResult, VirtualFile};

/// Placeholder path given to the synthetic file built from piped input.
pub const STDIN_NAME: &str = "<stdin>";

/// Availability of the fallback input stream.
///
/// Consulted only when no specifiers are given: piped content becomes a
/// single synthetic [`VirtualFile`] named [`STDIN_NAME`], while an
/// interactive stream with nothing piped is the [`EngineError::NoInput`]
/// failure case.
#[derive(Clone, Debug)]
pub enum Input {
    /// The stream is attached to a terminal; there is nothing to read.
    Interactive,
    /// The stream was piped and fully read.
    Piped(String),
}

/// The run entry point tying resolution, scheduling, and aggregation together.
#[derive(Debug)]
pub struct Engine {
    options: Options,
}

impl Engine {
    /// Creates an engine with the given options.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Returns the engine's options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Resolves `specifiers`, processes every resolved file, and aggregates
    /// the outcomes.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NoInput`] when `specifiers` is empty and
    /// `input` is interactive. Every other failure mode is per-file and
    /// reported through the returned [`RunResult`].
    pub fn run(
        &self,
        specifiers: Vec<Specifier>,
        input: Input,
        processor: &dyn Processor,
    ) -> Result<RunResult, EngineError> {
        let files = if specifiers.is_empty() {
            match input {
                Input::Interactive => return Err(EngineError::NoInput),
                Input::Piped(content) => vec![VirtualFile::new(STDIN_NAME).with_content(content)],
            }
        } else {
            let cwd = resolver::absolutize(&self.options.cwd);
            let registry = IgnoreRegistry::new(&cwd, self.options.ignore_file_name.clone());
            resolver::resolve(specifiers, &cwd, &self.options, &registry)
        };

        let entries = scheduler::run_files(files, &self.options, processor);
        Ok(RunResult::new(entries))
    }
}
