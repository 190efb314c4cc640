#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `vfile` defines the data model shared across the lintrun workspace: the
//! in-memory file representation ([`VirtualFile`]), the diagnostic messages
//! attached to it ([`Message`], [`Severity`]), the per-file processing outcome
//! ([`Outcome`]), the aggregated run result ([`RunResult`]), and the process
//! exit status ([`ExitCode`]). The engine populates these values, the reporter
//! consumes them read-only, and nothing here touches the filesystem.
//!
//! # Design
//!
//! - [`VirtualFile`] carries a resolved path, a display path rendered relative
//!   to the working directory, optional preloaded content, an append-only
//!   message list, and an [`Origin`] tag recording whether the file was named
//!   directly or discovered by search. The origin is fixed at resolution time
//!   and selects the ignore policy applied upstream.
//! - [`Message`] values are plain `{line, column, severity, text}` records
//!   with one-based positions. Ordering helpers keep report output stable.
//! - [`RunResult`] owns the ordered `(file, outcome)` pairs produced by a run
//!   and derives error/warning totals and the final [`ExitCode`] from them.
//!
//! # Invariants
//!
//! - Message lists are append-only during processing; [`VirtualFile::sort_messages`]
//!   performs a stable sort by `(line, column)` so insertion order breaks ties.
//! - A file's [`Origin`] never changes after resolution except for the single
//!   permitted promotion from discovered to explicit during deduplication.
//! - [`RunResult`] preserves the order its entries were constructed with; it
//!   never reorders files.
//!
//! # Examples
//!
//! ```
//! use vfile::{ExitCode, Message, Severity, VirtualFile};
//!
//! let mut file = VirtualFile::new("readme.md");
//! file.append_message(Message::new(Severity::Error, 1, 1, "No such file or directory"));
//!
//! assert!(file.has_errors());
//! assert_eq!(file.messages()[0].severity(), Severity::Error);
//! assert_eq!(ExitCode::Failure.as_i32(), 1);
//! ```
//!
//! # See also
//!
//! - `engine` for the resolution and scheduling pipeline that fills these
//!   types in.
//! - `report` for the deterministic textual rendering.

mod exit_code;
mod file;
mod message;
mod result;

pub use exit_code::ExitCode;
pub use file::{Origin, VirtualFile};
pub use message::{Message, Severity};
pub use result::{FileOutcome, Outcome, RunResult};
