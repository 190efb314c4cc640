#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `ignores` answers one question for the resolution pipeline: is a path
//! excluded under the ignore rules rooted at the working directory? Rules
//! live in conventionally named files (the name is configurable and the
//! whole mechanism is disabled when no name is supplied), one file per
//! directory, inherited by everything below that directory.
//!
//! # Design
//!
//! - [`DirRules`] is the compiled rule set of a single directory: the
//!   directory's ignore file parsed with gitignore semantics and rooted at
//!   that directory. A missing file compiles to an empty set; a malformed
//!   file is downgraded to a warning and an empty set.
//! - [`IgnoreRegistry`] owns a concurrent cache of [`DirRules`] keyed by
//!   directory. Rule sets are discovered lazily, at most once per directory
//!   per run; the cache lives only for the run.
//! - Matching walks from the path's own directory up to the configured root,
//!   deepest directory first. The first definitive verdict (ignore or
//!   negated re-include) wins, so the most specific directory takes
//!   precedence, exactly like hierarchical ignore-file systems.
//!
//! # Invariants
//!
//! - The registry never writes to the filesystem; the cache is its only
//!   mutable state and population is idempotent, so concurrent lazy
//!   population cannot produce divergent rule sets.
//! - Paths outside the configured root are never ignored.
//!
//! # Examples
//!
//! ```
//! use std::fs;
//! use ignores::IgnoreRegistry;
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! fs::write(temp.path().join(".fooignore"), "*.tmp\n")?;
//!
//! let registry = IgnoreRegistry::new(temp.path(), Some(".fooignore".to_owned()));
//! assert!(registry.is_ignored(&temp.path().join("scratch.tmp"), false));
//! assert!(!registry.is_ignored(&temp.path().join("notes.txt"), false));
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

mod registry;
mod rules;

pub use registry::IgnoreRegistry;
pub use rules::DirRules;
