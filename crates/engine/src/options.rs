//! Run configuration consumed by the resolver and scheduler.

use std::path::PathBuf;

/// Extension allow-list applied to directory search when the caller supplies
/// none of its own.
pub const DEFAULT_EXTENSIONS: &[&str] = &["txt", "text", "md", "markdown"];

/// Configuration for a single run.
///
/// Fields are public; the struct is plain data handed to [`Engine::new`](crate::Engine::new).
#[derive(Clone, Debug)]
pub struct Options {
    /// Base directory for relative resolution and glob rooting.
    pub cwd: PathBuf,
    /// Filename suffixes (with or without a leading dot) used to filter
    /// directory-discovered files. Empty means [`DEFAULT_EXTENSIONS`].
    pub extensions: Vec<String>,
    /// Name of the per-directory ignore file. `None` disables ignore-file
    /// discovery entirely.
    pub ignore_file_name: Option<String>,
    /// Drop explicitly named ignored files silently instead of hard-erroring.
    pub silently_ignore: bool,
    /// Worker threads for per-file processing; `0` lets rayon decide.
    pub jobs: usize,
}

impl Options {
    /// Creates options for `cwd` with everything else defaulted.
    #[must_use]
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            extensions: Vec::new(),
            ignore_file_name: None,
            silently_ignore: false,
            jobs: 0,
        }
    }

    /// Returns the normalized extension allow-list for directory search.
    ///
    /// Leading dots are stripped so `txt` and `.txt` are equivalent; an
    /// empty configured list falls back to [`DEFAULT_EXTENSIONS`].
    #[must_use]
    pub fn effective_extensions(&self) -> Vec<String> {
        if self.extensions.is_empty() {
            return DEFAULT_EXTENSIONS.iter().map(|&ext| ext.to_owned()).collect();
        }
        self.extensions
            .iter()
            .map(|ext| ext.trim_start_matches('.').to_owned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_EXTENSIONS, Options};

    #[test]
    fn empty_extensions_fall_back_to_defaults() {
        let options = Options::new(".");
        assert_eq!(options.effective_extensions(), DEFAULT_EXTENSIONS);
    }

    #[test]
    fn leading_dots_are_stripped() {
        let mut options = Options::new(".");
        options.extensions = vec![".text".to_owned(), "txt".to_owned()];
        assert_eq!(options.effective_extensions(), ["text", "txt"]);
    }
}
