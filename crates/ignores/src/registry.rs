use std::path::{Path, PathBuf};
use std::sync::Arc;

use dashmap::DashMap;
use tracing::trace;

use crate::rules::DirRules;

/// Lazily populated, per-run cache of directory ignore rules.
///
/// The registry is created once per run with the working directory as its
/// root and an optional ignore-file name. When no name is configured the
/// registry is disabled: nothing is loaded and nothing is ever ignored.
///
/// The cache is safe for concurrent lazy population; whichever worker loads
/// a directory first wins, and since loading is a pure function of the
/// directory's ignore file, racing loads agree.
#[derive(Debug)]
pub struct IgnoreRegistry {
    root: PathBuf,
    file_name: Option<String>,
    cache: DashMap<PathBuf, Arc<DirRules>>,
}

impl IgnoreRegistry {
    /// Creates a registry rooted at `root`.
    ///
    /// `file_name` is the conventional per-directory ignore-file name (for
    /// example `.lintrunignore`); `None` disables ignore handling entirely.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, file_name: Option<String>) -> Self {
        Self {
            root: root.into(),
            file_name,
            cache: DashMap::new(),
        }
    }

    /// Returns `true` when an ignore-file name is configured.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.file_name.is_some()
    }

    /// Returns the rules for `dir`, loading and caching them on first use.
    #[must_use]
    pub fn rules_for(&self, dir: &Path) -> Arc<DirRules> {
        let Some(file_name) = self.file_name.as_deref() else {
            return Arc::new(DirRules::empty(dir));
        };
        self.cache
            .entry(dir.to_path_buf())
            .or_insert_with(|| {
                trace!(dir = %dir.display(), "loading ignore rules");
                Arc::new(DirRules::load(dir, file_name))
            })
            .clone()
    }

    /// Returns `true` if `path` is excluded under the rules of its own
    /// directory or any ancestor directory up to the registry root.
    ///
    /// Directories are consulted deepest first; the first definitive verdict
    /// wins, so a nested ignore file can re-include what an ancestor
    /// excluded. Paths outside the root are never ignored.
    #[must_use]
    pub fn is_ignored(&self, path: &Path, is_dir: bool) -> bool {
        if self.file_name.is_none() {
            return false;
        }
        let Some(start) = path.parent() else {
            return false;
        };

        let mut dir = start;
        while dir.starts_with(&self.root) {
            let rules = self.rules_for(dir);
            if let Ok(relative) = path.strip_prefix(dir)
                && let Some(ignored) = rules.verdict(relative, is_dir)
            {
                return ignored;
            }
            match dir.parent() {
                Some(parent) => dir = parent,
                None => break,
            }
        }
        false
    }
}
