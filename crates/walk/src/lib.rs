#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `walk` provides the deterministic filesystem traversal lintrun uses when
//! expanding directory and glob specifiers into concrete file lists. The
//! walker enumerates regular files, directories, and symbolic links below a
//! root, and keeps ordering stable across platforms by sorting each
//! directory's entries lexicographically before yielding them. Stable
//! traversal order is what makes report output reproducible run over run.
//!
//! # Design
//!
//! - [`WalkBuilder`] configures the traversal root and whether search pruning
//!   applies (hidden entries and `node_modules` directories are skipped while
//!   searching, but not when a caller names such a path directly).
//! - [`Walker`] implements [`Iterator`] and yields [`WalkEntry`] values in
//!   depth-first order: a directory is yielded before its contents, and
//!   siblings appear in lexicographic name order.
//! - Symbolic links are yielded but never followed, so traversal cannot
//!   escape the root or cycle.
//!
//! # Invariants
//!
//! - Returned [`WalkEntry`] values always carry a path relative to the root
//!   with no `..` segments.
//! - A failure to read one directory or one entry's metadata surfaces as a
//!   [`WalkError`] for that point in the traversal; iteration continues with
//!   the remaining entries so one bad subtree cannot hide its siblings.
//!
//! # Examples
//!
//! ```
//! use std::fs;
//! use walk::WalkBuilder;
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! fs::create_dir(temp.path().join("nested"))?;
//! fs::write(temp.path().join("nested/inner.txt"), b"data")?;
//! fs::write(temp.path().join("outer.txt"), b"data")?;
//!
//! let walker = WalkBuilder::new(temp.path()).build()?;
//! let mut seen = Vec::new();
//! for entry in walker {
//!     seen.push(entry?.relative_path().to_path_buf());
//! }
//! assert_eq!(
//!     seen,
//!     vec![
//!         std::path::PathBuf::from("nested"),
//!         std::path::PathBuf::from("nested/inner.txt"),
//!         std::path::PathBuf::from("outer.txt"),
//!     ]
//! );
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

use std::error::Error;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Directory names skipped while search pruning is active.
const PRUNED_DIRS: &[&str] = &["node_modules"];

/// Configures a traversal rooted at a specific directory.
#[derive(Clone, Debug)]
pub struct WalkBuilder {
    root: PathBuf,
    search_pruning: bool,
}

impl WalkBuilder {
    /// Creates a builder for the given root.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            search_pruning: false,
        }
    }

    /// Enables or disables search pruning.
    ///
    /// When enabled, entries whose name starts with a dot and `node_modules`
    /// directories are skipped entirely. Directory-specifier expansion turns
    /// this on; glob expansion leaves it off so patterns can still reach into
    /// such trees.
    #[must_use]
    pub const fn search_pruning(mut self, prune: bool) -> Self {
        self.search_pruning = prune;
        self
    }

    /// Builds a [`Walker`] for the configured root.
    ///
    /// Fails when the root's metadata cannot be read or the root is not a
    /// directory.
    pub fn build(self) -> Result<Walker, WalkError> {
        let metadata = fs::metadata(&self.root)
            .map_err(|source| WalkError::root(self.root.clone(), source))?;
        if !metadata.is_dir() {
            let source = io::Error::new(io::ErrorKind::NotADirectory, "not a directory");
            return Err(WalkError::root(self.root, source));
        }

        let mut walker = Walker {
            search_pruning: self.search_pruning,
            stack: Vec::new(),
        };
        match DirectoryState::new(self.root, PathBuf::new()) {
            Ok(state) => walker.stack.push(state),
            Err(error) => return Err(error),
        }
        Ok(walker)
    }
}

/// Depth-first iterator over filesystem entries with sorted siblings.
#[derive(Debug)]
pub struct Walker {
    search_pruning: bool,
    stack: Vec<DirectoryState>,
}

impl Walker {
    fn pruned(&self, name: &OsStr) -> bool {
        if !self.search_pruning {
            return false;
        }
        name.to_str()
            .is_some_and(|name| name.starts_with('.') || PRUNED_DIRS.contains(&name))
    }
}

impl Iterator for Walker {
    type Item = Result<WalkEntry, WalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (full_path, relative_path) = {
                let state = match self.stack.last_mut() {
                    Some(state) => state,
                    None => return None,
                };
                match state.next_name() {
                    Some(name) => {
                        let full_path = state.fs_path.join(&name);
                        let relative_path = if state.relative_prefix.as_os_str().is_empty() {
                            PathBuf::from(&name)
                        } else {
                            state.relative_prefix.join(&name)
                        };
                        (full_path, relative_path)
                    }
                    None => {
                        self.stack.pop();
                        continue;
                    }
                }
            };

            if let Some(name) = relative_path.file_name()
                && self.pruned(name)
            {
                continue;
            }

            let file_type = match fs::symlink_metadata(&full_path) {
                Ok(metadata) => metadata.file_type(),
                Err(source) => return Some(Err(WalkError::metadata(full_path, source))),
            };

            if file_type.is_dir() {
                match DirectoryState::new(full_path.clone(), relative_path.clone()) {
                    Ok(state) => self.stack.push(state),
                    Err(error) => return Some(Err(error)),
                }
            }

            return Some(Ok(WalkEntry {
                full_path,
                relative_path,
                file_type,
            }));
        }
    }
}

#[derive(Debug)]
struct DirectoryState {
    fs_path: PathBuf,
    relative_prefix: PathBuf,
    entries: Vec<OsString>,
    index: usize,
}

impl DirectoryState {
    fn new(fs_path: PathBuf, relative_prefix: PathBuf) -> Result<Self, WalkError> {
        let read_dir =
            fs::read_dir(&fs_path).map_err(|source| WalkError::read_dir(fs_path.clone(), source))?;
        let mut entries = Vec::new();
        for entry in read_dir {
            let entry =
                entry.map_err(|source| WalkError::read_dir(fs_path.clone(), source))?;
            entries.push(entry.file_name());
        }
        entries.sort();

        Ok(Self {
            fs_path,
            relative_prefix,
            entries,
            index: 0,
        })
    }

    fn next_name(&mut self) -> Option<OsString> {
        let name = self.entries.get(self.index)?.clone();
        self.index += 1;
        Some(name)
    }
}

/// One traversal step.
#[derive(Debug)]
pub struct WalkEntry {
    full_path: PathBuf,
    relative_path: PathBuf,
    file_type: fs::FileType,
}

impl WalkEntry {
    /// Returns the absolute (root-joined) path of the entry.
    #[must_use]
    pub fn full_path(&self) -> &Path {
        &self.full_path
    }

    /// Returns the path relative to the traversal root.
    #[must_use]
    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    /// Returns `true` for regular files.
    #[must_use]
    pub fn is_file(&self) -> bool {
        self.file_type.is_file()
    }

    /// Returns `true` for directories.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.file_type.is_dir()
    }
}

/// Error raised at one point of a traversal.
#[derive(Debug)]
pub struct WalkError {
    kind: WalkErrorKind,
}

#[derive(Debug)]
enum WalkErrorKind {
    Root { path: PathBuf, source: io::Error },
    ReadDir { path: PathBuf, source: io::Error },
    Metadata { path: PathBuf, source: io::Error },
}

impl WalkError {
    fn root(path: PathBuf, source: io::Error) -> Self {
        Self {
            kind: WalkErrorKind::Root { path, source },
        }
    }

    fn read_dir(path: PathBuf, source: io::Error) -> Self {
        Self {
            kind: WalkErrorKind::ReadDir { path, source },
        }
    }

    fn metadata(path: PathBuf, source: io::Error) -> Self {
        Self {
            kind: WalkErrorKind::Metadata { path, source },
        }
    }

    /// Returns the path the failure concerns.
    #[must_use]
    pub fn path(&self) -> &Path {
        match &self.kind {
            WalkErrorKind::Root { path, .. }
            | WalkErrorKind::ReadDir { path, .. }
            | WalkErrorKind::Metadata { path, .. } => path,
        }
    }
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            WalkErrorKind::Root { path, source } => {
                write!(
                    f,
                    "failed to open traversal root '{}': {}",
                    path.display(),
                    source
                )
            }
            WalkErrorKind::ReadDir { path, source } => {
                write!(f, "failed to read directory '{}': {}", path.display(), source)
            }
            WalkErrorKind::Metadata { path, source } => {
                write!(
                    f,
                    "failed to inspect metadata for '{}': {}",
                    path.display(),
                    source
                )
            }
        }
    }
}

impl Error for WalkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            WalkErrorKind::Root { source, .. }
            | WalkErrorKind::ReadDir { source, .. }
            | WalkErrorKind::Metadata { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{WalkBuilder, Walker};
    use std::fs;
    use std::path::PathBuf;

    fn collect_relative_paths(walker: Walker) -> Vec<PathBuf> {
        walker
            .map(|entry| entry.expect("walker entry").relative_path().to_path_buf())
            .collect()
    }

    #[test]
    fn missing_root_fails_to_build() {
        let error = match WalkBuilder::new("/nonexistent/path/for/walker").build() {
            Ok(_) => panic!("missing root should fail"),
            Err(error) => error,
        };
        assert!(error.to_string().contains("traversal root"));
    }

    #[test]
    fn file_root_fails_to_build() {
        let temp = tempfile::tempdir().expect("tempdir");
        let file = temp.path().join("file.txt");
        fs::write(&file, b"data").expect("write");
        assert!(WalkBuilder::new(&file).build().is_err());
    }

    #[test]
    fn yields_deterministic_depth_first_order() {
        let temp = tempfile::tempdir().expect("tempdir");
        let root = temp.path();
        fs::create_dir(root.join("b")).expect("dir b");
        fs::create_dir(root.join("a")).expect("dir a");
        fs::write(root.join("a/inner.txt"), b"data").expect("write inner");
        fs::write(root.join("c.txt"), b"data").expect("write file");

        let walker = WalkBuilder::new(root).build().expect("build walker");
        assert_eq!(
            collect_relative_paths(walker),
            vec![
                PathBuf::from("a"),
                PathBuf::from("a/inner.txt"),
                PathBuf::from("b"),
                PathBuf::from("c.txt"),
            ]
        );
    }

    #[test]
    fn search_pruning_skips_hidden_and_vendored() {
        let temp = tempfile::tempdir().expect("tempdir");
        let root = temp.path();
        fs::create_dir(root.join(".git")).expect("dir .git");
        fs::write(root.join(".git/config"), b"data").expect("write config");
        fs::create_dir(root.join("node_modules")).expect("dir node_modules");
        fs::write(root.join("node_modules/pkg.txt"), b"data").expect("write pkg");
        fs::write(root.join(".hidden.txt"), b"data").expect("write hidden");
        fs::write(root.join("visible.txt"), b"data").expect("write visible");

        let walker = WalkBuilder::new(root)
            .search_pruning(true)
            .build()
            .expect("build walker");
        assert_eq!(
            collect_relative_paths(walker),
            vec![PathBuf::from("visible.txt")]
        );
    }

    #[test]
    fn without_pruning_everything_is_yielded() {
        let temp = tempfile::tempdir().expect("tempdir");
        let root = temp.path();
        fs::create_dir(root.join("node_modules")).expect("dir node_modules");
        fs::write(root.join("node_modules/pkg.txt"), b"data").expect("write pkg");
        fs::write(root.join("one.txt"), b"data").expect("write one");

        let walker = WalkBuilder::new(root).build().expect("build walker");
        assert_eq!(
            collect_relative_paths(walker),
            vec![
                PathBuf::from("node_modules"),
                PathBuf::from("node_modules/pkg.txt"),
                PathBuf::from("one.txt"),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_are_yielded_but_not_followed() {
        use std::os::unix::fs::symlink;

        let temp = tempfile::tempdir().expect("tempdir");
        let root = temp.path().join("root");
        let target = temp.path().join("target");
        fs::create_dir(&root).expect("create root");
        fs::create_dir(&target).expect("create target");
        fs::write(target.join("inner.txt"), b"data").expect("write inner");
        symlink(&target, root.join("link")).expect("create symlink");

        let walker = WalkBuilder::new(&root).build().expect("build walker");
        let paths = collect_relative_paths(walker);
        assert_eq!(paths, vec![PathBuf::from("link")]);
    }
}
