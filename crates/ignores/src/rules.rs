use std::path::{Path, PathBuf};

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use tracing::warn;

/// Compiled ignore rules of a single directory.
///
/// Patterns use gitignore semantics rooted at the owning directory: a
/// pattern without a slash matches at any depth below it, a leading `/`
/// anchors to the directory, a trailing `/` restricts to directories, and a
/// leading `!` re-includes a previously ignored path.
#[derive(Debug)]
pub struct DirRules {
    dir: PathBuf,
    matcher: Option<Gitignore>,
}

impl DirRules {
    /// Loads the ignore file named `file_name` from `dir`.
    ///
    /// A missing file yields an empty rule set. A file that cannot be read
    /// or parsed is downgraded to a warning and also yields an empty set;
    /// ignore problems never block resolution.
    pub(crate) fn load(dir: &Path, file_name: &str) -> Self {
        let ignore_path = dir.join(file_name);
        if !ignore_path.is_file() {
            return Self::empty(dir);
        }

        let mut builder = GitignoreBuilder::new(dir);
        if let Some(error) = builder.add(&ignore_path) {
            warn!(
                path = %ignore_path.display(),
                %error,
                "skipping malformed ignore file"
            );
            return Self::empty(dir);
        }
        match builder.build() {
            Ok(matcher) => Self {
                dir: dir.to_path_buf(),
                matcher: Some(matcher),
            },
            Err(error) => {
                warn!(
                    path = %ignore_path.display(),
                    %error,
                    "skipping malformed ignore file"
                );
                Self::empty(dir)
            }
        }
    }

    pub(crate) fn empty(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
            matcher: None,
        }
    }

    /// Returns the directory these rules are bound to.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns `true` when no rules were loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matcher
            .as_ref()
            .is_none_or(|matcher| matcher.is_empty())
    }

    /// Judges `relative` (a path below [`dir`](Self::dir)) against the rules.
    ///
    /// `Some(true)` means an ignore rule matched, `Some(false)` means a
    /// negated rule re-included the path, `None` means the rules have no
    /// opinion and an ancestor's rules should be consulted.
    #[must_use]
    pub fn verdict(&self, relative: &Path, is_dir: bool) -> Option<bool> {
        let matcher = self.matcher.as_ref()?;
        let matched = matcher.matched(relative, is_dir);
        if matched.is_ignore() {
            Some(true)
        } else if matched.is_whitelist() {
            Some(false)
        } else {
            None
        }
    }
}
