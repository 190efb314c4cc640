//! Caller-provided references to input.

use std::path::PathBuf;

use vfile::VirtualFile;

/// One input specifier: a literal path, a glob pattern, or a pre-built file
/// handle.
///
/// Handles bypass path-existence checks and directory expansion entirely but
/// remain subject to the explicit-file ignore policy.
#[derive(Debug)]
pub enum Specifier {
    /// A literal file or directory path, resolved against the working
    /// directory.
    Path(PathBuf),
    /// A glob pattern, expanded against the filesystem rooted at the working
    /// directory.
    Glob(String),
    /// A pre-built file, used as-is.
    Handle(VirtualFile),
}

impl Specifier {
    /// Classifies a raw command-line argument.
    ///
    /// Arguments containing glob metacharacters (`*`, `?`, `[`, `{`) become
    /// [`Specifier::Glob`]; everything else is a literal path.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.contains(['*', '?', '[', '{']) {
            Self::Glob(raw.to_owned())
        } else {
            Self::Path(PathBuf::from(raw))
        }
    }
}

impl From<VirtualFile> for Specifier {
    fn from(file: VirtualFile) -> Self {
        Self::Handle(file)
    }
}

#[cfg(test)]
mod tests {
    use super::Specifier;

    #[test]
    fn plain_paths_stay_literal() {
        assert!(matches!(Specifier::parse("docs/readme.md"), Specifier::Path(_)));
        assert!(matches!(Specifier::parse("."), Specifier::Path(_)));
    }

    #[test]
    fn metacharacters_classify_as_globs() {
        assert!(matches!(Specifier::parse("**/*.txt"), Specifier::Glob(_)));
        assert!(matches!(Specifier::parse("file?.md"), Specifier::Glob(_)));
        assert!(matches!(Specifier::parse("a[bc].txt"), Specifier::Glob(_)));
        assert!(matches!(Specifier::parse("*.{md,txt}"), Specifier::Glob(_)));
    }
}
