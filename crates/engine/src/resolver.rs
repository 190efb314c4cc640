//! Turns specifiers into a deduplicated, deterministically ordered file set.
//!
//! Resolution fails file-by-file, never atomically: a missing explicit path
//! or an explicitly named ignored file becomes an entry carrying a hard
//! error message, while discovered files that fall to extension or ignore
//! filtering vanish silently.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fs;
use std::path::{Component, Path, PathBuf};

use globset::GlobBuilder;
use ignores::IgnoreRegistry;
use tracing::{debug, warn};
use vfile::{Message, Origin, VirtualFile};
use walk::WalkBuilder;

use crate::options::Options;
use crate::specifier::Specifier;

/// Hard error attached to explicit paths that do not exist.
pub(crate) const NO_SUCH_FILE: &str = "No such file or directory";

/// Hard error attached to explicitly named files matched by ignore rules.
pub(crate) const IGNORED_FILE: &str = "Cannot process specified file: it's ignored";

/// Ordered accumulator keyed by display path, which is what both
/// deduplication and the final lexicographic ordering are defined over.
type Resolved = BTreeMap<String, VirtualFile>;

/// Resolves every specifier against `cwd` and returns the ordered file set.
pub(crate) fn resolve(
    specifiers: Vec<Specifier>,
    cwd: &Path,
    options: &Options,
    registry: &IgnoreRegistry,
) -> Vec<VirtualFile> {
    let extensions = options.effective_extensions();
    let mut resolved = Resolved::new();

    for specifier in specifiers {
        match specifier {
            Specifier::Handle(mut file) => {
                let absolute = normalize(&cwd.join(file.path()));
                file.set_display_path(display_path(&absolute, cwd));
                file.set_origin(Origin::Explicit);
                add_explicit(&mut resolved, file, &absolute, options, registry);
            }
            Specifier::Path(path) => {
                let absolute = normalize(&cwd.join(&path));
                match fs::metadata(&absolute) {
                    Ok(metadata) if metadata.is_dir() => {
                        expand_directory(&mut resolved, &absolute, cwd, &extensions, registry);
                    }
                    Ok(_) => {
                        let mut file = VirtualFile::new(absolute.clone());
                        file.set_display_path(display_path(&absolute, cwd));
                        add_explicit(&mut resolved, file, &absolute, options, registry);
                    }
                    Err(_) => {
                        let mut file = VirtualFile::new(absolute.clone());
                        file.set_display_path(display_path(&absolute, cwd));
                        file.append_message(Message::error(1, 1, NO_SUCH_FILE));
                        insert(&mut resolved, file);
                    }
                }
            }
            Specifier::Glob(pattern) => {
                expand_glob(&mut resolved, &pattern, cwd, &extensions, registry);
            }
        }
    }

    resolved.into_values().collect()
}

/// Inserts an explicitly named file, applying the explicit ignore policy.
fn add_explicit(
    resolved: &mut Resolved,
    mut file: VirtualFile,
    absolute: &Path,
    options: &Options,
    registry: &IgnoreRegistry,
) {
    if registry.is_ignored(absolute, false) {
        if options.silently_ignore {
            debug!(path = %absolute.display(), "silently dropping ignored explicit file");
            return;
        }
        file.append_message(Message::error(1, 1, IGNORED_FILE));
    }
    insert(resolved, file);
}

/// Recursively expands a directory, discovering matching regular files.
///
/// Search pruning applies (hidden entries and vendored directories are
/// skipped), discovered files must pass the extension allow-list, and
/// ignored discovered files are dropped silently.
fn expand_directory(
    resolved: &mut Resolved,
    dir: &Path,
    cwd: &Path,
    extensions: &[String],
    registry: &IgnoreRegistry,
) {
    let walker = match WalkBuilder::new(dir).search_pruning(true).build() {
        Ok(walker) => walker,
        Err(error) => {
            warn!(%error, "skipping unreadable directory");
            return;
        }
    };
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                warn!(%error, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.is_file() || !has_allowed_extension(entry.full_path(), extensions) {
            continue;
        }
        add_discovered(resolved, entry.full_path(), cwd, registry);
    }
}

/// Expands a glob pattern against the deterministic walk of `cwd`.
///
/// Matched directories are searched like directory specifiers; matched
/// files are discovered as-is, with no extension filtering and no search
/// pruning, so patterns can deliberately reach into hidden or vendored
/// trees. A pattern matching nothing is not an error.
fn expand_glob(
    resolved: &mut Resolved,
    pattern: &str,
    cwd: &Path,
    extensions: &[String],
    registry: &IgnoreRegistry,
) {
    // `*` must not cross path separators; only `**` spans directories.
    let matcher = match GlobBuilder::new(pattern).literal_separator(true).build() {
        Ok(glob) => glob.compile_matcher(),
        Err(error) => {
            let mut file = VirtualFile::new(pattern);
            file.append_message(Message::error(1, 1, format!("Invalid glob pattern: {error}")));
            insert(resolved, file);
            return;
        }
    };
    let walker = match WalkBuilder::new(cwd).build() {
        Ok(walker) => walker,
        Err(error) => {
            warn!(%error, "cannot expand glob against working directory");
            return;
        }
    };
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                warn!(%error, "skipping unreadable entry");
                continue;
            }
        };
        if !matcher.is_match(entry.relative_path()) {
            continue;
        }
        if entry.is_dir() {
            expand_directory(resolved, entry.full_path(), cwd, extensions, registry);
        } else if entry.is_file() {
            add_discovered(resolved, entry.full_path(), cwd, registry);
        }
    }
}

/// Inserts a discovered file unless ignore rules exclude it.
fn add_discovered(resolved: &mut Resolved, absolute: &Path, cwd: &Path, registry: &IgnoreRegistry) {
    if registry.is_ignored(absolute, false) {
        return;
    }
    let mut file = VirtualFile::new(absolute);
    file.set_display_path(display_path(absolute, cwd));
    file.set_origin(Origin::Discovered);
    insert(resolved, file);
}

/// Deduplicating insert.
///
/// The first resolution of a path wins (including its content); a later
/// explicit resolution of the same path only promotes the entry's origin,
/// so a file named directly is never treated as merely discovered.
fn insert(resolved: &mut Resolved, file: VirtualFile) {
    match resolved.entry(file.display_path().to_owned()) {
        Entry::Vacant(entry) => {
            entry.insert(file);
        }
        Entry::Occupied(mut entry) => {
            if file.origin() == Origin::Explicit {
                entry.get_mut().promote_to_explicit();
            }
        }
    }
}

fn has_allowed_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed == ext))
}

/// Renders `absolute` relative to `cwd` for reports; paths outside the
/// working directory keep their absolute form.
fn display_path(absolute: &Path, cwd: &Path) -> String {
    absolute.strip_prefix(cwd).map_or_else(
        |_| absolute.display().to_string(),
        |relative| relative.display().to_string(),
    )
}

/// Resolves `path` against the process working directory and normalizes it
/// lexically (no symlink resolution, so nonexistent paths normalize too).
pub(crate) fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return normalize(path);
    }
    match std::env::current_dir() {
        Ok(current) => normalize(&current.join(path)),
        Err(_) => normalize(path),
    }
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
