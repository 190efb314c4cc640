//! End-to-end resolution behavior over real fixture trees.

use std::fs;
use std::path::Path;

use engine::{Engine, Input, Options, ProcessorError, Specifier};
use vfile::{Origin, Outcome, VirtualFile};

fn noop(_file: &mut VirtualFile) -> Result<(), ProcessorError> {
    Ok(())
}

fn run(options: Options, specifiers: Vec<Specifier>) -> vfile::RunResult {
    Engine::new(options)
        .run(specifiers, Input::Interactive, &noop)
        .expect("run")
}

fn display_paths(result: &vfile::RunResult) -> Vec<String> {
    result
        .files()
        .map(|file| file.display_path().to_owned())
        .collect()
}

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("mkdir");
    }
    fs::write(path, content).expect("write");
}

#[test]
fn missing_explicit_path_yields_hard_error() {
    let temp = tempfile::tempdir().expect("tempdir");
    let result = run(
        Options::new(temp.path()),
        vec![Specifier::parse("missing.md")],
    );

    assert_eq!(display_paths(&result), ["missing.md"]);
    let entry = &result.entries()[0];
    assert_eq!(entry.outcome, Outcome::FailedResolution);
    let message = &entry.file.messages()[0];
    assert_eq!(
        (message.line(), message.column(), message.text()),
        (1, 1, "No such file or directory")
    );
    assert!(!result.exit_code(false).is_ok());
}

#[test]
fn unmatched_glob_is_a_successful_empty_run() {
    let temp = tempfile::tempdir().expect("tempdir");
    let result = run(Options::new(temp.path()), vec![Specifier::parse("*.md")]);
    assert!(result.entries().is_empty());
    assert!(result.exit_code(false).is_ok());
}

#[test]
fn empty_directory_specifier_is_a_successful_empty_run() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::create_dir(temp.path().join("empty")).expect("mkdir");
    let result = run(Options::new(temp.path()), vec![Specifier::parse("empty")]);
    assert!(result.entries().is_empty());
    assert!(result.exit_code(false).is_ok());
}

#[test]
fn directory_search_honors_extensions_and_sorts() {
    let temp = tempfile::tempdir().expect("tempdir");
    write(&temp.path().join("foo.txt"), "");
    write(&temp.path().join("bar.text"), "");
    write(&temp.path().join("skip.rs"), "");
    write(&temp.path().join("nested/qux.txt"), "");
    write(&temp.path().join("nested/quux.text"), "");

    let mut options = Options::new(temp.path());
    options.extensions = vec!["txt".to_owned(), ".text".to_owned()];
    let result = run(options, vec![Specifier::parse(".")]);

    assert_eq!(
        display_paths(&result),
        ["bar.text", "foo.txt", "nested/quux.text", "nested/qux.txt"]
    );
    assert!(result.files().all(|file| file.origin() == Origin::Discovered));
    assert!(result.exit_code(false).is_ok());
}

#[test]
fn directory_search_uses_default_extensions_when_unset() {
    let temp = tempfile::tempdir().expect("tempdir");
    write(&temp.path().join("notes.md"), "");
    write(&temp.path().join("plain.txt"), "");
    write(&temp.path().join("binary.o"), "");

    let result = run(Options::new(temp.path()), vec![Specifier::parse(".")]);
    assert_eq!(display_paths(&result), ["notes.md", "plain.txt"]);
}

#[test]
fn directory_search_skips_hidden_and_vendored_entries() {
    let temp = tempfile::tempdir().expect("tempdir");
    write(&temp.path().join(".hidden.txt"), "");
    write(&temp.path().join(".config/inner.txt"), "");
    write(&temp.path().join("node_modules/pkg.txt"), "");
    write(&temp.path().join("visible.txt"), "");

    let result = run(Options::new(temp.path()), vec![Specifier::parse(".")]);
    assert_eq!(display_paths(&result), ["visible.txt"]);
}

#[test]
fn glob_matches_files_without_extension_filtering() {
    let temp = tempfile::tempdir().expect("tempdir");
    write(&temp.path().join("nested/no-3.txt"), "");
    write(&temp.path().join("nested/no-4.text"), "");
    write(&temp.path().join("top.txt"), "");

    let result = run(
        Options::new(temp.path()),
        vec![
            Specifier::parse("*/*.txt"),
            Specifier::parse("*/*.text"),
        ],
    );
    assert_eq!(display_paths(&result), ["nested/no-3.txt", "nested/no-4.text"]);
}

#[test]
fn glob_matching_a_directory_expands_it() {
    let temp = tempfile::tempdir().expect("tempdir");
    write(&temp.path().join("nested/no-3.txt"), "");
    write(&temp.path().join("nested/skip.rs"), "");

    let result = run(Options::new(temp.path()), vec![Specifier::parse("**/nested")]);
    assert_eq!(display_paths(&result), ["nested/no-3.txt"]);
}

#[test]
fn glob_reaches_into_vendored_trees() {
    let temp = tempfile::tempdir().expect("tempdir");
    write(&temp.path().join("node_modules/ignore-one.txt"), "");
    write(&temp.path().join("one.txt"), "");

    let result = run(Options::new(temp.path()), vec![Specifier::parse("**/*.txt")]);
    assert_eq!(
        display_paths(&result),
        ["node_modules/ignore-one.txt", "one.txt"]
    );
}

#[test]
fn discovered_ignored_files_are_dropped_silently() {
    let temp = tempfile::tempdir().expect("tempdir");
    write(&temp.path().join(".fooignore"), "one.txt\n");
    write(&temp.path().join("a/one.txt"), "");
    write(&temp.path().join("a/two.txt"), "");

    let mut options = Options::new(temp.path());
    options.ignore_file_name = Some(".fooignore".to_owned());
    let result = run(options, vec![Specifier::parse("**/*.txt")]);

    assert_eq!(display_paths(&result), ["a/two.txt"]);
    assert!(result.exit_code(false).is_ok());
}

#[test]
fn explicit_ignored_file_is_a_hard_error() {
    let temp = tempfile::tempdir().expect("tempdir");
    write(&temp.path().join(".fooignore"), "two.txt\n");
    write(&temp.path().join("nested/two.txt"), "");

    let mut options = Options::new(temp.path());
    options.ignore_file_name = Some(".fooignore".to_owned());
    let result = run(options, vec![Specifier::parse("nested/two.txt")]);

    let entry = &result.entries()[0];
    assert_eq!(entry.outcome, Outcome::FailedResolution);
    assert_eq!(
        entry.file.messages()[0].text(),
        "Cannot process specified file: it's ignored"
    );
    assert!(!result.exit_code(false).is_ok());
}

#[test]
fn silently_ignore_drops_explicit_ignored_files() {
    let temp = tempfile::tempdir().expect("tempdir");
    write(&temp.path().join(".fooignore"), "two.txt\n");
    write(&temp.path().join("nested/two.txt"), "");
    write(&temp.path().join("nested/three.txt"), "");

    let mut options = Options::new(temp.path());
    options.ignore_file_name = Some(".fooignore".to_owned());
    options.silently_ignore = true;
    let result = run(
        options,
        vec![
            Specifier::parse("nested/two.txt"),
            Specifier::parse("nested/three.txt"),
        ],
    );

    assert_eq!(display_paths(&result), ["nested/three.txt"]);
    assert!(result.exit_code(false).is_ok());
}

#[test]
fn ignored_handles_follow_explicit_policy() {
    let temp = tempfile::tempdir().expect("tempdir");
    write(&temp.path().join(".fooignore"), "not-existing.txt\n");

    let mut options = Options::new(temp.path());
    options.ignore_file_name = Some(".fooignore".to_owned());
    let handle =
        VirtualFile::new(temp.path().join("not-existing.txt")).with_content("foo");
    let result = run(options, vec![Specifier::Handle(handle)]);

    let entry = &result.entries()[0];
    assert_eq!(entry.file.display_path(), "not-existing.txt");
    assert_eq!(
        entry.file.messages()[0].text(),
        "Cannot process specified file: it's ignored"
    );
}

#[test]
fn handles_with_content_never_touch_the_disk() {
    let temp = tempfile::tempdir().expect("tempdir");
    let handle =
        VirtualFile::new(temp.path().join("not-on-disk.txt")).with_content("payload");
    let result = run(Options::new(temp.path()), vec![Specifier::Handle(handle)]);

    let entry = &result.entries()[0];
    assert_eq!(entry.outcome, Outcome::Processed);
    assert_eq!(entry.file.content(), Some("payload"));
    assert!(entry.file.messages().is_empty());
    assert!(result.exit_code(false).is_ok());
}

#[test]
fn explicit_files_skip_extension_filtering() {
    let temp = tempfile::tempdir().expect("tempdir");
    write(&temp.path().join("program.rs"), "fn main() {}\n");

    let mut options = Options::new(temp.path());
    options.extensions = vec!["txt".to_owned()];
    let result = run(options, vec![Specifier::parse("program.rs")]);

    assert_eq!(display_paths(&result), ["program.rs"]);
    assert_eq!(result.entries()[0].outcome, Outcome::Processed);
}

#[test]
fn duplicate_resolutions_collapse_and_promote_origin() {
    let temp = tempfile::tempdir().expect("tempdir");
    write(&temp.path().join("nested/two.txt"), "");
    write(&temp.path().join("nested/three.txt"), "");

    let result = run(
        Options::new(temp.path()),
        vec![
            Specifier::parse("nested"),
            Specifier::parse("nested/two.txt"),
        ],
    );

    assert_eq!(display_paths(&result), ["nested/three.txt", "nested/two.txt"]);
    let two = result
        .files()
        .find(|file| file.display_path() == "nested/two.txt")
        .expect("two.txt present");
    assert_eq!(two.origin(), Origin::Explicit);
    let three = result
        .files()
        .find(|file| file.display_path() == "nested/three.txt")
        .expect("three.txt present");
    assert_eq!(three.origin(), Origin::Discovered);
}

#[test]
fn mixed_specifiers_merge_into_one_sorted_set() {
    let temp = tempfile::tempdir().expect("tempdir");
    write(&temp.path().join("one.txt"), "");
    write(&temp.path().join("nested/two.txt"), "");
    write(&temp.path().join("nested/three.txt"), "");

    let handle = VirtualFile::new(temp.path().join("one.txt"));
    let result = run(
        Options::new(temp.path()),
        vec![Specifier::parse("nested"), Specifier::Handle(handle)],
    );

    assert_eq!(
        display_paths(&result),
        ["nested/three.txt", "nested/two.txt", "one.txt"]
    );
}

#[test]
fn resolution_is_idempotent_over_an_unchanged_tree() {
    let temp = tempfile::tempdir().expect("tempdir");
    write(&temp.path().join(".fooignore"), "drop.txt\n");
    write(&temp.path().join("a/drop.txt"), "");
    write(&temp.path().join("a/keep.txt"), "");
    write(&temp.path().join("b/keep.md"), "");

    let specifiers = || {
        vec![
            Specifier::parse("a"),
            Specifier::parse("b"),
            Specifier::parse("**/*.txt"),
        ]
    };
    let mut options = Options::new(temp.path());
    options.ignore_file_name = Some(".fooignore".to_owned());

    let first = run(options.clone(), specifiers());
    let second = run(options, specifiers());
    assert_eq!(display_paths(&first), display_paths(&second));
    assert_eq!(display_paths(&first), ["a/keep.txt", "b/keep.md"]);
}

#[test]
fn invalid_glob_patterns_fail_file_by_file() {
    let temp = tempfile::tempdir().expect("tempdir");
    write(&temp.path().join("ok.txt"), "");

    let result = run(
        Options::new(temp.path()),
        vec![Specifier::parse("a{b"), Specifier::parse("ok.txt")],
    );

    assert_eq!(result.entries().len(), 2);
    let broken = result
        .files()
        .find(|file| file.display_path() == "a{b")
        .expect("broken specifier present");
    assert!(broken.messages()[0].text().starts_with("Invalid glob pattern"));
    assert!(!result.exit_code(false).is_ok());
}
