use std::path::{Path, PathBuf};

use crate::message::{Message, Severity};

/// Records how a file entered the run.
///
/// The origin is fixed at resolution time and determines which ignore policy
/// applies: explicitly named files are hard-errored (or silently dropped when
/// configured) when an ignore rule matches them, while discovered files are
/// always excluded silently.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Origin {
    /// Named directly by the caller, either as a path or a pre-built handle.
    Explicit,
    /// Found while expanding a directory or glob specifier.
    Discovered,
}

/// In-memory representation of a file moving through the pipeline.
///
/// Created by the resolver (or supplied pre-built by the caller, in which
/// case the resolver only decorates it), populated with [`Message`]s by the
/// scheduler and processor, and consumed read-only by the reporter.
#[derive(Clone, Debug)]
pub struct VirtualFile {
    path: PathBuf,
    display_path: String,
    content: Option<String>,
    messages: Vec<Message>,
    origin: Origin,
}

impl VirtualFile {
    /// Creates an explicit file for `path` with no content loaded.
    ///
    /// The display path defaults to the lossy rendering of `path`; the
    /// resolver replaces it with a working-directory-relative form.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let display_path = path.to_string_lossy().into_owned();
        Self {
            path,
            display_path,
            content: None,
            messages: Vec::new(),
            origin: Origin::Explicit,
        }
    }

    /// Attaches preloaded content, preventing any later disk read.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Returns the resolved filesystem path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the path rendering used in reports.
    #[must_use]
    pub fn display_path(&self) -> &str {
        &self.display_path
    }

    /// Replaces the report rendering of the path.
    pub fn set_display_path(&mut self, display_path: impl Into<String>) {
        self.display_path = display_path.into();
    }

    /// Returns the preloaded or read content, if any.
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Stores content read from disk.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = Some(content.into());
    }

    /// Returns how the file entered the run.
    #[must_use]
    pub const fn origin(&self) -> Origin {
        self.origin
    }

    /// Sets the origin; called once by the resolver.
    pub fn set_origin(&mut self, origin: Origin) {
        self.origin = origin;
    }

    /// Upgrades a discovered file to explicit during deduplication.
    ///
    /// Explicit is the most permissive origin, so a file named directly is
    /// never dropped merely because a search also reached it.
    pub fn promote_to_explicit(&mut self) {
        self.origin = Origin::Explicit;
    }

    /// Returns the diagnostics collected so far, in insertion order until
    /// [`sort_messages`](Self::sort_messages) runs.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Appends a diagnostic message.
    pub fn append_message(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Returns `true` if any message has [`Severity::Error`].
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|message| message.severity() == Severity::Error)
    }

    /// Counts messages with the given severity.
    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.messages
            .iter()
            .filter(|message| message.severity() == severity)
            .count()
    }

    /// Stable-sorts messages by `(line, column)`; ties keep insertion order.
    pub fn sort_messages(&mut self) {
        self.messages
            .sort_by_key(|message| (message.line(), message.column()));
    }
}
