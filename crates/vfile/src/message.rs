use std::fmt;

/// Severity of a diagnostic message.
///
/// Variants are ordered so that `Info < Warning < Error`, which lets callers
/// filter with ordinary comparisons.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
    /// Informational note; never affects the exit status.
    Info,
    /// Something worth fixing; fails the run only in strict mode.
    Warning,
    /// A definite problem; always fails the run.
    Error,
}

impl Severity {
    /// Returns the lowercase label used in report output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single diagnostic attached to a [`VirtualFile`](crate::VirtualFile).
///
/// Positions are one-based; resolution-time diagnostics conventionally point
/// at `1:1` because they concern the file as a whole.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    severity: Severity,
    line: u32,
    column: u32,
    text: String,
}

impl Message {
    /// Creates a message with the given severity and one-based position.
    #[must_use]
    pub fn new(severity: Severity, line: u32, column: u32, text: impl Into<String>) -> Self {
        Self {
            severity,
            line,
            column,
            text: text.into(),
        }
    }

    /// Creates an error-severity message.
    #[must_use]
    pub fn error(line: u32, column: u32, text: impl Into<String>) -> Self {
        Self::new(Severity::Error, line, column, text)
    }

    /// Creates a warning-severity message.
    #[must_use]
    pub fn warning(line: u32, column: u32, text: impl Into<String>) -> Self {
        Self::new(Severity::Warning, line, column, text)
    }

    /// Creates an info-severity message.
    #[must_use]
    pub fn info(line: u32, column: u32, text: impl Into<String>) -> Self {
        Self::new(Severity::Info, line, column, text)
    }

    /// Returns the message severity.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the one-based line number.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Returns the one-based column number.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Returns the message text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}
