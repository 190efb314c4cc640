//! Built-in plain-text checks.
//!
//! The engine's processor is pluggable; this is the small default the
//! binary ships so it is a working tool out of the box. The rules are
//! deliberately mundane whitespace hygiene checks, all warning-severity.

use engine::{Processor, ProcessorError};
use vfile::{Message, VirtualFile};

const MAX_LINE_LENGTH: usize = 120;

/// Default processor: whitespace and line-length hygiene for text files.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextChecks;

impl Processor for TextChecks {
    fn process(&self, file: &mut VirtualFile) -> Result<(), ProcessorError> {
        let mut found = Vec::new();

        if let Some(content) = file.content() {
            let mut last_line = 0u32;
            let mut last_width = 0usize;

            for (index, line) in content.lines().enumerate() {
                let line_number = u32::try_from(index + 1).unwrap_or(u32::MAX);
                let width = line.chars().count();
                last_line = line_number;
                last_width = width;

                let trimmed = line.trim_end();
                if trimmed.len() != line.len() {
                    found.push(Message::warning(
                        line_number,
                        column_after(trimmed),
                        "Unexpected trailing whitespace",
                    ));
                }
                if let Some(position) = line.find('\t') {
                    found.push(Message::warning(
                        line_number,
                        column_after(&line[..position]),
                        "Unexpected hard tab",
                    ));
                }
                if width > MAX_LINE_LENGTH {
                    found.push(Message::warning(
                        line_number,
                        u32::try_from(MAX_LINE_LENGTH + 1).unwrap_or(u32::MAX),
                        format!("Line exceeds {MAX_LINE_LENGTH} characters"),
                    ));
                }
            }

            if !content.is_empty() && !content.ends_with('\n') {
                found.push(Message::warning(
                    last_line,
                    u32::try_from(last_width + 1).unwrap_or(u32::MAX),
                    "Missing final newline",
                ));
            }
        }

        for message in found {
            file.append_message(message);
        }
        Ok(())
    }
}

/// One-based column just past the given prefix, counted in characters.
fn column_after(prefix: &str) -> u32 {
    u32::try_from(prefix.chars().count() + 1).unwrap_or(u32::MAX)
}
