//! The seam between the pipeline and the pluggable content processor.

use vfile::VirtualFile;

/// Boxed error returned by a failing processor.
///
/// The scheduler catches it per file and converts it into an error-severity
/// message on that file; it never propagates to sibling files.
pub type ProcessorError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A pluggable per-file content processor.
///
/// Implementations inspect the file's content and append diagnostic
/// messages. The scheduler guarantees the content is populated before
/// `process` is invoked and may call it from multiple worker threads
/// concurrently, hence the `Sync` bound.
pub trait Processor: Sync {
    /// Processes one file, appending any diagnostics to it.
    fn process(&self, file: &mut VirtualFile) -> Result<(), ProcessorError>;
}

impl<F> Processor for F
where
    F: Fn(&mut VirtualFile) -> Result<(), ProcessorError> + Sync,
{
    fn process(&self, file: &mut VirtualFile) -> Result<(), ProcessorError> {
        self(file)
    }
}
