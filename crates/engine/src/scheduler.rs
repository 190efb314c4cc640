//! Drives the resolved file set through the processor.
//!
//! Every file is an independent read-and-process unit; one file's failure is
//! converted into an error message on that file and never aborts siblings.
//! Dispatch is concurrent, but outcomes are merged back by index so the run
//! result keeps the resolver's deterministic order.

use std::fs;

use rayon::ThreadPoolBuilder;
use rayon::prelude::*;
use tracing::warn;
use vfile::{FileOutcome, Message, Outcome, VirtualFile};

use crate::options::Options;
use crate::processor::Processor;

/// Processes `files` and pairs each with its outcome, preserving order.
pub(crate) fn run_files(
    mut files: Vec<VirtualFile>,
    options: &Options,
    processor: &dyn Processor,
) -> Vec<FileOutcome> {
    let outcomes: Vec<Outcome> = match ThreadPoolBuilder::new().num_threads(options.jobs).build() {
        Ok(pool) => pool.install(|| {
            files
                .par_iter_mut()
                .map(|file| process_one(file, processor))
                .collect()
        }),
        Err(error) => {
            warn!(%error, "thread pool unavailable, processing serially");
            files
                .iter_mut()
                .map(|file| process_one(file, processor))
                .collect()
        }
    };

    for file in &mut files {
        file.sort_messages();
    }

    files
        .into_iter()
        .zip(outcomes)
        .map(|(file, outcome)| FileOutcome { file, outcome })
        .collect()
}

fn process_one(file: &mut VirtualFile, processor: &dyn Processor) -> Outcome {
    // Resolution-time hard errors bypass the processor entirely.
    if file.has_errors() {
        return Outcome::FailedResolution;
    }

    if file.content().is_none() {
        match fs::read_to_string(file.path()) {
            Ok(content) => file.set_content(content),
            Err(error) => {
                file.append_message(Message::error(1, 1, error.to_string()));
                return Outcome::FailedProcessing;
            }
        }
    }

    match processor.process(file) {
        Ok(()) => Outcome::Processed,
        Err(error) => {
            file.append_message(Message::error(1, 1, error.to_string()));
            Outcome::FailedProcessing
        }
    }
}
