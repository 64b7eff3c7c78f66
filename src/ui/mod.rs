//! UI/Progress presentation layer
//!
//! This module handles:
//! - Progress reporting while a batch runs, as an indicatif bar
//! - Silent progress for verbose runs, where log lines take its place
//! - The end-of-run summary ([`summary`])
//!
//! Batch code only talks to the [`ProgressReporter`] trait.

pub mod summary;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter for a batch of files
pub trait ProgressReporter: Send + Sync {
    /// Begin a batch of `total` files
    fn start(&mut self, total: u64, verb: &str);

    /// Show the file currently being processed
    fn update_file(&mut self, file_path: &str);

    /// Mark one file done
    fn inc_file(&mut self);

    fn finish(&mut self);
}

/// Interactive progress reporter drawing to stderr.
///
/// indicatif hides the bar when stderr is not a terminal.
#[derive(Default)]
pub struct InteractiveProgressReporter {
    file_pb: Option<ProgressBar>,
}

impl InteractiveProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

fn bar_style() -> ProgressStyle {
    ProgressStyle::with_template("{prefix:>8.cyan.bold} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .map(|style| style.progress_chars("#>-"))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
}

/// Keep the tail of long paths so the bar fits on one line.
fn truncate_path(file_path: &str) -> String {
    const MAX: usize = 50;
    let count = file_path.chars().count();
    if count <= MAX {
        return file_path.to_string();
    }
    let tail: String = file_path.chars().skip(count - (MAX - 3)).collect();
    format!("...{tail}")
}

impl ProgressReporter for InteractiveProgressReporter {
    fn start(&mut self, total: u64, verb: &str) {
        let file_pb = ProgressBar::new(total);
        file_pb.set_style(bar_style());
        file_pb.set_prefix(verb.to_string());
        self.file_pb = Some(file_pb);
    }

    fn update_file(&mut self, file_path: &str) {
        if let Some(ref file_pb) = self.file_pb {
            file_pb.set_message(truncate_path(file_path));
        }
    }

    fn inc_file(&mut self) {
        if let Some(ref file_pb) = self.file_pb {
            file_pb.inc(1);
        }
    }

    fn finish(&mut self) {
        if let Some(file_pb) = self.file_pb.take() {
            file_pb.finish_and_clear();
        }
    }
}

/// No-op reporter used with `--verbose`.
#[derive(Default)]
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn start(&mut self, _total: u64, _verb: &str) {}

    fn update_file(&mut self, _file_path: &str) {}

    fn inc_file(&mut self) {}

    fn finish(&mut self) {}
}

/// Reporter for the current verbosity.
pub fn reporter(verbose: bool) -> Box<dyn ProgressReporter> {
    if verbose {
        Box::new(SilentProgressReporter)
    } else {
        Box::new(InteractiveProgressReporter::new())
    }
}
