//! Batch progress display for rendering multiple source images

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many source images of a batch have been rendered
///
/// The current file name is shown next to the bar.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    completed: usize,
    file_count: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no bar yet
    pub const fn new() -> Self {
        Self {
            bar: None,
            completed: 0,
            file_count: 0,
        }
    }

    /// Create the bar for a batch of `file_count` files
    pub fn initialize(&mut self, file_count: usize) {
        self.file_count = file_count;
        self.completed = 0;

        let bar = ProgressBar::new(file_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        self.bar = Some(bar);
    }

    /// Show the file currently being rendered
    pub fn start_file(&self, path: &Path) {
        if let Some(ref bar) = self.bar {
            let display_name = path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();
            bar.set_message(display_name);
        }
    }

    /// Count a finished file
    pub fn complete_file(&mut self) {
        self.completed = (self.completed + 1).min(self.file_count);
        if let Some(ref bar) = self.bar {
            bar.set_position(self.completed as u64);
        }
    }

    /// Number of files completed so far
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Number of files in the batch
    pub const fn file_count(&self) -> usize {
        self.file_count
    }

    /// Clear the display
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
