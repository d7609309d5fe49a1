//! Terminal progress while categories are sampled

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static CATEGORY_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {prefix} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress display for one view at a time
///
/// Each call to [`ProgressManager::start_view`] replaces the previous bar.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a manager with no active bar
    pub const fn new() -> Self {
        Self { bar: None }
    }

    /// Begin tracking a view that samples `categories` categories
    pub fn start_view(&mut self, view: &str, categories: usize) {
        self.finish();
        let bar = ProgressBar::new(categories as u64);
        bar.set_style(CATEGORY_STYLE.clone());
        bar.set_prefix(view.to_string());
        self.bar = Some(bar);
    }

    /// Report that `category` has been sampled
    pub fn advance(&self, category: &str) {
        if let Some(ref bar) = self.bar {
            bar.set_message(category.to_string());
            bar.inc(1);
        }
    }

    /// Position of the active bar, zero when idle
    pub fn position(&self) -> u64 {
        self.bar.as_ref().map_or(0, ProgressBar::position)
    }

    /// Clear the active bar
    pub fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}
