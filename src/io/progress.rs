//! Progress tracking for batch renders

use crate::algorithm::level::RecursionLevel;
use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressFinish, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static LEVEL_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Levels: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress display for a batch of level renders
///
/// The bar is created by [`ProgressManager::initialize`], so a manager that never starts a
/// batch draws nothing. Status lines are printed above the bar so they do not tear the
/// display. A bar dropped before [`ProgressManager::finish`] is cleared from the terminal.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager without a bar
    pub const fn new() -> Self {
        Self { bar: None }
    }

    /// Create the bar for `level_count` levels, replacing any previous one
    pub fn initialize(&mut self, level_count: usize) {
        if let Some(previous) = self.bar.take() {
            previous.finish_and_clear();
        }

        let bar = ProgressBar::new(level_count as u64)
            .with_style(LEVEL_STYLE.clone())
            .with_finish(ProgressFinish::AndClear);
        self.bar = Some(bar);
    }

    /// Check if a bar has been created and not yet finished
    pub fn is_active(&self) -> bool {
        self.bar.as_ref().is_some_and(|bar| !bar.is_finished())
    }

    /// Announce the level currently being built
    pub fn start_level(&self, level: RecursionLevel) {
        if let Some(bar) = &self.bar {
            bar.set_message(format!("building level {level}"));
        }
    }

    /// Record a finished render
    pub fn complete_level(
        &self,
        level: RecursionLevel,
        segments: usize,
        path: &Path,
        elapsed: Duration,
    ) {
        if let Some(bar) = &self.bar {
            bar.println(format!(
                "Level {level}: {segments} segments -> {} ({} ms)",
                path.display(),
                elapsed.as_millis()
            ));
            bar.inc(1);
        }
    }

    /// Record a level that was not rendered because its output already exists
    pub fn skip_level(&self, level: RecursionLevel, path: &Path) {
        if let Some(bar) = &self.bar {
            bar.println(format!(
                "Skipping level {level}: {} (output exists)",
                path.display()
            ));
            bar.inc(1);
        }
    }

    /// Print a status line without disturbing the bar
    pub fn report(&self, message: &str) {
        if let Some(bar) = &self.bar {
            bar.println(message);
        }
    }

    /// Number of levels accounted for so far
    pub fn position(&self) -> u64 {
        self.bar.as_ref().map_or(0, ProgressBar::position)
    }

    /// Leave the completed bar on screen
    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_with_message("done");
        }
    }
}
