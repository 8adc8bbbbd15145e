//! Progress display fed by carving and solving step sequences

use crate::io::configuration::{PROGRESS_BAR_WIDTH, SPINNER_TICK_MS};
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static CARVE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "{{prefix:>8}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static SOLVE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{prefix:>8} {spinner} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Coordinates the carving bar and the solving spinner
pub struct ProgressManager {
    multi_progress: MultiProgress,
    carve_bar: Option<ProgressBar>,
    solve_spinner: Option<ProgressBar>,
}

impl ProgressManager {
    /// Create a manager drawing to stderr, or drawing nothing when `visible` is false
    pub fn new(visible: bool) -> Self {
        let multi_progress = if visible {
            MultiProgress::new()
        } else {
            MultiProgress::with_draw_target(ProgressDrawTarget::hidden())
        };

        Self {
            multi_progress,
            carve_bar: None,
            solve_spinner: None,
        }
    }

    /// Show a bar sized for `total` wall removals
    pub fn start_carving(&mut self, label: &str, total: usize) {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(CARVE_STYLE.clone());
        bar.set_prefix(label.to_string());
        self.carve_bar = Some(self.multi_progress.add(bar));
    }

    /// Advance the carving bar by one wall removal
    pub fn carved(&self) {
        if let Some(ref bar) = self.carve_bar {
            bar.inc(1);
        }
    }

    /// Close the carving bar
    pub fn complete_carving(&self, carved: usize) {
        if let Some(ref bar) = self.carve_bar {
            bar.finish_with_message(format!("{carved} passages"));
        }
    }

    /// Show the solving spinner
    pub fn start_solving(&mut self) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(SOLVE_STYLE.clone());
        spinner.set_prefix("solving");
        spinner.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
        self.solve_spinner = Some(self.multi_progress.add(spinner));
    }

    /// Report the length of the latest partial path
    pub fn expanded(&self, expanded: usize, path_len: usize) {
        if let Some(ref spinner) = self.solve_spinner {
            spinner.set_message(format!("{expanded} cells expanded, frontier path {path_len}"));
        }
    }

    /// Close the solving spinner
    pub fn complete_solving(&self, path_len: Option<usize>) {
        if let Some(ref spinner) = self.solve_spinner {
            let message = path_len.map_or_else(
                || "no route to the exit".to_string(),
                |len| format!("path of {len} cells"),
            );
            spinner.finish_with_message(message);
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        let _ = self.multi_progress.clear();
    }
}
