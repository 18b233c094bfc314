//! Progress bar utilities.

use std::sync::Mutex;

use indicatif::{ProgressBar, ProgressStyle};

use crate::download::{Phase, ProgressSink};

/// Create a progress bar for item counts.
pub fn create_item_bar(total: u64, message: &str) -> ProgressBar {
    let bar = ProgressBar::new(total);
    let style = ProgressStyle::default_bar()
        .template(&format!(
            "{{spinner:.green}} {} [{{bar:40.cyan/blue}}] {{pos}}/{{len}}",
            message
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    bar.set_style(style);
    bar
}

fn phase_message(phase: Phase) -> &'static str {
    match phase {
        Phase::Resolve => "Gathering filenames...",
        Phase::Transfer => "Downloading files...",
    }
}

/// Renders each phase as a terminal progress bar.
#[derive(Default)]
pub struct ConsoleProgress {
    bar: Mutex<Option<ProgressBar>>,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        Self::default()
    }

    fn current(&self) -> Option<ProgressBar> {
        self.bar.lock().ok().and_then(|bar| bar.clone())
    }
}

impl ProgressSink for ConsoleProgress {
    fn on_phase_start(&self, phase: Phase, total: usize) {
        if let Ok(mut bar) = self.bar.lock() {
            *bar = Some(create_item_bar(total as u64, phase_message(phase)));
        }
    }

    fn on_progress(&self, _phase: Phase, completed: usize, _total: usize) {
        if let Some(bar) = self.current() {
            bar.set_position(completed as u64);
        }
    }

    fn on_phase_end(&self, _phase: Phase) {
        if let Ok(mut bar) = self.bar.lock() {
            if let Some(bar) = bar.take() {
                bar.finish();
            }
        }
    }
}
