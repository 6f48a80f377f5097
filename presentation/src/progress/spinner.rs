//! Spinner shown while the backend is working on a request

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner that runs until dropped or finished
pub struct Spinner {
    bar: Option<ProgressBar>,
}

impl Spinner {
    /// Start the spinner; a hidden spinner does nothing
    pub fn start(message: &str, visible: bool) -> Self {
        if !visible {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar: Some(bar) }
    }

    /// Stop and erase the spinner
    pub fn finish(mut self) {
        self.clear();
    }

    fn clear(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.clear();
    }
}
