use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::ui;

/// Spinner shown on stderr while a slow request is in flight.
pub struct Progress {
    bar: Option<ProgressBar>,
}

impl Progress {
    #[must_use]
    pub fn spinner(message: &str) -> Self {
        if !ui::prefs().progress {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        bar.enable_steady_tick(Duration::from_millis(100));
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        Self { bar: Some(bar) }
    }

    pub fn finish_clear(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }

    pub fn finish_err(&self, message: &str) {
        if let Some(bar) = &self.bar {
            bar.abandon_with_message(message.to_string());
        }
    }

    /// Run `future` under a spinner, clearing it on success.
    pub async fn wrap<T, E, F>(message: &str, future: F) -> Result<T, E>
    where
        F: Future<Output = Result<T, E>>,
    {
        let progress = Self::spinner(message);
        let result = future.await;
        match &result {
            Ok(_) => progress.finish_clear(),
            Err(_) => progress.finish_err(&format!("{message} failed")),
        }
        result
    }
}
