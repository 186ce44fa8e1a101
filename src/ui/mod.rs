use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::models::OperationKind;

fn progress_bar_style() -> Result<ProgressStyle> {
    ProgressStyle::with_template("{spinner:.green} {prefix} {msg} [{elapsed_precise}]")
        .context("Failed to create progress bar style")
}

fn action_verb(kind: OperationKind) -> &'static str {
    match kind {
        OperationKind::Install => "Installing",
        OperationKind::Uninstall => "Uninstalling",
    }
}

/// Spinner shown while the device waits for the user to confirm an operation.
pub struct OperationManager {
    progress: ProgressBar,
}

impl OperationManager {
    pub fn new(kind: OperationKind, app_name: &str, product_name: &str) -> Result<Self> {
        let progress = ProgressBar::new_spinner();
        progress.set_style(progress_bar_style()?);
        progress.set_prefix(format!("{} {}:", action_verb(kind), app_name));
        progress.set_message(Self::get_waiting_message(product_name));
        progress.enable_steady_tick(Duration::from_millis(100));

        Ok(Self { progress })
    }

    fn get_waiting_message(product_name: &str) -> String {
        format!("Waiting for an action on your {}...", product_name)
    }

    pub fn finish(&self) {
        self.progress.finish_and_clear();
    }
}
