//! Notification and status adapters that report through `tracing`

use std::cell::Cell;

use crate::domain::ports::{Notifier, StatusIndicator, StatusUpdate, SPINNER_FRAMES};

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn info(&self, message: &str) {
        tracing::info!(target: "temme_live::notify", "{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: "temme_live::notify", "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "temme_live::notify", "{}", message);
    }
}

/// Logs each status change, prefixed with a spinner frame while busy
#[derive(Debug, Default)]
pub struct TracingStatus {
    frame: Cell<usize>,
}

impl TracingStatus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text as it would appear in a status bar
    pub fn render(&self, status: &StatusUpdate) -> String {
        if !status.busy {
            return status.text.clone();
        }
        let index = self.frame.get();
        self.frame.set(index.wrapping_add(1));
        format!("{} {}", SPINNER_FRAMES[index % SPINNER_FRAMES.len()], status.text)
    }
}

impl StatusIndicator for TracingStatus {
    fn update(&self, status: &StatusUpdate) {
        let text = self.render(status);
        match status.cancel_command {
            Some(command) => tracing::info!(target: "temme_live::status", cancel = %command, "{}", text),
            None => tracing::info!(target: "temme_live::status", "{}", text),
        }
    }
}
