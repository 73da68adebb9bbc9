//! User interaction ports
//!
//! Notifications, the link picker, and the status indicator. All three are
//! fire-and-forget from the engine's point of view.

use crate::domain::value_objects::{Command, SessionState};

/// Spinner frames shown while the engine is busy
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// User-facing notifications
pub trait Notifier {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Quick-pick over a list of labels
pub trait LinkPicker {
    /// Index of the chosen option, or `None` if the user dismissed the picker
    fn pick(&self, options: &[String], placeholder: &str) -> Option<usize>;
}

/// What the status indicator should show
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    pub state: SessionState,
    pub text: String,
    /// Show a spinner
    pub busy: bool,
    /// Command bound to clicking the indicator
    pub cancel_command: Option<Command>,
}

impl StatusUpdate {
    pub fn for_state(state: SessionState) -> Self {
        let busy = state.is_busy();
        Self {
            state,
            text: format!("temme: {}", state),
            busy,
            cancel_command: busy.then_some(Command::StopWatch),
        }
    }
}

/// Status bar item mirroring the session state
pub trait StatusIndicator {
    fn update(&self, status: &StatusUpdate);
}
