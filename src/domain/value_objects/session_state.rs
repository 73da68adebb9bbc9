//! Session state value object
//!
//! - `Ready`: idle, accepts a run or a watch
//! - `Running`: a one-shot evaluation is in progress
//! - `Watching`: a watch session owns listeners and cached content

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    #[default]
    Ready,
    Running,
    Watching,
}

impl SessionState {
    pub fn is_ready(&self) -> bool {
        matches!(self, SessionState::Ready)
    }

    pub fn is_watching(&self) -> bool {
        matches!(self, SessionState::Watching)
    }

    /// Running and Watching both show progress and offer cancellation
    pub fn is_busy(&self) -> bool {
        !self.is_ready()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Ready => "ready",
            SessionState::Running => "running",
            SessionState::Watching => "watching",
        }
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
