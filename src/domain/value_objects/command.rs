//! Editor commands exposed by the engine

use std::fmt;

pub const COMMAND_RUN_SELECTOR: &str = "temme.runSelector";
pub const COMMAND_START_WATCH: &str = "temme.startWatch";
pub const COMMAND_STOP_WATCH: &str = "temme.stopWatch";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    RunSelector,
    StartWatch,
    StopWatch,
}

impl Command {
    pub const ALL: [Command; 3] = [Command::RunSelector, Command::StartWatch, Command::StopWatch];

    /// Identifier the host registers the command under
    pub fn id(&self) -> &'static str {
        match self {
            Command::RunSelector => COMMAND_RUN_SELECTOR,
            Command::StartWatch => COMMAND_START_WATCH,
            Command::StopWatch => COMMAND_STOP_WATCH,
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}
