//! Terminal link picker
//!
//! `LinkPicker` backed by a dialoguer fuzzy-select prompt on stderr.
//! Without a terminal there is nobody to ask, so every pick is dismissed.

use dialoguer::FuzzySelect;
use is_terminal::IsTerminal;

use crate::domain::ports::LinkPicker;

#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPicker {
    interactive: bool,
}

impl TerminalPicker {
    /// Interactive only when stderr is a terminal
    pub fn new() -> Self {
        Self {
            interactive: std::io::stderr().is_terminal(),
        }
    }

    /// A picker that never prompts
    pub fn disabled() -> Self {
        Self { interactive: false }
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }
}

impl LinkPicker for TerminalPicker {
    fn pick(&self, options: &[String], placeholder: &str) -> Option<usize> {
        if !self.interactive || options.is_empty() {
            return None;
        }

        match FuzzySelect::new()
            .with_prompt(placeholder)
            .items(options)
            .default(0)
            .interact_opt()
        {
            Ok(choice) => choice,
            Err(error) => {
                tracing::warn!(error = %error, "link picker failed");
                None
            }
        }
    }
}
