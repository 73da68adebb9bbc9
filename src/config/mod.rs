//! Configuration module for temme-live
//!
//! Configuration hierarchy:
//! 1. Environment variables (TEMME_LIVE_*)
//! 2. Project config (.temme/config.toml)
//! 3. User config (<config dir>/temme-live/config.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{PROJECT_CONFIG, USER_CONFIG};
pub use types::{FetchConfig, LiveConfig, LogConfig};
