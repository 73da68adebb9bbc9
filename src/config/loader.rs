//! Configuration loading

use std::fs;
use std::path::Path;

use crate::error::{LiveError, LiveResult};

use super::types::LiveConfig;

pub use crate::domain::value_objects::ConfigWarning;

/// Project config location, relative to the project root
pub const PROJECT_CONFIG: &str = ".temme/config.toml";

/// User config location, relative to the platform config dir
pub const USER_CONFIG: &str = "temme-live/config.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> LiveResult<(LiveConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: LiveConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| LiveError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> LiveConfig {
    if let Some(root) = project_root {
        let project_config = root.join(PROJECT_CONFIG);
        if let Some(config) = load_reporting(&project_config) {
            return with_env_overrides(config);
        }
    }

    if let Some(user_config_dir) = dirs::config_dir() {
        let user_config = user_config_dir.join(USER_CONFIG);
        if let Some(config) = load_reporting(&user_config) {
            return with_env_overrides(config);
        }
    }

    with_env_overrides(LiveConfig::default())
}

fn load_reporting(path: &Path) -> Option<LiveConfig> {
    if !path.exists() {
        return None;
    }
    match load_with_warnings(path) {
        Ok((config, warnings)) => {
            for w in warnings {
                tracing::warn!(
                    key = %w.key,
                    file = %w.file.display(),
                    line = ?w.line,
                    suggestion = ?w.suggestion,
                    "unknown config key"
                );
            }
            Some(config)
        }
        Err(error) => {
            tracing::warn!(error = %error, "ignoring unreadable config");
            None
        }
    }
}

/// Apply environment variable overrides (TEMME_LIVE_* prefix)
pub fn with_env_overrides(mut config: LiveConfig) -> LiveConfig {
    if let Ok(language) = std::env::var("TEMME_LIVE_LANGUAGE") {
        if !language.trim().is_empty() {
            config.language_id = language.trim().to_string();
        }
    }

    if let Ok(suffix) = std::env::var("TEMME_LIVE_OUTPUT_SUFFIX") {
        if !suffix.is_empty() {
            config.output_suffix = suffix;
        }
    }

    // Seconds; unparsable values are ignored
    if let Ok(timeout) = std::env::var("TEMME_LIVE_FETCH_TIMEOUT") {
        if let Ok(secs) = timeout.trim().parse::<u64>() {
            config.fetch.timeout_secs = secs;
        }
    }

    if let Ok(level) = std::env::var("TEMME_LIVE_LOG") {
        if !level.trim().is_empty() {
            config.log.level = level.trim().to_lowercase();
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "language_id",
        "output_suffix",
        "link_scan_limit",
        "fetch",
        "timeout_secs",
        "user_agent",
        "log",
        "level",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
