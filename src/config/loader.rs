//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{MenuError, MenuResult};

use super::types::{Config, EchoMode, Verbosity};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> MenuResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| MenuError::Config {
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

/// Load the user config if present, otherwise defaults; env overrides apply to both
pub fn load_or_default() -> Config {
    if let Some(path) = user_config_path() {
        if path.exists() {
            match Config::load(&path) {
                Ok(config) => return with_env_overrides(config),
                Err(e) => tracing::debug!("Ignoring user config {}: {e}", path.display()),
            }
        }
    }

    with_env_overrides(Config::default())
}

/// Location of the per-user config file
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("menumaker").join("config.toml"))
}

/// Apply environment variable overrides (MENUMAKER_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_impl(config, |key| std::env::var(key).ok())
}

fn with_env_overrides_impl(mut config: Config, get_env: impl Fn(&str) -> Option<String>) -> Config {
    // MENUMAKER_ECHO_INPUT
    if let Some(value) = get_env("MENUMAKER_ECHO_INPUT") {
        if let Some(mode) = EchoMode::parse(&value) {
            config.display.echo_input = mode;
        }
    }

    // MENUMAKER_VERBOSITY
    if let Some(value) = get_env("MENUMAKER_VERBOSITY") {
        config.output.verbosity = Verbosity::parse(&value);
    }

    config
}

/// Line (1-based) where `key` is assigned or opened as a table
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| defines_key(line.trim_start(), key))
        .map(|i| i + 1)
}

fn defines_key(line: &str, key: &str) -> bool {
    if let Some(header) = line.strip_prefix('[') {
        return header
            .trim_start_matches('[')
            .split(']')
            .next()
            .and_then(|path| path.split('.').next_back())
            .is_some_and(|last| last.trim() == key);
    }

    match line.split_once('=') {
        Some((lhs, _)) => lhs.trim().trim_matches('"') == key,
        None => false,
    }
}

const KNOWN_KEYS: &[&str] = &["display", "echo_input", "output", "verbosity"];

/// Closest known key within two edits
fn suggest_key(unknown: &str) -> Option<String> {
    KNOWN_KEYS
        .iter()
        .map(|known| (edit_distance(unknown, known), *known))
        .filter(|(dist, _)| *dist <= 2)
        .min_by_key(|(dist, _)| *dist)
        .map(|(_, known)| known.to_string())
}

fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = diagonal + usize::from(ca != *cb);
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(diagonal + 1);
        }
    }

    row[b.len()]
}
