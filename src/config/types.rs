//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::MenuResult;
use crate::menu::DisplayOptions;

use super::loader::{self, ConfigWarning};

/// When selection lines are echoed back to the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EchoMode {
    #[default]
    Never,
    Always,
    /// Echo when stdin is not a terminal (piped or redirected input)
    Auto,
}

impl EchoMode {
    pub fn resolve(self, stdin_is_terminal: bool) -> bool {
        match self {
            EchoMode::Never => false,
            EchoMode::Always => true,
            EchoMode::Auto => !stdin_is_terminal,
        }
    }

    pub(crate) fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "never" | "false" | "0" => Some(EchoMode::Never),
            "always" | "true" | "1" => Some(EchoMode::Always),
            "auto" => Some(EchoMode::Auto),
            _ => None,
        }
    }
}

/// Diagnostic output level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    pub(crate) fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        }
    }
}

/// Display loop configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DisplayConfig {
    #[serde(default)]
    pub echo_input: EchoMode,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> MenuResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> MenuResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from the user config file, or defaults, then apply env overrides
    pub fn load_or_default() -> Self {
        loader::load_or_default()
    }

    /// Apply MENUMAKER_* environment overrides
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Options for the display loop, resolving `auto` against stdin
    pub fn display_options(&self, stdin_is_terminal: bool) -> DisplayOptions {
        DisplayOptions {
            echo_input: self.display.echo_input.resolve(stdin_is_terminal),
        }
    }
}
