//! Configuration module for MenuMaker
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority, applied by the binary)
//! 2. Environment variables (MENUMAKER_*)
//! 3. Explicit config file (`--config`)
//! 4. User config (~/.config/menumaker/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{user_config_path, ConfigWarning};
pub use types::{Config, DisplayConfig, EchoMode, OutputConfig, Verbosity};
