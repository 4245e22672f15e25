//! Error types for MenuMaker
//!
//! Uses `thiserror` for library errors. Bad keyboard input is not an error:
//! the display loop recovers from it locally (see `menu::input::Selection`).

use std::path::PathBuf;
use thiserror::Error;

use crate::menu::MenuId;

/// Result type alias for MenuMaker operations
pub type MenuResult<T> = Result<T, MenuError>;

/// Main error type for MenuMaker operations
#[derive(Error, Debug)]
pub enum MenuError {
    /// The id was not created by this tree
    #[error("unknown menu id {id}")]
    UnknownMenu { id: MenuId },

    /// Linking the submenu would let a menu reach itself
    #[error("adding '{child}' as a submenu of '{parent}' would create a cycle")]
    SubmenuCycle { parent: String, child: String },

    /// IO error on the input source or output sink
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },
}
